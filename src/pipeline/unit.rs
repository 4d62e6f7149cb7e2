//! Measurement-unit extraction: plural-aware unit matching, "+" compound
//! amounts, alternative units joined by "or", and folding of can/package
//! sizes captured earlier as parenthetical descriptions.

use log::debug;

use crate::lexicon::{plural_matches, Lexicon};
use crate::model::ParsedIngredient;
use crate::pipeline::{amount, MalformedLine};

/// Extract the measurement unit from the token sequence into the record,
/// adjusting the amount for "+" compounds and container folds.
pub fn parse(
    lexicon: &Lexicon,
    tokens: &mut Vec<String>,
    record: &mut ParsedIngredient,
) -> Result<(), MalformedLine> {
    // first token plural-matching the unit table wins; the recorded unit is
    // the table's plural form, not the token as written
    let matched = tokens
        .iter()
        .enumerate()
        .find_map(|(i, t)| lexicon.match_unit(t).map(|unit| (i, unit)));
    if let Some((index, unit)) = matched {
        debug!("token {:?} matched unit {:?}", tokens[index], unit);
        record.unit = unit.to_string();
        tokens.remove(index);

        // "1 cup + 2 tablespoons": fold the extra measurement into the
        // amount as a cup-equivalent
        while tokens.get(index).is_some_and(|t| t == "+") {
            tokens.remove(index);
            let Some(number) = tokens.get(index) else {
                return Err(MalformedLine);
            };
            let Some(value) = amount::evaluate(number) else {
                // superficially numeric token the evaluator rejects: stop
                // accumulating, keep the pipeline going
                break;
            };
            let Some(extra_unit) = tokens.get(index + 1) else {
                return Err(MalformedLine);
            };
            record.amount += to_cups(value, extra_unit);
            tokens.remove(index);
            tokens.remove(index);
        }
    }

    // "cake" only measures yeast
    if tokens.iter().any(|t| t == "yeast") {
        if let Some(position) = tokens.iter().position(|t| plural_matches(t, "cakes")) {
            tokens.remove(position);
            record.unit = "cakes".to_string();
        }
    }

    // the checks below inspect the leading token; nothing left to name the
    // ingredient means the line cannot be parsed further
    if tokens.is_empty() {
        return Err(MalformedLine);
    }

    // "cups or packages": two acceptable units
    if tokens[0] == "or" {
        let Some(second) = tokens.get(1) else {
            return Err(MalformedLine);
        };
        if let Some(alternative) = lexicon.match_unit(second) {
            record.unit = if record.unit.is_empty() {
                alternative.to_string()
            } else {
                format!("{} or {}", record.unit, alternative)
            };
            tokens.drain(0..2);
        }
    }

    if tokens.is_empty() {
        return Err(MalformedLine);
    }

    // "1 cup of milk" -> "1 cup milk"
    if tokens[0] == "of" {
        tokens.remove(0);
    }

    // "1 (14.5 ounce) can": the parenthetical aside carries the real
    // measurement; scale the amount and adopt its unit
    if record.unit == "cans" || record.unit == "packages" {
        for description in &record.descriptions {
            let words: Vec<&str> = description.split_whitespace().collect();
            if words.len() != 2 {
                continue;
            }
            let Some(count) = amount::parse_number(words[0]) else {
                continue;
            };
            // fold only when the aside names a known unit; a bare count
            // like "2 each" leaves amount and unit alone
            if let Some(folded) = lexicon.match_unit(words[1]) {
                record.amount *= count;
                record.unit = folded.to_string();
            }
        }
    }

    Ok(())
}

/// Cup-equivalent of an amount in another volume unit, for "+" compounds.
fn to_cups(value: f64, unit_token: &str) -> f64 {
    if plural_matches(unit_token, "quarts") {
        value / 4.0
    } else if plural_matches(unit_token, "pints") {
        value / 2.0
    } else if plural_matches(unit_token, "ounces") {
        value * 8.0
    } else if plural_matches(unit_token, "tablespoons") {
        value * 16.0
    } else if plural_matches(unit_token, "teaspoons") {
        value * 48.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ParsedIngredient {
        ParsedIngredient::new("test", 0)
    }

    fn run(words: &[&str], record: &mut ParsedIngredient) -> Result<Vec<String>, MalformedLine> {
        let lexicon = Lexicon::new();
        let mut tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        parse(&lexicon, &mut tokens, record)?;
        Ok(tokens)
    }

    #[test]
    fn test_plural_form_recorded() {
        let mut record = record();
        let tokens = run(&["cup", "milk"], &mut record).unwrap();
        assert_eq!(record.unit, "cups");
        assert_eq!(tokens, vec!["milk"]);
    }

    #[test]
    fn test_no_unit_is_not_an_error() {
        let mut record = record();
        let tokens = run(&["large", "eggs"], &mut record).unwrap();
        assert_eq!(record.unit, "");
        assert_eq!(tokens, vec!["large", "eggs"]);
    }

    #[test]
    fn test_plus_compound_adds_cup_equivalent() {
        let mut record = record();
        record.amount = 1.0;
        let tokens = run(&["cup", "+", "2", "tablespoons", "butter"], &mut record).unwrap();
        assert_eq!(record.unit, "cups");
        assert_eq!(record.amount, 1.0 + 2.0 * 16.0);
        assert_eq!(tokens, vec!["butter"]);
    }

    #[test]
    fn test_yeast_cake_override() {
        let mut record = record();
        let tokens = run(&["cake", "compressed", "yeast"], &mut record).unwrap();
        assert_eq!(record.unit, "cakes");
        assert_eq!(tokens, vec!["compressed", "yeast"]);
    }

    #[test]
    fn test_cake_without_yeast_is_no_unit() {
        let mut record = record();
        run(&["cake", "flour"], &mut record).unwrap();
        assert_eq!(record.unit, "");
    }

    #[test]
    fn test_or_alternative_units() {
        let mut record = record();
        let tokens = run(&["can", "or", "bottle", "root", "beer"], &mut record).unwrap();
        assert_eq!(record.unit, "cans or bottles");
        assert_eq!(tokens, vec!["root", "beer"]);
    }

    #[test]
    fn test_leading_of_dropped() {
        let mut record = record();
        let tokens = run(&["cup", "of", "milk"], &mut record).unwrap();
        assert_eq!(tokens, vec!["milk"]);
    }

    #[test]
    fn test_can_fold_adopts_inner_unit() {
        let mut record = record();
        record.amount = 1.0;
        record.descriptions.push("14.5 ounce".to_string());
        let tokens = run(&["can", "diced", "tomatoes"], &mut record).unwrap();
        assert_eq!(record.unit, "ounces");
        assert_eq!(record.amount, 14.5);
        assert_eq!(tokens, vec!["diced", "tomatoes"]);
    }

    #[test]
    fn test_can_fold_needs_known_unit() {
        let mut record = record();
        record.amount = 2.0;
        record.descriptions.push("2 each".to_string());
        run(&["can", "beans"], &mut record).unwrap();
        assert_eq!(record.unit, "cans");
        assert_eq!(record.amount, 2.0);
    }

    #[test]
    fn test_empty_after_unit_is_malformed() {
        let mut record = record();
        let result = run(&["cup"], &mut record);
        assert_eq!(result.unwrap_err(), MalformedLine);
        // the matched unit is retained for the recovered record
        assert_eq!(record.unit, "cups");
    }
}
