//! Name finalization: reassemble the remaining tokens and run the ordered
//! rewrite chains (footnote marker, hyphen styling, punctuation, spelling,
//! style).

use log::warn;

use crate::lexicon::Lexicon;
use crate::model::ParsedIngredient;

/// Join the remaining tokens into the ingredient name and normalize it.
/// An empty result falls back to the raw line and flags the record.
pub fn finalize(lexicon: &Lexicon, tokens: &[String], raw: &str, record: &mut ParsedIngredient) {
    let mut name = tokens.join(" ");

    if name.contains('*') {
        record.descriptions.push("* see footnote".to_string());
        name = name.replace('*', "");
    }

    // hyphen styling
    name = name.replace("- ", "-");
    name = name.replace(" -", "-");
    name = name.replace("Jell O", "Jell-O");
    name = name.replace("half half", "half-and-half");

    name = name.replace('.', "");
    name = name.replace(';', "");

    // ordered, literal replace-all chains; see the lexicon for why the
    // order is load-bearing
    for (pattern, replacement) in lexicon.spelling_rules() {
        name = name.replace(pattern, replacement);
    }
    for (pattern, replacement) in lexicon.style_rules() {
        name = name.replace(pattern, replacement);
    }

    // tokenizer placeholder back to its surface form
    name = name.replace("fluid_ounce", "fluid ounce");

    if name.is_empty() {
        warn!("ingredient line {raw:?} reduced to nothing; keeping the raw text");
        record.anomalous = true;
        name = raw.to_string();
    }
    record.name = name;
}
