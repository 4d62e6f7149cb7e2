//! Qualifier extraction: adjectives (optionally merged with a neighboring
//! adverb), predecessor-attached descriptors, filler removal, hyphenation
//! and the powder special case.

use log::debug;

use crate::lexicon::Lexicon;
use crate::model::ParsedIngredient;
use crate::pipeline::MalformedLine;

/// Move qualifier tokens from the sequence into the record's descriptions.
pub fn extract(
    lexicon: &Lexicon,
    hyphenate: bool,
    tokens: &mut Vec<String>,
    record: &mut ParsedIngredient,
) -> Result<(), MalformedLine> {
    tokens.retain(|t| !lexicon.is_unnecessary_description(t));

    // walk by index without auto-advancing on consumption: the scan
    // resumes at the first token it has not examined yet, so a qualifier
    // exposed by a merge is still picked up
    let mut index = 0;
    while index < tokens.len() {
        let word = tokens[index].clone();

        if lexicon.is_adjective(&word) {
            // preceding adverb wins; a following adverb is only considered
            // for an adjective opening the sequence
            let description = if index > 0 && lexicon.is_preceding_adverb(&tokens[index - 1]) {
                let merged = format!("{} {}", tokens[index - 1], word);
                tokens.remove(index);
                tokens.remove(index - 1);
                index -= 1;
                merged
            } else if index == 0
                && tokens.len() > 1
                && lexicon.is_succeeding_adverb(&tokens[1])
            {
                let merged = format!("{} {}", word, tokens[1]);
                tokens.remove(1);
                tokens.remove(0);
                merged
            } else {
                tokens.remove(index);
                word
            };
            record.descriptions.push(description);
        } else if lexicon.is_predecessor_description(&word) && index > 0 {
            let description = format!("{} {}", tokens[index - 1], word);
            tokens.remove(index);
            tokens.remove(index - 1);
            index -= 1;
            record.descriptions.push(description);
        } else {
            index += 1;
        }
    }

    tokens.retain(|t| t != "and" && t != "style");

    match tokens.last() {
        Some(last) if last == "or" => {
            tokens.pop();
        }
        Some(_) => {}
        None => return Err(MalformedLine),
    }

    for token in tokens.iter_mut() {
        if let Some(rewritten) = hyphenated_form(lexicon, token) {
            if hyphenate {
                *token = rewritten;
            } else {
                // historical behavior: the rewrite is computed and dropped
                debug!("hyphenated form {rewritten:?} not applied to {token:?}");
            }
        }
    }

    // "coffee powder" is coffee, unbrewed
    if tokens.iter().any(|t| t == "powder")
        && tokens
            .iter()
            .any(|t| t == "coffee" || t == "espresso" || t == "tea")
    {
        remove_first(tokens, "powder");
        record.descriptions.push("unbrewed".to_string());
    }

    Ok(())
}

/// Hyphenated spelling of a token carrying a known prefix or suffix
/// ("nonfat" -> "non-fat"), or None when nothing applies.
fn hyphenated_form(lexicon: &Lexicon, token: &str) -> Option<String> {
    let mut word = token.to_string();

    for suffix in lexicon.hyphenated_suffixes() {
        if word.contains(suffix) {
            word = word.replace(suffix, &format!("-{suffix}"));
        }
    }
    for prefix in lexicon.hyphenated_prefixes() {
        if word.starts_with(prefix) {
            word = word.replace(prefix, &format!("{prefix}-"));
        }
    }

    (word != token).then_some(word)
}

fn remove_first(tokens: &mut Vec<String>, value: &str) {
    if let Some(position) = tokens.iter().position(|t| t == value) {
        tokens.remove(position);
    }
}
