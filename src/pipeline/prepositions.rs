//! Trailing prepositional clauses ("for garnish", "with skin on") qualify
//! the ingredient instead of naming it; the first one found takes the rest
//! of the line with it.

use crate::lexicon::Lexicon;

/// Demote the first trailing prepositional clause to a description.
///
/// Two constructions keep their preposition in place and let the scan
/// continue: "<p> use ..." ("for use in soup") and the cut "bone in".
pub fn extract(lexicon: &Lexicon, tokens: &mut Vec<String>, descriptions: &mut Vec<String>) {
    for index in 0..tokens.len() {
        if !lexicon.is_preposition(&tokens[index]) {
            continue;
        }
        let next_is_use = tokens.get(index + 1).is_some_and(|t| t == "use");
        let bone_in = tokens[index] == "in" && index > 0 && tokens[index - 1] == "bone";
        if next_is_use || bone_in {
            continue;
        }

        descriptions.push(tokens[index..].join(" "));
        tokens.truncate(index);
        return;
    }
}
