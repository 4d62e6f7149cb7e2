//! The per-line parsing pipeline and the per-recipe fan-out.
//!
//! Stages run in a fixed order, each consuming tokens the previous stage
//! left behind: separator check, tokenization, prepositional-phrase
//! extraction, amount, unit, descriptions, name. Ordering is load-bearing;
//! every stage's output shape is the next stage's input contract.

pub mod amount;
pub mod descriptions;
pub mod name;
pub mod prepositions;
pub mod separator;
pub mod tokenize;
pub mod unit;

use log::{debug, warn};
use rayon::prelude::*;

use crate::canonical;
use crate::config::ParserConfig;
use crate::lexicon::Lexicon;
use crate::model::{ParsedIngredient, Recipe};

/// A stage expected at least one token and found none. Recoverable: the
/// per-line driver keeps whatever fields were already populated and falls
/// back to the raw line for the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedLine;

/// Run one ingredient line through the pipeline.
///
/// Returns `None` for separator lines (section headers). Never fails: a
/// line the stages cannot fully consume comes back flagged `anomalous`
/// with the raw text as its name.
pub fn parse_line(
    lexicon: &Lexicon,
    config: &ParserConfig,
    title: &str,
    line_index: usize,
    raw: &str,
) -> Option<ParsedIngredient> {
    if separator::is_separator(raw) {
        debug!("skipping separator line {raw:?}");
        return None;
    }

    let mut record = ParsedIngredient::new(title, line_index);
    let mut tokens = tokenize::tokenize(raw, &mut record.descriptions);
    prepositions::extract(lexicon, &mut tokens, &mut record.descriptions);
    record.amount = amount::parse(&mut tokens);

    let staged = unit::parse(lexicon, &mut tokens, &mut record).and_then(|()| {
        descriptions::extract(lexicon, config.hyphenate, &mut tokens, &mut record)
    });

    match staged {
        Ok(()) => name::finalize(lexicon, &tokens, raw, &mut record),
        Err(MalformedLine) => {
            warn!("malformed ingredient line {raw:?} in {title:?}; keeping fields parsed so far");
            record.anomalous = true;
            record.name = raw.to_string();
        }
    }

    Some(record)
}

/// Parse every ingredient line of a recipe, preserving line order and
/// skipping separators. Fans out over worker threads when the config asks
/// for it; the output is identical either way.
pub fn parse_recipe(
    lexicon: &Lexicon,
    config: &ParserConfig,
    recipe: &Recipe,
) -> Vec<ParsedIngredient> {
    let mut records: Vec<ParsedIngredient> = if config.parallel {
        recipe
            .ingredients
            .par_iter()
            .enumerate()
            .filter_map(|(index, line)| parse_line(lexicon, config, &recipe.title, index, line))
            .collect()
    } else {
        recipe
            .ingredients
            .iter()
            .enumerate()
            .filter_map(|(index, line)| parse_line(lexicon, config, &recipe.title, index, line))
            .collect()
    };

    if config.canonicalize {
        canonical::canonicalize_all(lexicon, &mut records);
    }

    records
}
