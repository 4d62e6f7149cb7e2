//! Deterministic parsing of free-text recipe ingredient lines.
//!
//! One line like `"2 cups all-purpose flour, sifted"` becomes a structured
//! record: numeric amount, canonical unit, cleaned name and the qualifiers
//! stripped along the way. Parsing is a pure function per line over a
//! shared read-only [`Lexicon`], so recipes parallelize trivially.

pub mod canonical;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod pipeline;

pub use crate::config::ParserConfig;
pub use crate::error::ParseError;
pub use crate::lexicon::Lexicon;
pub use crate::model::{ParsedIngredient, Recipe};

/// Parse a single ingredient line.
///
/// Returns `None` when the line is a section header rather than an
/// ingredient. Lines that cannot be fully parsed still produce a record,
/// flagged `anomalous`, with the raw text as the name.
///
/// # Example
/// ```
/// use ingredient_parse::{parse_line, Lexicon, ParserConfig};
///
/// let lexicon = Lexicon::new();
/// let config = ParserConfig::default();
/// let parsed = parse_line(&lexicon, &config, "Pancakes", 0, "2 cups flour").unwrap();
/// assert_eq!(parsed.name, "flour");
/// ```
pub fn parse_line(
    lexicon: &Lexicon,
    config: &ParserConfig,
    title: &str,
    line_index: usize,
    raw: &str,
) -> Option<ParsedIngredient> {
    let mut record = pipeline::parse_line(lexicon, config, title, line_index, raw)?;
    if config.canonicalize {
        canonical::canonicalize(lexicon, &mut record);
    }
    Some(record)
}

/// Parse all ingredient lines of a recipe, in source order, separators
/// skipped.
///
/// # Example
/// ```
/// use ingredient_parse::{parse_recipe, Lexicon, ParserConfig, Recipe};
///
/// let lexicon = Lexicon::new();
/// let config = ParserConfig::default();
/// let recipe = Recipe {
///     title: "Pancakes".to_string(),
///     ingredients: vec!["2 cups flour".to_string(), "3 eggs".to_string()],
/// };
/// let parsed = parse_recipe(&lexicon, &config, &recipe);
/// assert_eq!(parsed.len(), 2);
/// ```
pub fn parse_recipe(
    lexicon: &Lexicon,
    config: &ParserConfig,
    recipe: &Recipe,
) -> Vec<ParsedIngredient> {
    pipeline::parse_recipe(lexicon, config, recipe)
}

/// Parse a whole corpus of recipes into one flat record table, recipes in
/// the order given, lines in source order within each recipe.
pub fn parse_corpus(
    lexicon: &Lexicon,
    config: &ParserConfig,
    recipes: &[Recipe],
) -> Vec<ParsedIngredient> {
    recipes
        .iter()
        .flat_map(|recipe| parse_recipe(lexicon, config, recipe))
        .collect()
}
