use serde::{Deserialize, Deserializer, Serialize};

use crate::lexicon::Lexicon;

/// A recipe as supplied by the corpus: a title plus its ingredient lines.
///
/// Corpus data is sloppy - recipes with a missing or non-list `ingredients`
/// field deserialize to an empty line list instead of failing the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "ingredient_lines")]
    pub ingredients: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientsField {
    Lines(Vec<String>),
    // anything else: null, a bare string, a number...
    Other(serde::de::IgnoredAny),
}

fn ingredient_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match IngredientsField::deserialize(deserializer)? {
        IngredientsField::Lines(lines) => Ok(lines),
        IngredientsField::Other(_) => Ok(Vec::new()),
    }
}

/// One parsed ingredient line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedIngredient {
    /// Title of the recipe the line came from
    pub title: String,
    /// Position of the line within the recipe's ingredient list
    pub line_index: usize,
    /// Parsed quantity; 0 when the line carries no numeric prefix
    pub amount: f64,
    /// Matched measurement unit in its table (plural) form, or a compound
    /// like "cups or packages"; empty when no unit matched
    pub unit: String,
    /// Cleaned ingredient name; never empty (falls back to the raw line)
    pub name: String,
    /// Qualifiers stripped from the line, in the order they were found
    pub descriptions: Vec<String>,
    /// Set when the line could not be fully parsed and fields were recovered
    #[serde(default)]
    pub anomalous: bool,
}

impl ParsedIngredient {
    pub(crate) fn new(title: &str, line_index: usize) -> Self {
        ParsedIngredient {
            title: title.to_string(),
            line_index,
            amount: 0.0,
            unit: String::new(),
            name: String::new(),
            descriptions: Vec::new(),
            anomalous: false,
        }
    }

    /// Whether any qualifier marks the ingredient as optional
    /// ("optional", "to taste", "as needed", "if desired").
    pub fn is_optional(&self, lexicon: &Lexicon) -> bool {
        self.descriptions
            .iter()
            .any(|d| lexicon.is_optional_marker(d))
    }
}
