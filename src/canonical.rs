//! Metric canonicalization: a post-pass over parsed records converting
//! recognized US units to grams or milliliters with fixed factors.

use crate::lexicon::Lexicon;
use crate::model::ParsedIngredient;

/// Convert a record's unit to its canonical metric form, scaling the
/// amount. Units outside the conversion table - including compound
/// "x or y" units - pass through unchanged.
pub fn canonicalize(lexicon: &Lexicon, record: &mut ParsedIngredient) {
    if let Some((factor, unit)) = lexicon.metric_conversion(&record.unit) {
        record.amount *= factor;
        record.unit = unit.to_string();
    }
}

/// Canonicalize a batch of records in place.
pub fn canonicalize_all(lexicon: &Lexicon, records: &mut [ParsedIngredient]) {
    for record in records {
        canonicalize(lexicon, record);
    }
}
