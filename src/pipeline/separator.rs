//! Separator classification: section headers like "For Bread:" appear inside
//! ingredient lists but are not ingredients.

/// Whether a raw line is a section header rather than an ingredient.
///
/// A line is a separator when it starts with "For ", contains no space at
/// all, or carries a colon outside the literal "eg:".
pub fn is_separator(line: &str) -> bool {
    line.starts_with("For ") || !line.contains(' ') || (line.contains(':') && !line.contains("eg:"))
}
