//! Line normalization and tokenization: glyph stripping, parenthetical
//! extraction and the split into working tokens.

/// Normalize a raw line and split it into tokens. Parenthetical asides are
/// excised as they are found and pushed onto `descriptions` in order.
pub fn tokenize(raw: &str, descriptions: &mut Vec<String>) -> Vec<String> {
    let mut line = raw.replace('\u{00ae}', "");
    line = line.replace('\u{2122}', "");
    line = line.replace("(TM)", "");
    // single-token placeholder for the one multi-word unit, so the
    // whitespace split below cannot separate it; the name finalizer
    // restores the surface form
    line = line.replace("fluid ounce", "fluid_ounce");

    // innermost spans first; outer content of nested parentheses is not
    // reconstructed, a known limitation
    while let Some((start, end)) = innermost_parenthetical(&line) {
        descriptions.push(line[start + 1..end].to_string());
        line.replace_range(start..=end, "");
    }

    let line = line.replace(',', " and ");
    let line = line.replace('-', " ");
    line.split_whitespace().map(str::to_string).collect()
}

/// Byte span of the first complete `(...)` with no nested parenthesis:
/// the last `'('` before the first `')'`.
fn innermost_parenthetical(s: &str) -> Option<(usize, usize)> {
    let close = s.find(')')?;
    let open = s[..close].rfind('(')?;
    Some((open, close))
}
