//! Leading-amount accumulation. Numeric prefixes are consumed token by
//! token into a running total, so a mixed number like "1 1/2" arrives as
//! two tokens and sums to 1.5.

/// Consume leading numeric tokens and return their sum.
///
/// Stops when fewer than two tokens remain (the last token is a name
/// candidate, never an amount), when the second token is "inch" (the
/// number is a dimension), or at the first token the evaluator rejects.
pub fn parse(tokens: &mut Vec<String>) -> f64 {
    let mut amount = 0.0;
    loop {
        if tokens.len() < 2 || tokens[1] == "inch" {
            break;
        }
        match evaluate(&tokens[0]) {
            Some(value) => {
                amount += value;
                tokens.remove(0);
            }
            None => break,
        }
    }
    amount
}

/// Restricted numeric evaluator: integers, decimals, and simple `a/b`
/// fractions. The grammar is digits, one optional decimal point per
/// operand, and a single `/`; everything else is rejected. Never a general
/// expression evaluator.
pub fn evaluate(token: &str) -> Option<f64> {
    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator = parse_number(numerator)?;
        let denominator = parse_number(denominator)?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }
    parse_number(token)
}

/// Parse a plain decimal number (digits and at most one point, no signs,
/// no exponents).
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse().ok()
}
