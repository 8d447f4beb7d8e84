//! Permissive extraction of a single rate from a rates API response body.
//!
//! This is not a JSON parser. It walks the text in four steps:
//!
//! 1. find the `"rates"` marker;
//! 2. find the first fully quoted `"<CODE>"` after that marker;
//! 3. skip to the next `:` and over any whitespace;
//! 4. consume a signed decimal literal (digits, `+`/`-`, at most one `.`) and parse it.
//!
//! Surrounding structure and whitespace are ignored, so any body that carries a `rates`
//! object is accepted. The first match after the marker wins, even when the code also
//! appears as a key of some unrelated nested object.

use fx_common::Currency;

const RATES_MARKER: &str = "\"rates\"";

/// Numeric value of `rates.<currency>` in `body`, if one can be found and parsed.
pub fn extract_rate(body: &str, currency: Currency) -> Option<f64> {
    let rates_at = body.find(RATES_MARKER)?;
    let key = format!("\"{}\"", currency.code());
    let key_at = rates_at + body[rates_at..].find(&key)?;
    let colon_at = key_at + body[key_at..].find(':')?;
    let literal = signed_decimal_prefix(body[colon_at + 1..].trim_start());
    if literal.is_empty() {
        return None;
    }
    literal.parse::<f64>().ok()
}

/// Longest prefix made of digits, signs and a single decimal point.
fn signed_decimal_prefix(text: &str) -> &str {
    let mut dot_seen = false;
    let end = text
        .char_indices()
        .find(|&(_, c)| match c {
            '0'..='9' | '+' | '-' => false,
            '.' if !dot_seen => {
                dot_seen = true;
                false
            }
            _ => true,
        })
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}
