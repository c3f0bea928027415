const COUNT_ATTR: &str = "data-count=";

/// Yields the daily counts found in a contributions calendar document.
///
/// Every whitespace separated token carrying a `data-count="N"` attribute
/// contributes one value. A quoted value ends at its closing quote, a bare
/// one at the first non-digit. Values that are not non-negative integers are
/// skipped, so a malformed document just yields fewer counts.
pub fn parse_calendar(document: &str) -> impl Iterator<Item = u32> + '_ {
    document
        .split_whitespace()
        .filter_map(|token| token.find(COUNT_ATTR).map(|at| &token[at + COUNT_ATTR.len()..]))
        .filter_map(|value| attribute_value(value).parse().ok())
}

fn attribute_value(raw: &str) -> &str {
    match raw.chars().next() {
        Some(quote @ ('"' | '\'')) => raw[1..].split(quote).next().unwrap_or(""),
        _ => raw.split(|c: char| !c.is_ascii_digit()).next().unwrap_or(""),
    }
}
