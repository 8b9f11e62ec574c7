//! Moment-style date patterns, translated to `chrono` strftime specifiers.

use chrono::NaiveDate;

use crate::error::FormatError;

/// Recognised tokens, longest first within each letter.
const TOKENS: [(&str, &str); 10] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
];

/// Translate a moment-style pattern into a strftime string.
///
/// Text inside `[...]` is copied verbatim; any character that does not
/// start a token is a literal.
///
/// # Errors
///
/// Returns [`FormatError::UnterminatedLiteral`] when a `[` has no closing `]`.
pub fn to_strftime(pattern: &str) -> Result<String, FormatError> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            let end = rest
                .find(']')
                .ok_or_else(|| FormatError::UnterminatedLiteral(pattern.to_string()))?;
            push_literal(&mut out, &rest[1..end]);
            rest = &rest[end + 1..];
        } else if let Some((token, spec)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token))
        {
            out.push_str(spec);
            rest = &rest[token.len()..];
        } else {
            push_literal(&mut out, &rest[..ch.len_utf8()]);
            rest = &rest[ch.len_utf8()..];
        }
    }

    Ok(out)
}

fn push_literal(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}

/// Render `date` with a moment-style `pattern`.
///
/// # Errors
///
/// Same as [`to_strftime`].
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String, FormatError> {
    let spec = to_strftime(pattern)?;
    Ok(date.format(&spec).to_string())
}
