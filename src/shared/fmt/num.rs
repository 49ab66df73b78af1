//! Number formatting utilities for human-readable display.
//!
//! Handles plain number strings and percentage values. For `Decimal`
//! formatting, use the `decimal` sibling module.

/// Trims trailing zeros, adds thousands separators.
pub fn group_digits(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let parts = trimmed.split(".").collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    // A sign chunked alone leaves a dangling "-," after the reversal.
    let integer_part = if let Some(rest) = integer_part.strip_prefix("-,") {
        format!("-{rest}")
    } else if let Some(rest) = integer_part.strip_prefix(',') {
        rest.to_string()
    } else {
        integer_part
    };

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Format a percentage with two fixed decimal places (e.g. `"4.27%"`).
///
/// Keeps the sign, so a falling change renders as `"-2.15%"`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}
