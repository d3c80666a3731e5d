//! Raw price text to numeric conversion.
//!
//! Tolerates currency symbols and a lone decimal comma. Combined
//! thousands-separator and decimal-comma forms ("1.234,56") are ambiguous
//! between locales and are deliberately not interpreted; see DESIGN.md.

/// Converts raw price text into a numeric value.
///
/// Never panics and never errors: every failure mode collapses to `None`.
///
/// 1. Missing, empty, or whitespace-only input → `None`.
/// 2. Everything except ASCII digits, `.`, `,`, `-` is stripped.
/// 3. Exactly one `,` and no `.` → the comma is a decimal separator.
/// 4. The remainder parses as `f64`, or a warning is logged and `None`
///    returned. Non-finite results are rejected.
///
/// Idempotent on already-clean numeric strings: `"19.99"` → `19.99`.
#[must_use]
pub fn normalize_price(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let commas = cleaned.matches(',').count();
    let dots = cleaned.matches('.').count();
    if commas == 1 && dots == 0 {
        cleaned = cleaned.replace(',', ".");
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::warn!(raw_price = raw, "could not convert raw price to a number");
            None
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
