use crate::utils::error::{Result, SumError};

/// Convert one argument to `f64`.
///
/// Surrounding whitespace is ignored and single underscores may group digits
/// (`1_000.5`). `inf`, `infinity` and `nan` are accepted in any case.
pub fn parse_operand(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !underscores_are_grouping(trimmed) {
        return Err(SumError::invalid_number(raw));
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != '_').collect();

    cleaned
        .parse::<f64>()
        .map_err(|_| SumError::invalid_number(raw))
}

// Every underscore must sit between two ASCII digits.
fn underscores_are_grouping(text: &str) -> bool {
    let bytes = text.as_bytes();

    bytes.iter().enumerate().all(|(i, b)| {
        if *b != b'_' {
            return true;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        matches!((before, after), (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit())
    })
}
