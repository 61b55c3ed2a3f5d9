//! Text length rules shared by the content entities.
//!
//! Lengths are counted in chars. Minimums apply to the trimmed text, maximums
//! to the text as given.

use crate::error::{DomainError, DomainResult};

/// Suffix appended by [`truncate`] when text is cut.
pub const ELLIPSIS: &str = "...";

/// Check `value` against `[min, max]` chars, naming `field` in the error.
///
/// `max = None` means no upper bound.
pub fn ensure_length(
    field: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> DomainResult<()> {
    if value.trim().chars().count() < min {
        return Err(DomainError::validation(format!(
            "{field} must have at least {min} characters"
        )));
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(DomainError::validation(format!(
                "{field} cannot exceed {max} characters"
            )));
        }
    }
    Ok(())
}

/// Check that `value` is not blank.
pub fn ensure_present(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// First `max` chars of `value`, followed by [`ELLIPSIS`] when anything was cut.
pub fn truncate(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &value[..byte_idx]),
        None => value.to_string(),
    }
}
