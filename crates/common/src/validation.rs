//! Field checks shared by request validators

use validator::ValidationError;

/// Reject values that are empty once surrounding whitespace is removed.
///
/// Stored text is trimmed, so `"   "` would otherwise pass a `length(min = 1)`
/// check and be saved as an empty string.
pub fn validate_not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
