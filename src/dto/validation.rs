//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest display name accepted at setup, in characters.
pub const MAX_NAME_LENGTH: usize = 40;

/// Validates a participant display name supplied at setup.
///
/// Blank names are accepted: setup substitutes a positional placeholder for them.
///
/// ```ignore
/// validate_display_name("Ronnie")    // Ok
/// validate_display_name("   ")       // Ok - replaced by "Player N"
/// validate_display_name("a\u{0}b")   // Err - control character
/// ```
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();
    if length > MAX_NAME_LENGTH {
        let mut err = ValidationError::new("name_length");
        err.message = Some(
            format!("Name must be at most {MAX_NAME_LENGTH} characters (got {length})").into(),
        );
        return Err(err);
    }

    if name.chars().any(char::is_control) {
        let mut err = ValidationError::new("name_format");
        err.message = Some("Name must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_display_name_valid() {
        assert!(validate_display_name("Ronnie").is_ok());
        assert!(validate_display_name("").is_ok());
        assert!(validate_display_name("   ").is_ok());
        assert!(validate_display_name(&"é".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_validate_display_name_too_long() {
        assert!(validate_display_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
        // surrounding whitespace is trimmed before counting
        assert!(validate_display_name(&format!("  {}  ", "x".repeat(MAX_NAME_LENGTH))).is_ok());
    }

    #[test]
    fn test_validate_display_name_control_chars() {
        assert!(validate_display_name("Ron\nnie").is_err());
        assert!(validate_display_name("Ron\u{7}").is_err());
    }
}
