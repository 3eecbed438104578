//! Input validation helpers
//!
//! Text length constants and the checks shared by the CRUD handlers.

use validator::ValidateEmail;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: restaurant, category, menu item, user
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// Short identifiers: phone, color codes, labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a string (possibly empty) is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate email syntax and length.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.len() > MAX_EMAIL_LEN || !email.validate_email() {
        return Err(AppError::validation("Invalid email address").with_detail("field", "email"));
    }
    Ok(())
}

/// Validate a record identifier taken from a path or body.
///
/// `resource` names the entity in the error, e.g. `"restaurant"` gives
/// "Invalid restaurant ID".
pub fn validate_id(id: &str, resource: &str) -> Result<(), AppError> {
    if shared::util::is_record_key(id) {
        Ok(())
    } else {
        Err(AppError::invalid_id(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn required_text() {
        assert!(validate_required_text("Pizza", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text() {
        assert!(validate_optional_text(&None, "phone", MAX_SHORT_TEXT_LEN).is_ok());
        assert!(validate_optional_text(&Some("912".into()), "phone", MAX_SHORT_TEXT_LEN).is_ok());
        let long = Some("9".repeat(MAX_SHORT_TEXT_LEN + 1));
        assert!(validate_optional_text(&long, "phone", MAX_SHORT_TEXT_LEN).is_err());
    }

    #[test]
    fn email_syntax() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn malformed_id_is_invalid_id() {
        let err = validate_id("123", "restaurant").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidId);
        assert_eq!(err.message, "Invalid restaurant ID");
        assert!(validate_id(&shared::util::new_record_key(), "restaurant").is_ok());
    }
}
