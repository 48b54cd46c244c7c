//! Input validation helpers.

/// Maximum email length per RFC 5321.
const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of name fields.
const MAX_NAME_LENGTH: usize = 100;

/// Validate an email address format.
///
/// A practical check consistent with RFC 5322 basics: exactly one `@`,
/// non-empty local part and dotted domain, no whitespace, bounded length.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        ));
    }

    if email.contains(char::is_whitespace) {
        return Err("Email contains whitespace".to_string());
    }

    if email.matches('@').count() != 1 {
        return Err("Email must contain exactly one '@'".to_string());
    }

    let parts: Vec<&str> = email.splitn(2, '@').collect();
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Email must contain a local part and a domain".to_string());
    }

    let domain = parts[1];
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Email domain is invalid".to_string());
    }

    Ok(())
}

/// Validate a required name field (first or last name).
pub fn validate_name(field: &str, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn test_rejects_malformed_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("spaces in@example.com").is_err());
        assert!(validate_email("ada@nodot").is_err());
        assert!(validate_email("ada@.example.com").is_err());
    }

    #[test]
    fn test_rejects_overlong_email() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(validate_email(&email).is_err());
    }

    #[test]
    fn test_name_must_be_non_blank() {
        assert!(validate_name("First name", "Ada").is_ok());
        assert!(validate_name("First name", "   ").is_err());
        assert!(validate_name("Last name", &"x".repeat(101)).is_err());
    }
}
