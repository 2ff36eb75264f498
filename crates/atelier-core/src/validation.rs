//! Shared field-validation primitives used by request DTOs.

use std::sync::LazyLock;

use regex::Regex;

/// Phone numbers are exactly ten digits, no separators.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));

/// Validate a password against the account-strength policy.
///
/// Requires at least six characters with at least one uppercase letter, one
/// digit, and one character that is neither. Returns a human-readable reason
/// on failure.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a digit".to_string());
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err("Password must contain a special character".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_regex_accepts_exactly_ten_digits() {
        assert!(PHONE_RE.is_match("9876543210"));
        assert!(!PHONE_RE.is_match("987654321"));
        assert!(!PHONE_RE.is_match("98765432100"));
        assert!(!PHONE_RE.is_match("98765-4321"));
        assert!(!PHONE_RE.is_match("phone12345"));
    }

    #[test]
    fn password_policy_accepts_strong_password() {
        assert!(validate_password_strength("Secret#1").is_ok());
    }

    #[test]
    fn password_policy_rejects_weak_passwords() {
        assert!(validate_password_strength("Sh#1").is_err()); // too short
        assert!(validate_password_strength("secret#1").is_err()); // no uppercase
        assert!(validate_password_strength("Secret#x").is_err()); // no digit
        assert!(validate_password_strength("Secret11").is_err()); // no special
    }
}
