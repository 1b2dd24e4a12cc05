//! Account form validation tests
//!
//! Property-based and unit tests for the login and registration checks.

use proptest::prelude::*;
use shared::{
    field_messages, validate_email, validate_name, validate_password, LoginForm,
    RegistrationForm, Validate,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate valid email addresses
fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9._]{1,12}@[a-z]{1,10}\\.(com|org|net|in|co\\.in)"
}

/// Generate valid passwords (6+ chars)
fn password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#$%]{6,20}"
}

/// Generate names with at least two non-blank characters
fn name_strategy() -> impl Strategy<Value = String> {
    " {0,3}[A-Za-z]{2,20} {0,3}"
}

proptest! {
    /// Property: generated emails always pass
    #[test]
    fn test_email_format(email in email_strategy()) {
        prop_assert!(validate_email(&email).is_ok());
    }

    /// Property: any whitespace inside an email rejects it
    #[test]
    fn test_email_with_space_rejected(
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
    ) {
        let email = format!("{} x@{}.com", local, domain);
        prop_assert!(validate_email(&email).is_err());
    }

    /// Property: password length requirement
    #[test]
    fn test_password_strength(password in password_strategy()) {
        prop_assert!(validate_password(&password).is_ok());
    }

    /// Property: names are judged after trimming
    #[test]
    fn test_name_trimmed(name in name_strategy()) {
        prop_assert!(validate_name(&name).is_ok());
    }

    /// Property: a confirmation that differs from the password always fails,
    /// whatever the other fields hold
    #[test]
    fn test_mismatch_always_fails(
        name in name_strategy(),
        email in email_strategy(),
        password in password_strategy(),
        suffix in "[a-z0-9]{1,4}",
    ) {
        let form = RegistrationForm {
            name: Some(name),
            email: Some(email),
            password: Some(password.clone()),
            confirm_password: Some(format!("{}{}", password, suffix)),
        };
        let errors = form.validate().unwrap_err();
        let messages = field_messages(&errors);
        prop_assert_eq!(
            messages.get("confirm_password").map(String::as_str),
            Some("Passwords do not match")
        );
    }

    /// Property: well-formed registrations pass
    #[test]
    fn test_valid_registration(
        name in name_strategy(),
        email in email_strategy(),
        password in password_strategy(),
    ) {
        let form = RegistrationForm {
            name: Some(name),
            email: Some(email),
            password: Some(password.clone()),
            confirm_password: Some(password),
        };
        prop_assert!(form.validate().is_ok());
    }
}

// ============================================================================
// Unit Tests: Boundaries
// ============================================================================

#[cfg(test)]
mod boundary_tests {
    use super::*;

    #[test]
    fn test_name_length_boundary() {
        assert!(validate_name("A").is_err());
        assert!(validate_name("Al").is_ok());
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(validate_password("abc12").is_err());
        assert!(validate_password("abc123").is_ok());
    }

    #[test]
    fn test_login_form_blocks_on_any_failure() {
        let form = LoginForm {
            email: Some("farmer@example.com".into()),
            password: Some("abc12".into()),
        };
        let messages = field_messages(&form.validate().unwrap_err());
        assert_eq!(messages.len(), 1);
        assert!(messages.contains_key("password"));
    }
}
