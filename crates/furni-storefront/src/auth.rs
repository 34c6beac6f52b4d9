//! Login form validation.
//!
//! Validation is purely client-side shape checking. No credential
//! verification happens here.

use thiserror::Error;

/// Delay before navigating away after a successful login, in milliseconds.
pub const REDIRECT_DELAY_MS: u64 = 900;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("email address is not well-formed")]
    InvalidEmail,
    #[error("password shorter than {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

impl LoginError {
    /// Localization key for the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            LoginError::InvalidEmail => "email_invalid",
            LoginError::PasswordTooShort => "password_invalid",
        }
    }
}

/// Accepts `local@domain.tld` shapes: no whitespace or extra `@`,
/// and at least one dot after the `@`.
pub fn validate_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    match (domain_parts.next(), domain_parts.next()) {
        (Some(tld), Some(host)) => !tld.is_empty() && !host.is_empty(),
        _ => false,
    }
}

/// Validate a login form submission. Email is checked first.
pub fn validate_login(email: &str, password: &str) -> Result<(), LoginError> {
    if !validate_email(email) {
        return Err(LoginError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(LoginError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("userexample.com"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email("us er@example.com"));
        assert!(!validate_email("a @b.c"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user@example."));
    }

    #[test]
    fn email_checked_before_password() {
        assert_eq!(validate_login("bad", "x"), Err(LoginError::InvalidEmail));
        assert_eq!(
            validate_login("user@example.com", "12345"),
            Err(LoginError::PasswordTooShort)
        );
        assert_eq!(validate_login("user@example.com", "123456"), Ok(()));
    }

    #[test]
    fn password_length_counts_chars_not_bytes() {
        assert_eq!(validate_login("user@example.com", "пароль"), Ok(()));
    }
}
