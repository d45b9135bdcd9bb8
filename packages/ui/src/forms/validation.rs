//! Field validators shared by the account forms.

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 20;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("username pattern compiles"));

/// `something@domain.tld`, no whitespace, exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    TooShort,
    TooLong,
    InvalidCharacters,
}

impl UsernameError {
    pub fn message(self) -> &'static str {
        match self {
            UsernameError::TooShort => "El nombre de usuario debe tener al menos 3 caracteres",
            UsernameError::TooLong => "El nombre de usuario no puede exceder 20 caracteres",
            UsernameError::InvalidCharacters => {
                "El nombre de usuario solo puede contener letras, números, guiones y guiones bajos"
            }
        }
    }
}

/// 3 to 20 characters of ASCII letters, digits, `-` and `_`.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LEN {
        return Err(UsernameError::TooShort);
    }
    if len > MAX_USERNAME_LEN {
        return Err(UsernameError::TooLong);
    }
    if !USERNAME_RE.is_match(username) {
        return Err(UsernameError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("legion.x+tag@mail.vincere.gg"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_password() {
        assert!(is_valid_password("vincere1"));
        assert!(is_valid_password("sixsix"));
        assert!(!is_valid_password("five5"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_username() {
        assert_eq!(validate_username("Legion_99"), Ok(()));
        assert_eq!(validate_username("a-b"), Ok(()));
        assert_eq!(validate_username("ab"), Err(UsernameError::TooShort));
        assert_eq!(
            validate_username("twenty-two-characters!!"),
            Err(UsernameError::TooLong)
        );
        assert_eq!(
            validate_username("Legion 99"),
            Err(UsernameError::InvalidCharacters)
        );
        assert_eq!(
            validate_username("César"),
            Err(UsernameError::InvalidCharacters)
        );
    }
}
