//! # Validation Module
//!
//! Form rules for the login and signup screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Per-Keystroke Validation                           │
//! │                                                                         │
//! │  onChangeText(text)                                                    │
//! │       │                                                                 │
//! │       ├── validate_email / validate_password   (bool, pure)            │
//! │       │                                                                 │
//! │       ├── FieldValidation { valid, message }   (inline error text)     │
//! │       │                                                                 │
//! │       └── LoginForm / SignupForm::is_valid()   (submit enabled?)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inputs are never trimmed or case-folded, except that the signup name is
//! checked for non-blankness after trimming.
//!
//! ## Usage
//! ```rust
//! use coursehub_core::validation::{validate_email, validate_password};
//!
//! assert!(validate_email("a@b.co"));
//! assert!(validate_password("abc12345"));
//! assert!(!validate_password("abcdefgh"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// U+FEFF is excluded alongside `\s`: browsers and mobile keyboards treat it
// as whitespace but the Unicode White_Space class does not.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("email pattern compiles")
});

// Length and charset only; the letter/digit requirements are checked separately.
static PASSWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{8,12}$").expect("password pattern compiles"));

// =============================================================================
// Predicates
// =============================================================================

/// Returns true iff `input` looks like `local-part@domain.tld`.
///
/// ## Rules
/// - local part and domain contain no whitespace (U+FEFF included) and no `@`
/// - at least one character after a dot in the domain
pub fn validate_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

/// Returns true iff `input` is an acceptable password.
///
/// ## Rules
/// - 8 to 12 characters inclusive
/// - ASCII letters and digits only
/// - at least one letter and at least one digit
///
/// ## Example
/// ```rust
/// use coursehub_core::validation::validate_password;
///
/// assert!(validate_password("abcdefg1234"));
/// assert!(!validate_password("abc123"));
/// assert!(!validate_password("abc1234!"));
/// ```
pub fn validate_password(input: &str) -> bool {
    PASSWORD_PATTERN.is_match(input)
        && input.chars().any(|c| c.is_ascii_alphabetic())
        && input.chars().any(|c| c.is_ascii_digit())
}

/// Returns true iff `input` has something other than whitespace.
pub fn validate_name(input: &str) -> bool {
    !input.trim().is_empty()
}

// =============================================================================
// Checks (carry a message)
// =============================================================================

pub fn check_email(input: &str) -> Result<(), ValidationError> {
    if validate_email(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn check_password(input: &str) -> Result<(), ValidationError> {
    if validate_password(input) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPassword)
    }
}

pub fn check_name(input: &str) -> Result<(), ValidationError> {
    if validate_name(input) {
        Ok(())
    } else {
        Err(ValidationError::NameRequired)
    }
}

// =============================================================================
// Field Validation
// =============================================================================

/// Outcome of validating one form field.
///
/// `message` is empty when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: String,
}

impl FieldValidation {
    pub fn ok() -> Self {
        FieldValidation {
            valid: true,
            message: String::new(),
        }
    }

    pub fn from_check(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => FieldValidation::ok(),
            Err(err) => FieldValidation {
                valid: false,
                message: err.to_string(),
            },
        }
    }
}

/// Conjunction of field-level validity. An empty slice is valid.
pub fn is_form_valid(fields: &[FieldValidation]) -> bool {
    fields.iter().all(|f| f.valid)
}

// =============================================================================
// Forms
// =============================================================================

/// Login screen fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn email_validation(&self) -> FieldValidation {
        FieldValidation::from_check(check_email(&self.email))
    }

    pub fn password_validation(&self) -> FieldValidation {
        FieldValidation::from_check(check_password(&self.password))
    }

    /// Whether the submit control is enabled.
    pub fn is_valid(&self) -> bool {
        is_form_valid(&[self.email_validation(), self.password_validation()])
    }
}

/// Signup screen fields. Adds a required name to the login rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn name_validation(&self) -> FieldValidation {
        FieldValidation::from_check(check_name(&self.name))
    }

    pub fn email_validation(&self) -> FieldValidation {
        FieldValidation::from_check(check_email(&self.email))
    }

    pub fn password_validation(&self) -> FieldValidation {
        FieldValidation::from_check(check_password(&self.password))
    }

    /// Whether the submit control is enabled.
    pub fn is_valid(&self) -> bool {
        is_form_valid(&[
            self.name_validation(),
            self.email_validation(),
            self.password_validation(),
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@mail.example.org"));
        assert!(validate_email("UPPER@CASE.COM"));

        assert!(!validate_email(""));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email("a@bco"));
        assert!(!validate_email("a.b@co"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@.co"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email("a b@c.de"));
        assert!(!validate_email("a@b@c.de"));
    }

    #[test]
    fn test_validate_email_does_not_trim() {
        assert!(!validate_email(" a@b.co"));
        assert!(!validate_email("a@b.co "));
    }

    #[test]
    fn test_validate_email_rejects_byte_order_mark() {
        assert!(!validate_email("a\u{FEFF}@b.co"));
        assert!(!validate_email("a@b\u{FEFF}.co"));
        assert!(!validate_email("\u{FEFF}a@b.co"));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("abc12345"));
        assert!(validate_password("abcdefg1234"));
        assert!(validate_password("A1bcdefghijk"));

        assert!(!validate_password("abcdefgh"));
        assert!(!validate_password("12345678"));
        assert!(!validate_password("abc123"));
        assert!(!validate_password("abc123!@#"));
        assert!(!validate_password("abc 12345"));
    }

    #[test]
    fn test_validate_password_length_bounds() {
        for len in 0..8 {
            let short: String = "a1".chars().cycle().take(len).collect();
            assert!(!validate_password(&short), "length {} accepted", len);
        }
        for len in 13..20 {
            let long: String = "a1".chars().cycle().take(len).collect();
            assert!(!validate_password(&long), "length {} accepted", len);
        }
        assert!(validate_password("a1a1a1a1"));
        assert!(validate_password("a1a1a1a1a1a1"));
    }

    #[test]
    fn test_validate_password_rejects_non_ascii() {
        assert!(!validate_password("abcdé1234"));
        assert!(!validate_password("abcd١٢٣٤"));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ada"));
        assert!(validate_name("  Ada  "));
        assert!(!validate_name(""));
        assert!(!validate_name("   \t"));
    }

    #[test]
    fn test_field_validation_messages() {
        assert_eq!(
            FieldValidation::from_check(check_email("nope")),
            FieldValidation {
                valid: false,
                message: "Invalid email format".to_string(),
            }
        );
        assert_eq!(
            FieldValidation::from_check(check_email("a@b.co")),
            FieldValidation::ok()
        );
        assert_eq!(
            check_password("short1").unwrap_err().to_string(),
            "Password must be 8-12 characters, include 1 letter and 1 number"
        );
    }

    #[test]
    fn test_login_form() {
        let mut form = LoginForm::default();
        assert!(!form.is_valid());

        form.email = "a@b.co".to_string();
        assert!(!form.is_valid());

        form.password = "abc12345".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_signup_form_requires_name() {
        let mut form = SignupForm {
            name: "   ".to_string(),
            email: "a@b.co".to_string(),
            password: "abc12345".to_string(),
        };
        assert!(!form.is_valid());
        assert_eq!(form.name_validation().message, "Name is required");

        form.name = "Ada".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_is_form_valid() {
        assert!(is_form_valid(&[]));
        assert!(is_form_valid(&[FieldValidation::ok(), FieldValidation::ok()]));
        assert!(!is_form_valid(&[
            FieldValidation::ok(),
            FieldValidation::from_check(Err(ValidationError::InvalidEmail)),
        ]));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    mod properties {
        use super::*;
        use crate::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn email_without_at_is_rejected(input in "[^@]*") {
                prop_assert!(!validate_email(&input));
            }

            #[test]
            fn email_without_dot_after_at_is_rejected(
                local in "[^@]{0,12}",
                domain in "[^@.]{0,12}",
            ) {
                let input = format!("{}@{}", local, domain);
                prop_assert!(!validate_email(&input));
            }

            #[test]
            fn short_password_is_rejected(input in "[A-Za-z0-9]{0,7}") {
                prop_assert!(!validate_password(&input));
            }

            #[test]
            fn long_password_is_rejected(input in "[A-Za-z0-9]{13,40}") {
                prop_assert!(!validate_password(&input));
            }

            #[test]
            fn password_with_letters_and_digits_is_accepted(
                input in "[A-Za-z]{4,6}[0-9]{4,6}",
            ) {
                prop_assert!(validate_password(&input));
            }

            #[test]
            fn accepted_password_meets_every_rule(input in any::<String>()) {
                if validate_password(&input) {
                    let len = input.chars().count();
                    prop_assert!((PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len));
                    prop_assert!(input.chars().all(|c| c.is_ascii_alphanumeric()));
                    prop_assert!(input.chars().any(|c| c.is_ascii_alphabetic()));
                    prop_assert!(input.chars().any(|c| c.is_ascii_digit()));
                }
            }
        }
    }
}
