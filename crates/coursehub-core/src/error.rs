//! # Error Types
//!
//! Validation messages for coursehub-core.
//!
//! Nothing in this crate fails at runtime: cart operations are total and
//! the validators return booleans. [`ValidationError`] exists so that each
//! failed rule carries the exact text a screen shows under the field.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  keystroke ──► check_email(text) ──► Err(InvalidEmail)                 │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                 FieldValidation { valid: false,                         │
//! │                                   message: "Invalid email format" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// A failed form rule. The `Display` text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Password breaks the length or character rules.
    #[error("Password must be 8-12 characters, include 1 letter and 1 number")]
    InvalidPassword,

    /// Name is empty or whitespace only.
    #[error("Name is required")]
    NameRequired,
}

impl ValidationError {
    /// Name of the form field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidPassword => "password",
            ValidationError::NameRequired => "name",
        }
    }
}
