//! # Form State
//!
//! Login and signup field state with inline errors.
//!
//! Every `set_*` call revalidates that field, exactly once per keystroke.
//! A field that has never been edited shows no error, while the submit
//! button still reflects the whole form.

use serde::Serialize;

use coursehub_core::validation::{check_email, check_name, check_password};
use coursehub_core::{FieldValidation, LoginForm, SignupForm};

/// Inline error text per field. Empty string means no error shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Login
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    form: LoginForm,
    errors: FieldErrors,
    password_visible: bool,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, text: impl Into<String>) {
        self.form.email = text.into();
        self.errors.email = FieldValidation::from_check(check_email(&self.form.email)).message;
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.form.password = text.into();
        self.errors.password =
            FieldValidation::from_check(check_password(&self.form.password)).message;
    }

    pub fn toggle_password_visible(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn submit_enabled(&self) -> bool {
        self.form.is_valid()
    }
}

// =============================================================================
// Signup
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct SignupFormState {
    form: SignupForm,
    errors: FieldErrors,
    password_visible: bool,
}

impl SignupFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.form.name = text.into();
        self.errors.name = FieldValidation::from_check(check_name(&self.form.name)).message;
    }

    pub fn set_email(&mut self, text: impl Into<String>) {
        self.form.email = text.into();
        self.errors.email = FieldValidation::from_check(check_email(&self.form.email)).message;
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.form.password = text.into();
        self.errors.password =
            FieldValidation::from_check(check_password(&self.form.password)).message;
    }

    pub fn toggle_password_visible(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn submit_enabled(&self) -> bool {
        self.form.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_form_shows_no_errors() {
        let login = LoginFormState::new();
        assert_eq!(login.errors(), &FieldErrors::default());
        assert!(!login.submit_enabled());
    }

    #[test]
    fn test_login_errors_follow_keystrokes() {
        let mut login = LoginFormState::new();

        login.set_email("a@b");
        assert_eq!(login.errors().email, "Invalid email format");
        assert_eq!(login.errors().password, "");

        login.set_email("a@b.co");
        assert_eq!(login.errors().email, "");

        login.set_password("abc");
        assert_eq!(
            login.errors().password,
            "Password must be 8-12 characters, include 1 letter and 1 number"
        );
        assert!(!login.submit_enabled());

        login.set_password("abc12345");
        assert_eq!(login.errors().password, "");
        assert!(login.submit_enabled());
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut login = LoginFormState::new();
        assert!(!login.password_visible());
        login.toggle_password_visible();
        assert!(login.password_visible());
    }

    #[test]
    fn test_signup_needs_name() {
        let mut signup = SignupFormState::new();
        signup.set_email("a@b.co");
        signup.set_password("abc12345");
        assert!(!signup.submit_enabled());

        signup.set_name("  ");
        assert_eq!(signup.errors().name, "Name is required");
        assert!(!signup.submit_enabled());

        signup.set_name("Ada");
        assert_eq!(signup.errors().name, "");
        assert!(signup.submit_enabled());
    }
}
