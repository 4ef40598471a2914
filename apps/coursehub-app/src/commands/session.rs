//! # Login & Signup Commands
//!
//! Submitting the forms is local only: a valid login moves to the home
//! screen with the email, a valid signup goes back to login. Nothing is
//! sent to a server and no session is kept.

use tracing::{debug, info};

use coursehub_core::validation::{check_email, check_name, check_password};

use crate::error::ApiError;
use crate::state::{LoginFormState, Navigator, Route, SignupFormState};

/// Submits the login form.
///
/// ## Errors
/// `VALIDATION_ERROR` with the first failing field's message.
pub fn submit_login(form: &LoginFormState, nav: &mut Navigator) -> Result<Route, ApiError> {
    debug!("submit_login command");

    let fields = form.form();
    check_email(&fields.email).and(check_password(&fields.password))?;

    let route = Route::Home {
        email: Some(fields.email.clone()),
    };
    nav.navigate(route.clone());
    Ok(route)
}

/// Submits the signup form.
///
/// ## Errors
/// `VALIDATION_ERROR` with the first failing field's message.
pub fn submit_signup(form: &SignupFormState, nav: &mut Navigator) -> Result<Route, ApiError> {
    debug!("submit_signup command");

    let fields = form.form();
    check_name(&fields.name)
        .and(check_email(&fields.email))
        .and(check_password(&fields.password))?;

    info!("Sign up successful");
    nav.navigate(Route::Login);
    Ok(Route::Login)
}
