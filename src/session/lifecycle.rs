//! Login and logout: the only writers of the session store besides the
//! identity check.

use super::{credential::SessionCredential, guard::Navigator, store::SessionStore};
use crate::errors::{AppError, sanitize_error_body};
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`. Never log it.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Builds a request from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when either field is blank.
    pub fn from_input(username: &str, password: &str) -> Result<Self, AppError> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(AppError::Validation(
                "Username and password are required.".to_string(),
            ));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct LoginFailure {
    #[serde(default)]
    message: Option<String>,
}

const LOGIN_FAILED: &str = "Login failed";

/// Maps the login endpoint's status and body to a token.
///
/// Only `201 Created` is a success. Any other status surfaces the backend's
/// JSON `message` field, or "Login failed" when the body has none.
///
/// # Errors
///
/// Returns `AppError::Http` for non-201 responses and `AppError::Parse` when a
/// 201 body carries no token.
pub fn interpret_login_response(status: u16, body: &str) -> Result<String, AppError> {
    if status == 201 {
        return serde_json::from_str::<LoginResponse>(body)
            .map(|response| response.token)
            .map_err(|err| AppError::Parse(format!("Failed to decode login response: {err}")));
    }

    let message = serde_json::from_str::<LoginFailure>(body.trim())
        .ok()
        .and_then(|failure| failure.message)
        .filter(|message| !message.trim().is_empty())
        .map_or_else(|| LOGIN_FAILED.to_string(), |message| sanitize_error_body(&message));
    Err(AppError::Http { status, message })
}

/// Text shown under the login form. Backend rejections show their message
/// as-is; other failures keep their category prefix.
pub fn login_failure_message(err: &AppError) -> String {
    match err {
        AppError::Http { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// Stores the token returned by a successful login.
///
/// # Errors
///
/// Returns `AppError::Session` if the token is unusable or cannot be stored.
pub fn establish_session<S>(store: &S, token: &str) -> Result<SessionCredential, AppError>
where
    S: SessionStore + ?Sized,
{
    let credential = SessionCredential::new(token)?;
    store.set(&credential)?;
    log::info!("session established");
    Ok(credential)
}

/// Logs out: clears the credential and returns to the login route.
pub fn end_session<S, N>(store: &S, navigator: &N, login_path: &str)
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    store.clear();
    log::info!("session ended");
    navigator.navigate(login_path);
}

/// Sends an already signed-in visitor to `home_path`. Returns whether a
/// redirect happened.
pub fn redirect_if_signed_in<S, N>(store: &S, navigator: &N, home_path: &str) -> bool
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    if store.get().is_some() {
        navigator.navigate(home_path);
        true
    } else {
        false
    }
}
