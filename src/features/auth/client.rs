//! Client wrappers for the backend auth endpoints.

use crate::app_lib::{get_json_with_bearer, post_json_for_status};
use hireboard::AppError;
use hireboard::session::{
    Identity, IdentityProvider, LoginRequest, SessionCredential, interpret_login_response,
};

/// Exchanges username and password for a session token.
/// The request body carries the password and must never be logged.
pub async fn login(request: &LoginRequest) -> Result<String, AppError> {
    let (status, body) = post_json_for_status("/auth/login", request).await?;
    interpret_login_response(status, &body)
}

/// Identity checks against `GET /auth/:userId`.
pub struct HttpIdentityProvider;

impl IdentityProvider for HttpIdentityProvider {
    async fn fetch_identity(
        &self,
        user_id: &str,
        credential: &SessionCredential,
    ) -> Result<Identity, AppError> {
        get_json_with_bearer(&format!("/auth/{}", user_id.trim()), credential).await
    }
}
