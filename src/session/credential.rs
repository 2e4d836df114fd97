//! The opaque bearer token issued at login and the claims the client reads
//! from it. The token itself must never be logged; `Debug` is redacted.

use crate::errors::AppError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use std::fmt;

/// Bearer token proving an authenticated identity to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

/// Claims decoded from the token payload. The client only reads `userId`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CredentialClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl SessionCredential {
    /// Wraps a raw token after checking it can be stored in a cookie verbatim.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` for blank tokens or tokens containing
    /// characters outside the cookie-octet set.
    pub fn new(token: impl Into<String>) -> Result<Self, AppError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::Session("Session token is empty.".to_string()));
        }
        if !token.bytes().all(is_cookie_octet) {
            return Err(AppError::Session(
                "Session token contains unsupported characters.".to_string(),
            ));
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for this credential.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Decodes the JWT payload without verifying the signature; the backend
    /// does that during the identity check.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` when the token is not a three-part JWT or the
    /// payload lacks a usable `userId`.
    pub fn claims(&self) -> Result<CredentialClaims, AppError> {
        let mut parts = self.0.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::Session("Session token is not a JWT.".to_string()));
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|_| AppError::Session("Session token payload is not base64.".to_string()))?;
        let claims: CredentialClaims = serde_json::from_slice(&bytes)
            .map_err(|_| AppError::Session("Session token payload is unreadable.".to_string()))?;

        if claims.user_id.trim().is_empty() {
            return Err(AppError::Session(
                "Session token has no user id.".to_string(),
            ));
        }
        Ok(claims)
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionCredential(<redacted>)")
    }
}

/// RFC 6265 `cookie-octet`.
pub(crate) fn is_cookie_octet(byte: u8) -> bool {
    matches!(byte, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}
