use serde::Deserialize;
use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Session(String),
    Validation(String),
}

impl AppError {
    /// True when the failure means the backend could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Timeout(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Session(message) => write!(formatter, "Session error: {message}"),
            AppError::Validation(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Sanitizes HTTP error bodies for user-facing messages.
///
/// JSON bodies carrying a `message` field are reduced to that message; anything
/// else is trimmed and truncated.
pub fn sanitize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    let message = serde_json::from_str::<ErrorBody>(trimmed)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| trimmed.to_string());
    let message = message.trim();

    if message.is_empty() {
        "Request failed.".to_string()
    } else {
        message.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_error_body_prefers_json_message() {
        assert_eq!(
            sanitize_error_body(r#"{"message":"Invalid credentials"}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn sanitize_error_body_falls_back_to_text() {
        assert_eq!(sanitize_error_body("  bad gateway \n"), "bad gateway");
        assert_eq!(sanitize_error_body("   "), "Request failed.");
        assert_eq!(sanitize_error_body(r#"{"message":"  "}"#), "Request failed.");
    }

    #[test]
    fn sanitize_error_body_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(sanitize_error_body(&body).chars().count(), MAX_ERROR_CHARS);
    }

    #[test]
    fn unreachable_covers_network_and_timeout_only() {
        assert!(AppError::Network("down".to_string()).is_unreachable());
        assert!(AppError::Timeout("slow".to_string()).is_unreachable());
        assert!(
            !AppError::Http {
                status: 401,
                message: "nope".to_string()
            }
            .is_unreachable()
        );
    }

    #[test]
    fn http_error_display_includes_status() {
        let err = AppError::Http {
            status: 404,
            message: "Job not found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): Job not found");
    }
}
