//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers do not store credentials;
//! they only attach a bearer header when a caller provides one.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use hireboard::{
    AppError, config::AppConfig, errors::sanitize_error_body, session::SessionCredential,
};
use serde::{Serialize, de::DeserializeOwned};
use web_sys::{AbortController, AbortSignal, FormData};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON from a public endpoint.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        prepare(Request::get(&url), None, signal)
            .build()
            .map_err(build_error)
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches JSON with an `Authorization: Bearer` header.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    credential: &SessionCredential,
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        prepare(Request::get(&url), Some(credential), signal)
            .build()
            .map_err(build_error)
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and expects a success status; the response body is ignored.
pub async fn post_json<B: Serialize>(
    path: &str,
    body: &B,
    credential: Option<&SessionCredential>,
) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        prepare(Request::post(&url), credential, signal)
            .json(body)
            .map_err(encode_error)
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts JSON and hands back the raw status and body, for endpoints whose
/// success status carries meaning (login answers `201`).
pub async fn post_json_for_status<B: Serialize>(
    path: &str,
    body: &B,
) -> Result<(u16, String), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        prepare(Request::post(&url), None, signal)
            .json(body)
            .map_err(encode_error)
    })
    .await?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok((status, body))
}

/// Sends a JSON `PATCH` and expects a success status.
pub async fn patch_json<B: Serialize>(
    path: &str,
    body: &B,
    credential: Option<&SessionCredential>,
) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        prepare(Request::patch(&url), credential, signal)
            .json(body)
            .map_err(encode_error)
    })
    .await?;

    handle_empty_response(response).await
}

/// Sends an authenticated `DELETE`.
pub async fn delete_with_bearer(path: &str, credential: &SessionCredential) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        prepare(Request::delete(&url), Some(credential), signal)
            .build()
            .map_err(build_error)
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts a multipart form; the browser sets the boundary header.
pub async fn post_form(path: &str, form: &FormData) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        prepare(Request::post(&url), None, signal)
            .body(form.clone())
            .map_err(build_error)
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    AppConfig::load().api_url(path)
}

fn prepare(
    builder: RequestBuilder,
    credential: Option<&SessionCredential>,
    signal: &AbortSignal,
) -> RequestBuilder {
    let builder = builder.abort_signal(Some(signal));
    match credential {
        Some(credential) => builder.header("Authorization", &credential.bearer()),
        None => builder,
    }
}

fn build_error(err: gloo_net::Error) -> AppError {
    AppError::Serialization(format!("Failed to build request: {err}"))
}

fn encode_error(err: gloo_net::Error) -> AppError {
    AppError::Serialization(format!("Failed to encode request: {err}"))
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| {
        let mapped = map_request_error(err);
        log::warn!("request failed: {mapped}");
        mapped
    })
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::debug!("{} answered {status}", response.url());
    AppError::Http {
        status,
        message: sanitize_error_body(&body),
    }
}
