//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading backend replies.

use contracts::shared::api_response::ApiResponse;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Port the laundry backend listens on
pub const BACKEND_PORT: u16 = 8080;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`BACKEND_PORT`] and the `/api` prefix of the backend router.
///
/// # Returns
/// - API base URL like "http://localhost:8080/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}/api", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path relative to `/api`
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/transactions/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Read the `{ success, message, data }` envelope, turning non-2xx replies and
/// empty payloads into a readable error
pub async fn read_envelope<T>(response: Response, context: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let ok = response.ok();

    let body = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| format!("{}: failed to parse response ({}): {}", context, status, e));

    if !ok {
        let reason = body
            .ok()
            .and_then(|b| b.failure_reason())
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(format!("{}: {}", context, reason));
    }

    body?
        .into_data()
        .map_err(|e| format!("{}: {}", context, e))
}

/// Same as [`read_envelope`] for endpoints whose payload the caller ignores
pub async fn read_ack(response: Response, context: &str) -> Result<(), String> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let reason = response
        .json::<ApiResponse<serde_json::Value>>()
        .await
        .ok()
        .and_then(|b| b.failure_reason())
        .unwrap_or_else(|| format!("HTTP {}", status));
    Err(format!("{}: {}", context, reason))
}
