use contracts::system::auth::{AdminSession, LoginRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_envelope};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<AdminSession, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_envelope(response, "Login failed").await
}
