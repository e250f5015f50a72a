use contracts::dashboards::d400_status_summary::StatusSummaryResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_envelope};
use crate::system::auth::storage;

/// Transaction count per pipeline stage
pub async fn get_status_summary() -> Result<StatusSummaryResponse, String> {
    let token = storage::get_token().ok_or_else(|| "Not authenticated".to_string())?;

    let response = Request::get(&api_url("/transactions/dashboard"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_envelope(response, "Failed to load dashboard").await
}
