use contracts::domain::a001_transaction::{
    CreateTransactionRequest, CreatedTransactionDto, TrackingDto, TransactionDetailDto,
    TransactionListPage, TransactionListQuery, UpdateStatusRequest, UpdateTransactionRequest,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_ack, read_envelope};
use crate::system::auth::storage;

fn get_auth_header() -> Result<String, String> {
    storage::get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// Public tracking by transaction code, no token required
pub async fn track(code: &str) -> Result<TrackingDto, String> {
    let url = api_url(&format!("/track/{}", urlencoding::encode(code.trim())));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_envelope(response, "Tracking failed").await
}

/// Get transaction with items and status history
pub async fn fetch_transaction(id: u64) -> Result<TransactionDetailDto, String> {
    let response = Request::get(&api_url(&format!("/transactions/{}", id)))
        .header("Authorization", &get_auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_envelope(response, "Failed to fetch transaction").await
}

/// Page of transactions, optionally filtered by status
pub async fn fetch_transactions(query: &TransactionListQuery) -> Result<TransactionListPage, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;

    let response = Request::get(&api_url(&format!("/transactions?{}", qs)))
        .header("Authorization", &get_auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_envelope(response, "Failed to fetch transactions").await
}

/// Register a new order with its items; the backend assigns the code
pub async fn create_transaction(
    request: &CreateTransactionRequest,
) -> Result<CreatedTransactionDto, String> {
    let response = Request::post(&api_url("/transactions"))
        .header("Authorization", &get_auth_header()?)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_envelope(response, "Failed to create transaction").await
}

/// Customer fields, notes and payment flag; items stay as they are
pub async fn update_transaction(id: u64, request: &UpdateTransactionRequest) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/transactions/{}", id)))
        .header("Authorization", &get_auth_header()?)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_ack(response, "Failed to update transaction").await
}

/// Move a transaction to another status; the backend validates the transition
pub async fn update_status(id: u64, request: &UpdateStatusRequest) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/transactions/{}/status", id)))
        .header("Authorization", &get_auth_header()?)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_ack(response, "Failed to update status").await
}

pub async fn delete_transaction(id: u64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/transactions/{}", id)))
        .header("Authorization", &get_auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_ack(response, "Failed to delete transaction").await
}
