use contracts::domain::a002_service_price::{
    CreateServicePriceRequest, ServicePriceDto, UpdateServicePriceRequest,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_ack, read_envelope};
use crate::system::auth::storage;

fn get_auth_header() -> Result<String, String> {
    storage::get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// Active prices; the list is public
pub async fn fetch_service_prices() -> Result<Vec<ServicePriceDto>, String> {
    let response = Request::get(&api_url("/service-prices"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_envelope(response, "Failed to fetch service prices").await
}

pub async fn fetch_service_price(id: u64) -> Result<ServicePriceDto, String> {
    let response = Request::get(&api_url(&format!("/service-prices/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_envelope(response, "Failed to fetch service price").await
}

/// The backend refuses a second active price for the same type and item
pub async fn create_service_price(request: &CreateServicePriceRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/service-prices"))
        .header("Authorization", &get_auth_header()?)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_ack(response, "Failed to create service price").await
}

pub async fn update_service_price(id: u64, request: &UpdateServicePriceRequest) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/service-prices/{}", id)))
        .header("Authorization", &get_auth_header()?)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_ack(response, "Failed to update service price").await
}

pub async fn delete_service_price(id: u64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/service-prices/{}", id)))
        .header("Authorization", &get_auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_ack(response, "Failed to delete service price").await
}

/// Hide a price from new orders, or offer it again
pub async fn set_service_price_active(id: u64, active: bool) -> Result<(), String> {
    let action = if active { "activate" } else { "deactivate" };
    let response = Request::patch(&api_url(&format!("/service-prices/{}/{}", id, action)))
        .header("Authorization", &get_auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_ack(response, "Failed to change service price state").await
}
