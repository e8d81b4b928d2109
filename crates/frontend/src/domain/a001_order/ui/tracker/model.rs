use contracts::domain::a001_order::Order;
use gloo_net::http::Request;
use serde_json::json;

use crate::shared::api_utils::{api_url, auth_header, handle_unauthorized};

pub async fn fetch_active() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/api/orders/active"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        handle_unauthorized(response.status());
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn set_item_ready(order_id: &str, item_id: &str, ready: bool) -> Result<Order, String> {
    let auth = auth_header().ok_or_else(|| "Не авторизован".to_string())?;
    let url = api_url(&format!("/api/orders/{}/items/{}/ready", order_id, item_id));

    let response = Request::post(&url)
        .header("Authorization", &auth)
        .json(&json!({ "ready": ready }))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        handle_unauthorized(response.status());
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn complete_order(order_id: &str) -> Result<Order, String> {
    let auth = auth_header().ok_or_else(|| "Не авторизован".to_string())?;
    let url = api_url(&format!("/api/orders/{}/complete", order_id));

    let response = Request::post(&url)
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        handle_unauthorized(response.status());
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
