use contracts::catalog::Drink;
use contracts::domain::a001_order::{Order, OrderDraft};
use contracts::domain::a002_customer::Customer;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, handle_unauthorized};

pub async fn fetch_catalog() -> Result<Vec<Drink>, String> {
    let response = Request::get(&api_url("/api/catalog"))
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

pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let auth = auth_header().ok_or_else(|| "Не авторизован".to_string())?;

    let response = Request::get(&api_url("/api/customers"))
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

pub async fn submit_order(draft: &OrderDraft) -> Result<Order, String> {
    let auth = auth_header().ok_or_else(|| "Не авторизован".to_string())?;

    let response = Request::post(&api_url("/api/orders"))
        .header("Authorization", &auth)
        .json(draft)
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
