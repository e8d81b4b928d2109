use contracts::domain::a002_customer::Customer;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, handle_unauthorized};

pub async fn fetch_all() -> Result<Vec<Customer>, String> {
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

pub async fn delete(id: &str) -> Result<(), String> {
    let auth = auth_header().ok_or_else(|| "Не авторизован".to_string())?;

    let response = Request::delete(&api_url(&format!("/api/customers/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        handle_unauthorized(response.status());
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
