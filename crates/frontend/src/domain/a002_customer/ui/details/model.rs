use contracts::domain::a002_customer::{Customer, CustomerDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, handle_unauthorized};

pub async fn save(dto: &CustomerDto) -> Result<Customer, String> {
    let auth = auth_header().ok_or_else(|| "Не авторизован".to_string())?;

    let response = Request::post(&api_url("/api/customers"))
        .header("Authorization", &auth)
        .json(dto)
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
