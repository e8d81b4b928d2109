use contracts::dashboards::d100_daily_summary::DailySummaryResponse;
use contracts::domain::a001_order::PaymentMethod;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Получить сводку за день, с необязательным фильтром по способу оплаты
pub async fn get_daily_summary(
    date: &str,
    payment_method: Option<PaymentMethod>,
) -> Result<DailySummaryResponse, String> {
    let mut url = api_url(&format!("/api/d100/daily-summary?date={}", date));
    if let Some(pm) = payment_method {
        url.push_str(&format!("&paymentMethod={}", pm.as_str()));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
