use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d100_daily_summary::{DailySummaryRequest, DailySummaryResponse};

use crate::dashboards::d100_daily_summary::service;

/// GET /api/d100/daily-summary?date=YYYY-MM-DD&paymentMethod=cash
pub async fn get_daily_summary(
    Query(request): Query<DailySummaryRequest>,
) -> Result<Json<DailySummaryResponse>, StatusCode> {
    match service::daily_summary(request).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!("Failed to build daily summary: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
