use axum::{extract::Path, http::StatusCode, Json};
use serde::Deserialize;

use crate::domain::a001_order;
use contracts::domain::a001_order::{Order, OrderDraft};

/// POST /api/orders
pub async fn create(Json(draft): Json<OrderDraft>) -> Result<Json<Order>, StatusCode> {
    match a001_order::service::create(draft).await {
        Ok(order) => Ok(Json(order)),
        Err(e) => {
            tracing::error!("Failed to create order: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// GET /api/orders/active
pub async fn list_active() -> Result<Json<Vec<Order>>, StatusCode> {
    match a001_order::service::list_active().await {
        Ok(orders) => Ok(Json(orders)),
        Err(e) => {
            tracing::error!("Failed to list active orders: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/orders/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Order>, StatusCode> {
    match a001_order::service::get_by_id(&id).await {
        Ok(Some(order)) => Ok(Json(order)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load order {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/orders/:id/complete
pub async fn complete(Path(id): Path<String>) -> Result<Json<Order>, StatusCode> {
    match a001_order::service::complete(&id).await {
        Ok(Some(order)) => Ok(Json(order)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to complete order {}: {}", id, e);
            Err(StatusCode::CONFLICT)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetItemReadyRequest {
    pub ready: bool,
}

/// POST /api/orders/:id/items/:item_id/ready
pub async fn set_item_ready(
    Path((order_id, item_id)): Path<(String, String)>,
    Json(request): Json<SetItemReadyRequest>,
) -> Result<Json<Order>, StatusCode> {
    match a001_order::service::set_item_ready(&order_id, &item_id, request.ready).await {
        Ok(Some(order)) => Ok(Json(order)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!(
                "Failed to update item {} of order {}: {}",
                item_id,
                order_id,
                e
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
