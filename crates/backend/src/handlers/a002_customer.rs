use axum::{extract::Path, http::StatusCode, Json};

use crate::domain::a002_customer;
use contracts::domain::a002_customer::{Customer, CustomerDto};

/// GET /api/customers
pub async fn list_all() -> Result<Json<Vec<Customer>>, StatusCode> {
    match a002_customer::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list customers: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/customers/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Customer>, StatusCode> {
    match a002_customer::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load customer {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/customers
pub async fn upsert(Json(dto): Json<CustomerDto>) -> Result<Json<Customer>, StatusCode> {
    let result = if dto.id.is_some() {
        a002_customer::service::update(dto).await
    } else {
        a002_customer::service::create(dto).await
    };
    match result {
        Ok(customer) => Ok(Json(customer)),
        Err(e) => {
            tracing::error!("Failed to save customer: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// DELETE /api/customers/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    match a002_customer::service::delete(&id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete customer {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
