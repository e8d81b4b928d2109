use axum::Json;
use contracts::catalog::Drink;

/// GET /api/catalog
pub async fn list_drinks() -> Json<Vec<Drink>> {
    Json(contracts::catalog::catalog().to_vec())
}
