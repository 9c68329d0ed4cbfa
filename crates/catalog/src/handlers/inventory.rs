use axum::{
    extract::{Path, State},
    Json,
};

use catalog_core::catalog::InventoryRecord;

use crate::{handlers::AppError, state::AppState};

/// List the inventory records of a product (GET /inventory/{product_id}).
pub async fn list_inventory(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<InventoryRecord>>, AppError> {
    let records = state.inventory.query_inventory(&product_id).await?;
    Ok(Json(records))
}
