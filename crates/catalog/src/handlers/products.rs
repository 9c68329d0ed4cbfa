//! Single-product handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use catalog_core::catalog::{CatalogError, Product, ProductUpdate, UpdateProductRequest};

use crate::{handlers::AppError, state::AppState};

/// Get a product by ID (GET /product/{product_id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .products
        .get_product(&product_id)
        .await?
        .ok_or_else(|| CatalogError::ProductNotFound(product_id.clone()))?;

    Ok(Json(product))
}

/// Replace a product's name and price (PUT /product/{product_id}).
///
/// The body is validated before the store is touched. Responds with the
/// applied `{name, price}`.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ProductUpdate>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| CatalogError::MalformedRequest(rejection.body_text()))?;
    let update = request.validate()?;

    let updated = state.products.update_product(&product_id, &update).await?;
    if updated.is_none() {
        return Err(CatalogError::ProductNotFound(product_id).into());
    }

    tracing::info!(product_id = %product_id, "Product updated");
    Ok(Json(update))
}
