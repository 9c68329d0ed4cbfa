//! Product listing handlers.
//!
//! `/products` returns the bounded listing as is. `/products_v2` enriches it
//! with inventory and reviews, and `/products_v3` enriches every product.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use catalog_core::catalog::{
    collect_products, enrich_products, scan_all_products, CatalogError, EnrichedProduct,
    ListProductsQuery, ListingCriteria, Product,
};

use crate::{handlers::AppError, state::AppState};

fn criteria_from(
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<ListingCriteria, AppError> {
    let Query(query) =
        query.map_err(|rejection| CatalogError::MalformedRequest(rejection.body_text()))?;
    Ok(query.into_criteria()?)
}

/// List products (GET /products).
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, AppError> {
    let criteria = criteria_from(query)?;

    let products = collect_products(state.products.as_ref(), &criteria).await?;

    tracing::debug!(count = products.len(), limit = criteria.limit, "Listed products");
    Ok(Json(products))
}

/// List products with their inventory and reviews (GET /products_v2).
pub async fn list_products_v2(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<EnrichedProduct>>, AppError> {
    let criteria = criteria_from(query)?;

    let products = collect_products(state.products.as_ref(), &criteria).await?;
    let enriched =
        enrich_products(state.inventory.as_ref(), state.reviews.as_ref(), products).await;

    tracing::debug!(count = enriched.len(), limit = criteria.limit, "Listed enriched products");
    Ok(Json(enriched))
}

/// Enrich every product in the catalog (GET /products_v3).
///
/// Reads the whole products collection and issues two lookups per product,
/// so cost grows with the catalog.
pub async fn list_products_v3(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrichedProduct>>, AppError> {
    let products = scan_all_products(state.products.as_ref()).await?;
    tracing::info!(count = products.len(), "Enriching the full catalog");

    let enriched =
        enrich_products(state.inventory.as_ref(), state.reviews.as_ref(), products).await;

    Ok(Json(enriched))
}
