use axum::{
    extract::{Path, State},
    Json,
};

use catalog_core::catalog::Review;

use crate::{handlers::AppError, state::AppState};

/// List the reviews of a product (GET /reviews/{product_id}).
///
/// An unknown product simply has no reviews.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = state.reviews.query_reviews(&product_id).await?;
    Ok(Json(reviews))
}
