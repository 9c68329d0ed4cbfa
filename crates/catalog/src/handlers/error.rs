use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catalog_core::catalog::CatalogError;
use catalog_core::http_mapping::{catalog_error_to_status_code, store_error_to_status_code};
use catalog_core::storage::StoreError;

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, detail) = if let Some(catalog_error) = self.0.downcast_ref::<CatalogError>() {
            tracing::debug!(error = %catalog_error, "Request rejected");
            (
                catalog_error_to_status_code(catalog_error),
                catalog_error.to_string(),
            )
        } else if let Some(store_error) = self.0.downcast_ref::<StoreError>() {
            tracing::error!(error = %store_error, "Store request failed");
            (
                store_error_to_status_code(store_error),
                store_error.to_string(),
            )
        } else {
            tracing::error!(error = ?self.0, "Unexpected error");
            (500, format!("Internal server error: {}", self.0))
        };

        let status_code = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
