//! Pure functions for mapping catalog and store errors to HTTP status codes.
//!
//! Kept free of any web framework so the mapping can be tested on its own.

use crate::catalog::CatalogError;
use crate::storage::StoreError;

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// - `ProductNotFound` -> 404 (Not Found)
/// - `MissingField` -> 422 (Unprocessable Entity)
/// - `InvalidField` -> 422 (Unprocessable Entity)
/// - `MalformedRequest` -> 422 (Unprocessable Entity)
///
/// # Examples
///
/// ```
/// use catalog_core::catalog::CatalogError;
/// use catalog_core::http_mapping::catalog_error_to_status_code;
///
/// let error = CatalogError::ProductNotFound("p-1".to_string());
/// assert_eq!(catalog_error_to_status_code(&error), 404);
/// ```
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::ProductNotFound(_) => 404,
        CatalogError::MissingField(_) => 422,
        CatalogError::InvalidField { .. } => 422,
        CatalogError::MalformedRequest(_) => 422,
    }
}

/// Maps a [`StoreError`] to an HTTP status code.
///
/// Every store fault aborts the request it happened in, whatever its cause,
/// so all variants map to 500 (Internal Server Error).
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::Service { .. } => 500,
        StoreError::ConnectionFailed(_) => 500,
        StoreError::Serialization(_) => 500,
        StoreError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = CatalogError::ProductNotFound("p-1".to_string());
        assert_eq!(catalog_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_validation_errors_map_to_422() {
        assert_eq!(
            catalog_error_to_status_code(&CatalogError::MissingField("price")),
            422
        );
        assert_eq!(
            catalog_error_to_status_code(&CatalogError::InvalidField {
                field: "num_products",
                reason: "must be greater than zero".to_string(),
            }),
            422
        );
        assert_eq!(
            catalog_error_to_status_code(&CatalogError::MalformedRequest(
                "expected value".to_string()
            )),
            422
        );
    }

    #[test]
    fn test_store_errors_map_to_500() {
        let errors = [
            StoreError::service("ValidationException", "bad expression"),
            StoreError::ConnectionFailed("dns".to_string()),
            StoreError::Serialization("price".to_string()),
            StoreError::InvalidData("product_id".to_string()),
        ];

        for error in &errors {
            assert_eq!(store_error_to_status_code(error), 500);
        }
    }
}
