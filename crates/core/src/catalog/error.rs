use thiserror::Error;

/// Errors raised by the catalog itself, as opposed to the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product with ID {0} not found")]
    ProductNotFound(String),
    #[error("Field required: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}
