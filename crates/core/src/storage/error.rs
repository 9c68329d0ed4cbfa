use thiserror::Error;

/// Errors reported by the backing store.
///
/// "Not found" is never an error: point lookups return `Ok(None)` and
/// partition queries return an empty list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store rejected or failed the request (throttling, validation, ...).
    #[error("{code} - {message}")]
    Service { code: String, message: String },
    #[error("ConnectionFailed - {0}")]
    ConnectionFailed(String),
    #[error("SerializationError - {0}")]
    Serialization(String),
    #[error("InvalidData - {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Creates a service error from a store error code and message.
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the error code reported for this failure.
    pub fn code(&self) -> &str {
        match self {
            StoreError::Service { code, .. } => code,
            StoreError::ConnectionFailed(_) => "ConnectionFailed",
            StoreError::Serialization(_) => "SerializationError",
            StoreError::InvalidData(_) => "InvalidData",
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
