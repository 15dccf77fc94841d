use thiserror::Error;

/// Custom error type for currency-related operations
#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("Invalid currency code: {0}")]
    InvalidCode(String),
    #[error("Currency with code '{0}' already exists")]
    AlreadyExists(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Result type for currency operations
pub type Result<T> = std::result::Result<T, CurrencyError>;
