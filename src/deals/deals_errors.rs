use thiserror::Error;

use crate::currencies::CurrencyError;

/// Custom error type for deal-related operations, one kind per rejection
/// reason so batch mode can report each failed row without aborting the file.
#[derive(Debug, Error)]
pub enum DealError {
    #[error("Malformed row: {0}")]
    MalformedRow(String),
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),
    #[error("'from' currency and 'to' currency cannot be the same: {0}")]
    SameCurrencyPair(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Deal with the same unique ID already exists: {0}")]
    DuplicateDeal(String),
    #[error("Deal validation failed: {0}")]
    ValidationFailed(String),
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<CurrencyError> for DealError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::InvalidCode(code) => DealError::InvalidCurrencyCode(code),
            other => DealError::StorageError(other.to_string()),
        }
    }
}

/// Result type for deal operations
pub type Result<T> = std::result::Result<T, DealError>;
