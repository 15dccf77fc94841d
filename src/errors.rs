use thiserror::Error;

use crate::currencies::CurrencyError;
use crate::deals::DealError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the FX deals core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency operation failed: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Deal operation failed: {0}")]
    Deal(#[from] DealError),
}
