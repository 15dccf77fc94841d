use super::currencies_errors::Result;
use super::currencies_model::{Currency, NewCurrency};

/// Trait defining the contract for Currency repository operations.
///
/// This is the currency half of the record store collaborator: lookups by
/// code or id, and creation with storage-enforced code uniqueness.
pub trait CurrencyRepositoryTrait: Send + Sync {
    fn find_by_code(&self, code: &str) -> Result<Option<Currency>>;
    fn find_by_id(&self, id: &str) -> Result<Option<Currency>>;
    fn create(&self, new_currency: NewCurrency) -> Result<Currency>;
}

/// Trait defining the contract for Currency directory operations.
pub trait CurrencyServiceTrait: Send + Sync {
    fn is_valid_code(&self, code: &str) -> bool;
    fn get_by_code(&self, code: &str) -> Result<Option<Currency>>;
    fn get_by_id(&self, id: &str) -> Result<Option<Currency>>;
    fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
    fn get_or_create(&self, code: &str) -> Result<Currency>;
}
