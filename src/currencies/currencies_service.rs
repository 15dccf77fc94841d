use log::{debug, warn};
use std::sync::Arc;

use super::currencies_constants::iso_4217_codes;
use super::currencies_errors::Result;
use super::currencies_model::{Currency, NewCurrency};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};

/// Service for the currency directory: code validation, lookup and lazy
/// creation of currency reference records.
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl CurrencyService {
    /// Creates a new CurrencyService instance with the injected repository
    pub fn new(repository: Arc<dyn CurrencyRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl CurrencyServiceTrait for CurrencyService {
    /// Returns true iff the code is a recognized ISO 4217 alphabetic code.
    /// Matching is case-sensitive; codes are upper-case by convention.
    fn is_valid_code(&self, code: &str) -> bool {
        if code.is_empty() {
            warn!("Currency code is missing");
            return false;
        }
        if !iso_4217_codes().contains(code) {
            warn!("Currency code {} is invalid", code);
            return false;
        }
        true
    }

    /// Exact-match lookup against stored currencies
    fn get_by_code(&self, code: &str) -> Result<Option<Currency>> {
        self.repository.find_by_code(code)
    }

    /// Lookup by surrogate id
    fn get_by_id(&self, id: &str) -> Result<Option<Currency>> {
        self.repository.find_by_id(id)
    }

    /// Persists a new currency record and assigns an identity
    fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        let currency = self.repository.create(new_currency)?;
        debug!("Currency saved: {}", currency.code);
        Ok(currency)
    }

    /// Looks up a currency by code, creating a stub record with only the
    /// code populated when none exists. Existing currency metadata is never
    /// updated through this path.
    fn get_or_create(&self, code: &str) -> Result<Currency> {
        match self.repository.find_by_code(code)? {
            Some(existing) => Ok(existing),
            None => self.create_currency(NewCurrency::from_code(code)),
        }
    }
}
