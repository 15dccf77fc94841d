use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::currencies_errors::{CurrencyError, Result};
use super::currencies_model::{Currency, NewCurrency};
use super::currencies_traits::CurrencyRepositoryTrait;

/// In-memory currency repository keyed by ISO code.
///
/// Code uniqueness is enforced inside the write path, so creation of an
/// already-stored code fails at the storage layer.
#[derive(Default)]
pub struct CurrencyRepository {
    currencies: DashMap<String, Currency>,
}

impl CurrencyRepository {
    pub fn new() -> Self {
        Self {
            currencies: DashMap::new(),
        }
    }
}

impl CurrencyRepositoryTrait for CurrencyRepository {
    fn find_by_code(&self, code: &str) -> Result<Option<Currency>> {
        Ok(self.currencies.get(code).map(|entry| entry.value().clone()))
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Currency>> {
        Ok(self
            .currencies
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone()))
    }

    fn create(&self, new_currency: NewCurrency) -> Result<Currency> {
        match self.currencies.entry(new_currency.code.clone()) {
            Entry::Occupied(_) => Err(CurrencyError::AlreadyExists(new_currency.code)),
            Entry::Vacant(slot) => {
                let currency = Currency {
                    id: Uuid::new_v4().to_string(),
                    code: new_currency.code,
                    name: new_currency.name,
                    symbol: new_currency.symbol,
                };
                slot.insert(currency.clone());
                Ok(currency)
            }
        }
    }
}
