pub mod currencies;
pub mod deals;
pub mod errors;

pub use errors::{Error, Result};

pub use currencies::{Currency, CurrencyRepository, CurrencyService, CurrencyServiceTrait};
pub use deals::{
    Deal, DealImportResult, DealRepository, DealService, DealServiceTrait, DealSubmission,
};
