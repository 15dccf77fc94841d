// Module declarations
pub(crate) mod deals_errors;
pub(crate) mod deals_model;
pub(crate) mod deals_repository;
pub(crate) mod deals_service;
pub(crate) mod deals_traits;


// Re-export the public interface
pub use deals_errors::{DealError, Result};
pub use deals_model::{
    Deal, DealImportResult, DealSubmission, NewDeal, DEAL_TIMESTAMP_FORMAT,
};
pub use deals_repository::DealRepository;
pub use deals_service::DealService;
pub use deals_traits::{DealRepositoryTrait, DealServiceTrait};
