use std::io::Read;

use super::deals_errors::Result;
use super::deals_model::{Deal, DealImportResult, DealSubmission, NewDeal};

/// Trait defining the contract for Deal repository operations.
///
/// This is the deal half of the record store collaborator. Implementations
/// must enforce uniqueness of `deal_unique_id` at the storage layer; the
/// service-level existence check is an early exit only.
pub trait DealRepositoryTrait: Send + Sync {
    fn find_by_unique_id(&self, deal_unique_id: &str) -> Result<Option<Deal>>;
    fn create(&self, new_deal: NewDeal) -> Result<Deal>;
}

/// Trait defining the contract for Deal service operations.
pub trait DealServiceTrait: Send + Sync {
    fn validate_deal(&self, submission: &DealSubmission) -> Result<()>;
    fn deal_exists(&self, deal_unique_id: &str) -> Result<bool>;
    fn save_deal(&self, new_deal: NewDeal) -> Result<Deal>;
    fn submit_deal(&self, submission: DealSubmission) -> Result<Deal>;
    fn import_deals_from_csv(&self, reader: &mut dyn Read) -> DealImportResult;
}
