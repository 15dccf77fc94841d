use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::deals_errors::{DealError, Result};
use super::deals_model::{Deal, NewDeal};
use super::deals_traits::DealRepositoryTrait;

/// In-memory deal repository keyed by the externally supplied unique id.
///
/// Uniqueness of the deal identifier is enforced inside the write path, so
/// a concurrent duplicate submission fails here even when it slipped past
/// the service-level existence check.
#[derive(Default)]
pub struct DealRepository {
    deals: DashMap<String, Deal>,
}

impl DealRepository {
    pub fn new() -> Self {
        Self {
            deals: DashMap::new(),
        }
    }
}

impl DealRepositoryTrait for DealRepository {
    fn find_by_unique_id(&self, deal_unique_id: &str) -> Result<Option<Deal>> {
        Ok(self
            .deals
            .get(deal_unique_id)
            .map(|entry| entry.value().clone()))
    }

    fn create(&self, new_deal: NewDeal) -> Result<Deal> {
        match self.deals.entry(new_deal.deal_unique_id.clone()) {
            Entry::Occupied(_) => Err(DealError::DuplicateDeal(new_deal.deal_unique_id)),
            Entry::Vacant(slot) => {
                let deal = Deal {
                    id: Uuid::new_v4().to_string(),
                    deal_unique_id: new_deal.deal_unique_id,
                    from_currency: new_deal.from_currency,
                    to_currency: new_deal.to_currency,
                    deal_timestamp: new_deal.deal_timestamp,
                    deal_amount: new_deal.deal_amount,
                };
                slot.insert(deal.clone());
                Ok(deal)
            }
        }
    }
}
