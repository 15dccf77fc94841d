use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currencies::Currency;

/// Timestamp format accepted for deal submissions and CSV rows.
pub const DEAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Domain model representing a persisted FX deal.
///
/// A deal is immutable once persisted; there are no update or delete
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    /// Externally supplied identifier, unique across all deals.
    pub deal_unique_id: String,
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub deal_timestamp: NaiveDateTime,
    pub deal_amount: Decimal,
}

/// Input model for a single-deal submission, carrying currency codes that
/// are resolved to currency records at save time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSubmission {
    pub deal_unique_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_timestamp: NaiveDateTime,
    pub deal_amount: Decimal,
}

/// Insert model for the deal repository, with both currencies already
/// resolved through the currency directory.
#[derive(Debug, Clone)]
pub struct NewDeal {
    pub deal_unique_id: String,
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub deal_timestamp: NaiveDateTime,
    pub deal_amount: Decimal,
}

/// Aggregate outcome of one batch ingestion run. Fully materialized after
/// the whole input is consumed; error order matches row order.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DealImportResult {
    pub successful_deals: usize,
    pub total_deals: usize,
    pub errors: Vec<String>,
}
