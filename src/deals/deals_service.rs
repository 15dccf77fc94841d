use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, error, warn};
use rust_decimal::Decimal;
use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;

use super::deals_errors::{DealError, Result};
use super::deals_model::{
    Deal, DealImportResult, DealSubmission, NewDeal, DEAL_TIMESTAMP_FORMAT,
};
use super::deals_traits::{DealRepositoryTrait, DealServiceTrait};
use crate::currencies::CurrencyServiceTrait;

/// Minimum number of fields a CSV row must carry:
/// uniqueId, fromCode, toCode, timestamp, amount. Extra fields are ignored.
const MIN_ROW_FIELDS: usize = 5;

/// Service for managing FX deals: validation, duplicate-checked persistence
/// and batch CSV ingestion.
pub struct DealService {
    deal_repository: Arc<dyn DealRepositoryTrait>,
    currency_service: Arc<dyn CurrencyServiceTrait>,
}

impl DealService {
    /// Creates a new DealService instance with injected dependencies
    pub fn new(
        deal_repository: Arc<dyn DealRepositoryTrait>,
        currency_service: Arc<dyn CurrencyServiceTrait>,
    ) -> Self {
        Self {
            deal_repository,
            currency_service,
        }
    }

    fn validate_currency_code(&self, code: &str) -> Result<()> {
        if !self.currency_service.is_valid_code(code) {
            return Err(DealError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(())
    }

    /// Validates and parses a single CSV row into a repository insert model,
    /// resolving both currencies through the currency directory.
    ///
    /// Field order mirrors the wire format: currencies are resolved before
    /// the timestamp and amount are parsed, so a row rejected on a later
    /// field may already have created its currencies.
    fn parse_csv_row(&self, record: &StringRecord) -> Result<NewDeal> {
        if record.len() < MIN_ROW_FIELDS {
            warn!("Invalid CSV row: incorrect number of fields");
            return Err(DealError::MalformedRow(
                "incorrect number of fields".to_string(),
            ));
        }

        let deal_unique_id = record.get(0).unwrap_or_default();
        if deal_unique_id.is_empty() {
            warn!("Invalid CSV row: deal unique ID is missing");
            return Err(DealError::ValidationFailed(
                "deal unique ID is missing".to_string(),
            ));
        }

        let from_code = record.get(1).unwrap_or_default();
        self.validate_currency_code(from_code)?;
        let from_currency = self.currency_service.get_or_create(from_code)?;

        let to_code = record.get(2).unwrap_or_default();
        self.validate_currency_code(to_code)?;
        let to_currency = self.currency_service.get_or_create(to_code)?;

        if from_code == to_code {
            warn!("Invalid CSV row: 'from' currency and 'to' currency cannot be the same");
            return Err(DealError::SameCurrencyPair(from_code.to_string()));
        }

        let raw_timestamp = record.get(3).unwrap_or_default();
        let deal_timestamp = NaiveDateTime::parse_from_str(raw_timestamp, DEAL_TIMESTAMP_FORMAT)
            .map_err(|_| {
                warn!("Invalid CSV row: timestamp is invalid");
                DealError::InvalidTimestamp(raw_timestamp.to_string())
            })?;

        let raw_amount = record.get(4).unwrap_or_default();
        let deal_amount = Decimal::from_str(raw_amount).map_err(|_| {
            warn!("Invalid CSV row: deal amount is not a valid number");
            DealError::InvalidAmount(raw_amount.to_string())
        })?;
        if deal_amount <= Decimal::ZERO {
            warn!("Invalid CSV row: deal amount must be positive");
            return Err(DealError::InvalidAmount(raw_amount.to_string()));
        }

        Ok(NewDeal {
            deal_unique_id: deal_unique_id.to_string(),
            from_currency,
            to_currency,
            deal_timestamp,
            deal_amount,
        })
    }
}

impl DealServiceTrait for DealService {
    /// Checks a submission against the business rules, short-circuiting on
    /// the first failure with the matching error kind.
    fn validate_deal(&self, submission: &DealSubmission) -> Result<()> {
        if submission.deal_unique_id.is_empty() {
            error!("Deal validation failed: unique ID is missing");
            return Err(DealError::ValidationFailed(
                "deal unique ID is missing".to_string(),
            ));
        }
        if !self.currency_service.is_valid_code(&submission.from_currency) {
            error!("Deal validation failed: invalid from currency code");
            return Err(DealError::InvalidCurrencyCode(
                submission.from_currency.clone(),
            ));
        }
        if !self.currency_service.is_valid_code(&submission.to_currency) {
            error!("Deal validation failed: invalid to currency code");
            return Err(DealError::InvalidCurrencyCode(
                submission.to_currency.clone(),
            ));
        }
        if submission.from_currency == submission.to_currency {
            warn!("Deal validation failed: 'from' currency and 'to' currency cannot be the same");
            return Err(DealError::SameCurrencyPair(
                submission.from_currency.clone(),
            ));
        }
        if submission.deal_amount <= Decimal::ZERO {
            error!("Deal validation failed: amount is missing or not positive");
            return Err(DealError::InvalidAmount(
                submission.deal_amount.to_string(),
            ));
        }
        Ok(())
    }

    /// Checks whether a deal with the given unique ID is already stored
    fn deal_exists(&self, deal_unique_id: &str) -> Result<bool> {
        Ok(self
            .deal_repository
            .find_by_unique_id(deal_unique_id)?
            .is_some())
    }

    /// Persists a deal unless its unique ID is already taken.
    ///
    /// The existence check is an early exit only; the repository enforces
    /// uniqueness of the identifier at the storage layer, which is the
    /// authoritative guard under concurrent submissions of the same ID.
    fn save_deal(&self, new_deal: NewDeal) -> Result<Deal> {
        if self.deal_exists(&new_deal.deal_unique_id)? {
            warn!(
                "Deal with the same unique ID already exists: {}",
                new_deal.deal_unique_id
            );
            return Err(DealError::DuplicateDeal(new_deal.deal_unique_id));
        }
        self.deal_repository.create(new_deal)
    }

    /// Validates a single submission, resolves its currencies and persists
    /// it through the duplicate-checked save path.
    fn submit_deal(&self, submission: DealSubmission) -> Result<Deal> {
        self.validate_deal(&submission).map_err(|err| {
            warn!(
                "Deal validation failed for unique ID: {}",
                submission.deal_unique_id
            );
            match err {
                DealError::ValidationFailed(reason) => DealError::ValidationFailed(reason),
                other => DealError::ValidationFailed(other.to_string()),
            }
        })?;

        let from_currency = self.currency_service.get_or_create(&submission.from_currency)?;
        let to_currency = self.currency_service.get_or_create(&submission.to_currency)?;

        self.save_deal(NewDeal {
            deal_unique_id: submission.deal_unique_id,
            from_currency,
            to_currency,
            deal_timestamp: submission.deal_timestamp,
            deal_amount: submission.deal_amount,
        })
    }

    /// Ingests comma-delimited deal rows from the reader, one save attempt
    /// per row, and returns the aggregate outcome report.
    ///
    /// Every per-row failure becomes one report entry and processing
    /// continues; a failure reading the stream itself is reported as a
    /// single generic entry instead of propagating.
    fn import_deals_from_csv(&self, reader: &mut dyn Read) -> DealImportResult {
        let mut total_deals = 0;
        let mut successful_deals = 0;
        let mut errors: Vec<String> = Vec::new();

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        for record in csv_reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    error!("Error processing CSV file for deals: {}", err);
                    errors.push(format!("General error processing CSV file: {}", err));
                    break;
                }
            };

            total_deals += 1;
            let row_id = match record.get(0) {
                Some(field) if !field.is_empty() => field.to_string(),
                _ => "<unknown>".to_string(),
            };

            match self.parse_csv_row(&record) {
                Ok(new_deal) => match self.save_deal(new_deal) {
                    Ok(_) => successful_deals += 1,
                    Err(err) => {
                        error!("Error saving deal {}: {}", row_id, err);
                        errors.push(format!(
                            "Failed to save deal with ID {}: {}",
                            row_id, err
                        ));
                    }
                },
                Err(err) => {
                    warn!("Invalid deal with unique ID {}: {}", row_id, err);
                    errors.push(format!("Invalid deal with unique ID {}: {}", row_id, err));
                }
            }
        }

        debug!(
            "Finished processing CSV file: {} out of {} deals saved successfully",
            successful_deals, total_deals
        );

        DealImportResult {
            successful_deals,
            total_deals,
            errors,
        }
    }
}
