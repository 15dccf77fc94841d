use serde::{Deserialize, Serialize};

/// Domain model representing a currency reference record.
///
/// Currencies are shared by reference from any deal that uses them; a
/// currency's lifetime is independent of any single deal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    /// ISO 4217 alphabetic code, unique across all currencies.
    pub code: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Input model for creating a new currency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub code: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

impl NewCurrency {
    /// Builds a stub currency carrying only the code, as created lazily
    /// during ingestion when an unseen valid code is encountered.
    pub fn from_code(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: None,
            symbol: None,
        }
    }
}
