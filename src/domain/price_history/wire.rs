//! Wire types for asset price history (REST).

use serde::{Deserialize, Serialize};

/// A single history point from the backend.
///
/// `time` is a JSON number, so a malformed timestamp fails at decode; the
/// string-typed price is the conversion layer's problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryData {
    pub price_usd: Option<String>,
    /// Unix timestamp in milliseconds.
    pub time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circulating_supply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// REST response for an asset's price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetHistoryResponse {
    /// Absent or `null` decodes as `None`; conversion treats it as empty.
    #[serde(default)]
    pub data: Option<Vec<HistoryData>>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
