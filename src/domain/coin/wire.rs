//! Wire types for asset responses (REST).

use serde::{Deserialize, Serialize};

/// Raw asset from the REST API.
///
/// Every field is declared optional: the API contract is not trusted, and
/// payload validation is the conversion layer's job, not the decoder's.
/// All numerics arrive as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetData {
    pub id: Option<String>,
    pub rank: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub supply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supply: Option<String>,
    pub market_cap_usd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_usd_24_hr: Option<String>,
    pub price_usd: Option<String>,
    pub change_percent_24_hr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vwap_24_hr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer: Option<String>,
}

/// REST response for the assets listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsResponse {
    /// Absent or `null` decodes as `None`; the sub-client treats it as empty.
    #[serde(default)]
    pub data: Option<Vec<AssetData>>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
