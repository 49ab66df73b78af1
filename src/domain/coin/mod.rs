//! Coin domain — asset types, validation, conversion, display projection.

pub mod client;
mod convert;
pub mod view;
pub mod wire;

use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Coin ────────────────────────────────────────────────────────────────────

/// A fully validated asset listing.
///
/// Built from wire data via `TryFrom<wire::AssetData>`; the conversion rejects
/// payloads missing an identity field or carrying an unparseable numeric.
/// Quantities the API may omit stay `None` here — what an absent value looks
/// like is the view layer's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    pub supply: Option<Decimal>,
    pub market_cap_usd: Option<Decimal>,
    pub price_usd: Decimal,
    pub change_percent_24_hr: Option<f64>,
    /// Icon URL derived from the symbol against the static CDN.
    pub image: String,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CoinValidationError {
    Missing(&'static str),
    Blank(&'static str),
    InvalidDecimal { field: &'static str, value: String },
    InvalidPercent { value: String },
}

impl fmt::Display for CoinValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinValidationError::Missing(field) => write!(f, "Missing {field}"),
            CoinValidationError::Blank(field) => write!(f, "Blank {field}"),
            CoinValidationError::InvalidDecimal { field, value } => {
                write!(f, "Invalid decimal for {field}: {value:?}")
            }
            CoinValidationError::InvalidPercent { value } => {
                write!(f, "Invalid change percent: {value:?}")
            }
        }
    }
}

impl std::error::Error for CoinValidationError {}
