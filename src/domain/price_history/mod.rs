//! Price history domain — validated series, chart derivation.

pub mod client;
mod convert;
pub mod view;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ─── CoinHistory ─────────────────────────────────────────────────────────────

/// A validated price series for one asset, keyed by timestamp.
///
/// Backed by a `BTreeMap`, so iteration is always time-ascending regardless
/// of the order the backend sent the points, and a duplicate timestamp
/// collapses to the value seen last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinHistory {
    points: BTreeMap<i64, Decimal>,
}

impl CoinHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point; a repeated timestamp overwrites the earlier value.
    pub fn insert(&mut self, time_ms: i64, price: Decimal) {
        self.points.insert(time_ms, price);
    }

    /// Price at the earliest timestamp.
    pub fn oldest(&self) -> Option<Decimal> {
        self.points.values().next().copied()
    }

    /// Price at the latest timestamp.
    pub fn newest(&self) -> Option<Decimal> {
        self.points.values().next_back().copied()
    }

    /// Lowest price in the series.
    pub fn lowest(&self) -> Option<Decimal> {
        self.points.values().min().copied()
    }

    /// Highest price in the series.
    pub fn highest(&self) -> Option<Decimal> {
        self.points.values().max().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time-ascending `(timestamp_ms, price)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (i64, Decimal)> + '_ {
        self.points.iter().map(|(t, p)| (*t, *p))
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum HistoryValidationError {
    MissingPrice { time_ms: i64 },
    InvalidPrice { time_ms: i64, value: String },
}

impl fmt::Display for HistoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryValidationError::MissingPrice { time_ms } => {
                write!(f, "Missing price at {time_ms}")
            }
            HistoryValidationError::InvalidPrice { time_ms, value } => {
                write!(f, "Invalid price at {time_ms}: {value:?}")
            }
        }
    }
}

impl std::error::Error for HistoryValidationError {}
