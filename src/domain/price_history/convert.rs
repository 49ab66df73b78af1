//! Conversion: AssetHistoryResponse → CoinHistory (TryFrom + validation).

use super::wire;
use super::{CoinHistory, HistoryValidationError};
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<wire::AssetHistoryResponse> for CoinHistory {
    type Error = HistoryValidationError;

    fn try_from(source: wire::AssetHistoryResponse) -> Result<Self, Self::Error> {
        let mut history = CoinHistory::new();

        for point in source.data.unwrap_or_default() {
            let raw = point
                .price_usd
                .ok_or(HistoryValidationError::MissingPrice { time_ms: point.time })?;
            let price =
                Decimal::from_str(&raw).map_err(|_| HistoryValidationError::InvalidPrice {
                    time_ms: point.time,
                    value: raw,
                })?;
            history.insert(point.time, price);
        }

        Ok(history)
    }
}
