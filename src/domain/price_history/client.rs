//! Price history sub-client — windowed series queries.

use crate::client::CoinCapClient;
use crate::domain::price_history::CoinHistory;
use crate::error::SdkError;
use crate::shared::{AssetId, Interval};
use chrono::Utc;

/// Length of the trailing window used by `last_day`, in milliseconds.
const DAY_MS: i64 = 86_400_000;

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Fetch the trailing 24-hour series at five-minute buckets.
    pub async fn last_day(&self, asset_id: &AssetId) -> Result<CoinHistory, SdkError> {
        let (start_ms, end_ms) = day_window(Utc::now().timestamp_millis());
        self.range(asset_id, Interval::Minute5, start_ms, end_ms)
            .await
    }

    /// Fetch a series for an explicit window (epoch millis, inclusive).
    pub async fn range(
        &self,
        asset_id: &AssetId,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<CoinHistory, SdkError> {
        let resp = self
            .client
            .http
            .get_asset_history(asset_id.as_str(), interval, start_ms, end_ms)
            .await?;
        if resp.data.is_none() {
            tracing::warn!("History response for {} carried no data field", asset_id);
        }
        Ok(CoinHistory::try_from(resp)?)
    }
}

/// The `[now − 24h, now]` window in epoch milliseconds.
fn day_window(now_ms: i64) -> (i64, i64) {
    (now_ms - DAY_MS, now_ms)
}
