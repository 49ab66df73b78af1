//! Coins sub-client — asset listings.

use crate::client::CoinCapClient;
use crate::domain::coin::Coin;
use crate::error::SdkError;

/// Assets requested per listing when the caller doesn't say otherwise.
pub const DEFAULT_ASSETS_LIMIT: u32 = 50;

/// Sub-client for asset listing operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> Coins<'a> {
    /// Fetch the top assets, validating each into a [`Coin`].
    ///
    /// Fail-fast: one invalid payload fails the whole batch, so a success
    /// guarantees every returned coin passed validation.
    pub async fn list(&self) -> Result<Vec<Coin>, SdkError> {
        self.list_with_limit(DEFAULT_ASSETS_LIMIT).await
    }

    /// Fetch up to `limit` assets, validating each into a [`Coin`].
    pub async fn list_with_limit(&self, limit: u32) -> Result<Vec<Coin>, SdkError> {
        let resp = self.client.http.get_assets(Some(limit)).await?;
        if resp.data.is_none() {
            tracing::warn!("Assets response carried no data field");
        }
        let coins = resp
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Coin::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(coins)
    }
}
