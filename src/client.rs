//! High-level client — `CoinCapClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::error::SdkError;
use crate::http::CoinCapHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;

/// The primary entry point for the CoinCap SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.price_history()`.
///
/// The client is stateless: nothing fetched is retained between calls, so two
/// consecutive fetches always reflect two backend reads.
#[derive(Clone)]
pub struct CoinCapClient {
    pub(crate) http: CoinCapHttp,
}

impl CoinCapClient {
    pub fn builder() -> CoinCapClientBuilder {
        CoinCapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinCapClientBuilder {
    base_url: String,
    api_key: Option<String>,
}

impl Default for CoinCapClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
        }
    }
}

impl CoinCapClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// API key sent as a Bearer token on every request; raises the rate limit.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn build(self) -> Result<CoinCapClient, SdkError> {
        Ok(CoinCapClient {
            http: CoinCapHttp::new(&self.base_url, self.api_key),
        })
    }
}
