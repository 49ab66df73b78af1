//! # CoinCap SDK
//!
//! A Rust SDK for the CoinCap REST API: fetch asset listings and price
//! history, validate the untrusted payloads into typed domain models, and
//! derive display-ready projections from them.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, validation, display views
//! 2. **HTTP API** — `CoinCapHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `CoinCapClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coincap_sdk::prelude::*;
//!
//! let client = CoinCapClient::builder().build()?;
//!
//! let coins = client.coins().list().await?;
//! let history = client.price_history().last_day(&coins[0].id).await?;
//!
//! let row = CoinView::from(&coins[0]);
//! let chart = ChartView::of(&history);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, views.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinCapClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AssetId, Interval};

    // Domain types — coin
    pub use crate::domain::coin::client::DEFAULT_ASSETS_LIMIT;
    pub use crate::domain::coin::view::CoinView;
    pub use crate::domain::coin::{Coin, CoinValidationError};

    // Domain types — price history
    pub use crate::domain::price_history::view::{ChartView, Trend};
    pub use crate::domain::price_history::{CoinHistory, HistoryValidationError};

    // Errors
    pub use crate::error::{HttpError, SdkError, ValidationError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{
        CoinCapClient, CoinCapClientBuilder, CoinsClient, PriceHistorySubClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
