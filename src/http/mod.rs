//! HTTP client layer — `CoinCapHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::CoinCapHttp;
pub use retry::{RetryConfig, RetryPolicy};
