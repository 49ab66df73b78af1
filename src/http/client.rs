//! Low-level HTTP client — `CoinCapHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the client-layer boundary). Internal to the SDK — the high-level
//! client wraps this.

use crate::domain::coin::wire::AssetsResponse;
use crate::domain::price_history::wire::AssetHistoryResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::Interval;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing;

/// Low-level HTTP client for the CoinCap REST API.
///
/// All endpoints are read-only GETs. An optional API key is sent as a Bearer
/// token; keyless requests work but get a lower rate limit.
#[derive(Clone)]
pub struct CoinCapHttp {
    base_url: String,
    client: Client,
    api_key: Option<String>,
}

impl CoinCapHttp {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            api_key,
        }
    }

    // ── Assets ───────────────────────────────────────────────────────────

    pub async fn get_assets(&self, limit: Option<u32>) -> Result<AssetsResponse, HttpError> {
        let mut url = format!("{}/assets", self.base_url);
        if let Some(l) = limit {
            url = format!("{}?limit={}", url, l);
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Price History ────────────────────────────────────────────────────

    pub async fn get_asset_history(
        &self,
        asset_id: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<AssetHistoryResponse, HttpError> {
        let url = format!(
            "{}/assets/{}/history?interval={}&start={}&end={}",
            self.base_url,
            urlencoding::encode(asset_id),
            interval.as_str(),
            start_ms,
            end_ms
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(url, retry).await
    }

    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                let delay = Duration::from_millis(*ms);
                                futures_timer::Delay::new(delay).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self.client.get(url);

        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
