//! Low-level HTTP client — `LlamaHttp`.
//!
//! One method per API endpoint. Every method formats `base + endpoint` and
//! delegates to one internal GET helper; responses are passed through as raw
//! `serde_json::Value`. Internal to the SDK — `LlamaClient` wraps this.

use crate::error::SdkError;
use crate::http::rate_limit::RateLimit;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing;

/// Low-level HTTP client for the DefiLlama REST API.
///
/// Holds the two base URLs (general analytics and coins/price quotes), a
/// shared connection pool, and the post-request rate limit.
#[derive(Clone)]
pub struct LlamaHttp {
    base_url: String,
    coins_url: String,
    client: Client,
    rate_limit: RateLimit,
}

impl LlamaHttp {
    pub fn new(base_url: &str, coins_url: &str, rate_limit: RateLimit) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            coins_url: coins_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            rate_limit,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn coins_url(&self) -> &str {
        &self.coins_url
    }

    // ── DEXs ─────────────────────────────────────────────────────────────

    pub async fn dex_overview(&self) -> Result<Value, SdkError> {
        let url = format!("{}/overview/dexs", self.base_url);
        self.get_json(&url).await
    }

    pub async fn chain_dexs(&self, chain: &str) -> Result<Value, SdkError> {
        let url = format!("{}/overview/dexs/{}", self.base_url, chain);
        self.get_json(&url).await
    }

    pub async fn dex_summary(&self, protocol: &str) -> Result<Value, SdkError> {
        let url = format!("{}/summary/dexs/{}", self.base_url, protocol);
        self.get_json(&url).await
    }

    // ── Protocols ────────────────────────────────────────────────────────

    pub async fn protocol(&self, protocol: &str) -> Result<Value, SdkError> {
        let url = format!("{}/protocol/{}", self.base_url, protocol);
        self.get_json(&url).await
    }

    pub async fn protocol_tvl(&self, protocol: &str) -> Result<Value, SdkError> {
        let url = format!("{}/tvl/{}", self.base_url, protocol);
        self.get_json(&url).await
    }

    // ── Prices ───────────────────────────────────────────────────────────

    /// Current prices for `chain:address` tokens, against the coins API.
    ///
    /// Tokens are joined with `,` and substituted into the path verbatim —
    /// no percent-encoding. Tokens containing reserved characters will
    /// corrupt the URL; callers must supply well-formed `chain:address`
    /// strings.
    pub async fn current_prices(&self, tokens: &[&str]) -> Result<Value, SdkError> {
        let url = format!("{}/prices/current/{}", self.coins_url, tokens.join(","));
        self.get_json(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// One GET attempt followed by the rate-limit pause.
    ///
    /// The pause applies on failure as well: the call rate stays bounded
    /// regardless of outcome.
    async fn get_json(&self, url: &str) -> Result<Value, SdkError> {
        let result = self.fetch_json(url).await;
        self.rate_limit.pause().await;
        result
    }

    /// Exactly one attempt: send, check status, parse the body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value, SdkError> {
        tracing::debug!(url, "GET");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SdkError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SdkError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(SdkError::RequestFailed(format!(
                "{} for {}: {}",
                status, url, body
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            SdkError::RequestFailed(format!("invalid JSON from {}: {}", url, e))
        })
    }
}
