//! High-level client — `LlamaClient` with the six convenience operations.
//!
//! Each operation is a thin wrapper: pick a default where the argument is
//! optional, then delegate to the matching `LlamaHttp` endpoint method.
//! This module keeps the builder and the public compatibility surface.

use crate::error::SdkError;
use crate::http::{LlamaHttp, RateLimit};
use crate::network::DEFAULT_PROTOCOL;

use serde_json::Value;

/// The primary entry point for the DefiLlama SDK.
///
/// Stateless apart from its fixed configuration: clones share the underlying
/// connection pool and each call pauses independently for the configured
/// rate limit.
#[derive(Clone)]
pub struct LlamaClient {
    pub(crate) http: LlamaHttp,
}

impl LlamaClient {
    pub fn builder() -> LlamaClientBuilder {
        LlamaClientBuilder::default()
    }

    /// A client against the production DefiLlama endpoints with the default
    /// 2-second rate limit.
    pub fn new() -> Self {
        Self::builder().build()
    }

    // ── Convenience operations ───────────────────────────────────────────

    /// Overview of all DEXs — `GET /overview/dexs`.
    pub async fn get_dex_overview(&self) -> Result<Value, SdkError> {
        self.http.dex_overview().await
    }

    /// Detailed data for a protocol — `GET /protocol/{protocol}`.
    ///
    /// Defaults to `"uniswap"` when `protocol` is `None`.
    pub async fn get_protocol_data(&self, protocol: Option<&str>) -> Result<Value, SdkError> {
        self.http
            .protocol(protocol.unwrap_or(DEFAULT_PROTOCOL))
            .await
    }

    /// DEX data for one chain — `GET /overview/dexs/{chain}`.
    pub async fn get_chain_dexs(&self, chain: &str) -> Result<Value, SdkError> {
        self.http.chain_dexs(chain).await
    }

    /// Current prices for `chain:address` tokens — `GET /prices/current/{tokens}`
    /// against the coins base URL.
    pub async fn get_token_prices(&self, tokens: &[&str]) -> Result<Value, SdkError> {
        self.http.current_prices(tokens).await
    }

    /// TVL data for a protocol — `GET /tvl/{protocol}`.
    ///
    /// Defaults to `"uniswap"` when `protocol` is `None`.
    pub async fn get_protocol_tvl(&self, protocol: Option<&str>) -> Result<Value, SdkError> {
        self.http
            .protocol_tvl(protocol.unwrap_or(DEFAULT_PROTOCOL))
            .await
    }

    /// Volume breakdown for a DEX — `GET /summary/dexs/{protocol}`.
    ///
    /// Defaults to `"uniswap"` when `protocol` is `None`.
    pub async fn get_dex_volume_breakdown(
        &self,
        protocol: Option<&str>,
    ) -> Result<Value, SdkError> {
        self.http
            .dex_summary(protocol.unwrap_or(DEFAULT_PROTOCOL))
            .await
    }
}

impl Default for LlamaClient {
    fn default() -> Self {
        Self::new()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LlamaClientBuilder {
    base_url: String,
    coins_url: String,
    rate_limit: RateLimit,
}

impl Default for LlamaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            coins_url: crate::network::DEFAULT_COINS_URL.to_string(),
            rate_limit: RateLimit::default(),
        }
    }
}

impl LlamaClientBuilder {
    /// Base URL for the general analytics API.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Base URL for the coins (price quote) API.
    pub fn coins_url(mut self, url: &str) -> Self {
        self.coins_url = url.to_string();
        self
    }

    /// Post-request pause strategy. Tests typically pass [`RateLimit::None`].
    pub fn rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    pub fn build(self) -> LlamaClient {
        LlamaClient {
            http: LlamaHttp::new(&self.base_url, &self.coins_url, self.rate_limit),
        }
    }
}
