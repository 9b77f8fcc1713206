//! # DefiLlama SDK
//!
//! A minimal async Rust client for the DefiLlama analytics API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Network** — Base URL constants for the two backends
//! 2. **HTTP** — `LlamaHttp` with one method per endpoint and a fixed
//!    post-request rate limit
//! 3. **High-Level Client** — `LlamaClient` with the six convenience
//!    operations
//!
//! Responses are passed through as raw `serde_json::Value`; no schema is
//! enforced. Every failure collapses into [`error::SdkError::RequestFailed`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use defillama_sdk::prelude::*;
//!
//! let client = LlamaClient::new();
//!
//! let overview = client.get_dex_overview().await?;
//! let tvl = client.get_protocol_tvl(Some("aave")).await?;
//! let prices = client
//!     .get_token_prices(&["ethereum:0xA0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"])
//!     .await?;
//! ```

/// Unified SDK error type.
pub mod error;

/// Network URL constants.
pub mod network;

/// HTTP client with post-request rate limiting.
pub mod http;

/// `LlamaClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_COINS_URL, DEFAULT_PROTOCOL};

    // HTTP client + rate limit policy
    pub use crate::client::{LlamaClient, LlamaClientBuilder};
    pub use crate::http::{LlamaHttp, RateLimit};
}
