//! HTTP client layer — `LlamaHttp` with a fixed post-request rate limit.

pub mod client;
pub mod rate_limit;

pub use client::LlamaHttp;
pub use rate_limit::RateLimit;
