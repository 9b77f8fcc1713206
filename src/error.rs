//! Unified SDK error type.

use thiserror::Error;

/// Top-level SDK error.
///
/// Every failure mode on the request path — DNS or connect failure, timeout,
/// non-2xx status, body that fails to parse as JSON — collapses into the one
/// `RequestFailed` variant. Callers get a descriptive string, not a category:
/// the API contract deliberately does not distinguish a timeout from a 404
/// from a malformed body.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API request failed: {0}")]
    RequestFailed(String),
}
