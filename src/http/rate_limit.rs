//! Rate-limit policy for HTTP requests.
//!
//! The DefiLlama API is throttled with a fixed pause after every request —
//! success or failure — rather than a token bucket or sliding window. The
//! policy is injectable so tests can substitute [`RateLimit::None`] instead
//! of waiting out real wall-clock delays.

use std::time::Duration;

/// Delay applied after each request when no policy is given.
pub const DEFAULT_RATE_LIMIT_DELAY: Duration = Duration::from_secs(2);

/// Post-request pause strategy.
///
/// The pause is per client instance: clones share one `LlamaHttp` and pause
/// independently per call, so concurrent callers can exceed the intended
/// aggregate rate. There is no cross-instance coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimit {
    /// No pause between requests — for tests, or callers running their own
    /// limiter in front of the client.
    None,
    /// Fixed pause after every request, applied on failure as well so the
    /// call rate stays bounded regardless of outcome.
    Fixed(Duration),
}

impl Default for RateLimit {
    fn default() -> Self {
        RateLimit::Fixed(DEFAULT_RATE_LIMIT_DELAY)
    }
}

impl RateLimit {
    /// The configured delay, if any.
    pub fn delay(&self) -> Option<Duration> {
        match self {
            RateLimit::None => None,
            RateLimit::Fixed(d) => Some(*d),
        }
    }

    /// Await the configured pause. A no-op for [`RateLimit::None`].
    pub(crate) async fn pause(&self) {
        if let RateLimit::Fixed(d) = self {
            futures_timer::Delay::new(*d).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_default_is_two_seconds() {
        let limit = RateLimit::default();
        assert_eq!(limit.delay(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_rate_limit_none_has_no_delay() {
        assert_eq!(RateLimit::None.delay(), None);
    }

    #[test]
    fn test_rate_limit_fixed_reports_delay() {
        let limit = RateLimit::Fixed(Duration::from_millis(250));
        assert_eq!(limit.delay(), Some(Duration::from_millis(250)));
    }
}
