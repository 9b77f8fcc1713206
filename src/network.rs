//! Network URL constants for the DefiLlama SDK.

/// Default base URL for the general analytics API.
pub const DEFAULT_API_URL: &str = "https://api.llama.fi";

/// Default base URL for the coins (price quote) API.
pub const DEFAULT_COINS_URL: &str = "https://coins.llama.fi";

/// Protocol slug used when an operation's `protocol` argument is omitted.
pub const DEFAULT_PROTOCOL: &str = "uniswap";
