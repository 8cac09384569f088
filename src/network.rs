//! Network URL constants for the Tradex SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.tradex.app";
