//! Wire types for watchlist endpoints.

use crate::domain::coin::wire::CoinResponse;
use serde::Deserialize;

/// Response from every watchlist endpoint (fetch, add, remove).
#[derive(Deserialize, Debug, Clone)]
pub struct WatchlistResponse {
    pub id: u64,
    #[serde(default)]
    pub coins: Vec<CoinResponse>,
}
