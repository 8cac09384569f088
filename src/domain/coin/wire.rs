//! Wire types for coin endpoints.
//!
//! Numeric market fields arrive as JSON numbers and are carried as `f64`
//! here; `convert.rs` lifts them into `Decimal` domain values.

use serde::Deserialize;
use std::collections::HashMap;

/// One row from the paged list, top-50 and trending endpoints.
#[derive(Deserialize, Debug, Clone)]
pub struct CoinResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

/// Response from the coin details endpoint. Market numbers are nested under
/// per-currency maps keyed by currency code (`"usd"`, …).
#[derive(Deserialize, Debug, Clone)]
pub struct CoinDetailsResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: ImageSet,
    pub description: Option<LocalizedText>,
    pub market_data: MarketData,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ImageSet {
    pub large: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LocalizedText {
    pub en: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MarketData {
    pub current_price: HashMap<String, f64>,
    pub market_cap: HashMap<String, f64>,
    pub high_24h: HashMap<String, f64>,
    pub low_24h: HashMap<String, f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub total_supply: Option<f64>,
}

/// Response from the search endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse {
    pub coins: Vec<SearchCoinResponse>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchCoinResponse {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub large: String,
}

/// Response from the market chart endpoint: `[[epoch_ms, price], ...]`.
#[derive(Deserialize, Debug, Clone)]
pub struct MarketChartResponse {
    pub prices: Vec<[f64; 2]>,
}
