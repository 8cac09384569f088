//! Coin market data: listings, details, chart series, search.

pub mod convert;
pub mod wire;

#[cfg(feature = "http")]
pub mod client;

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Market summary for one coin — list rows, watchlist rows, portfolio rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: Decimal,
    pub market_cap: Decimal,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Decimal,
    pub high_24h: Decimal,
    pub low_24h: Decimal,
    pub price_change_24h: Decimal,
    /// 24h change as a percentage; kept as `f64` for display only.
    pub price_change_percentage_24h: f64,
}

/// Full detail view for one coin.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinDetails {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub description: Option<String>,
    pub current_price: Decimal,
    pub market_cap: Decimal,
    pub high_24h: Decimal,
    pub low_24h: Decimal,
    pub price_change_24h: Decimal,
    pub price_change_percentage_24h: f64,
    pub total_supply: Option<Decimal>,
}

/// Lightweight search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinSummary {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub image: String,
}

/// Chart series for one coin over an interval of days.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketChart {
    pub coin_id: CoinId,
    pub interval_days: u32,
    pub points: Vec<ChartPoint>,
}

/// One chart sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub time: DateTime<Utc>,
    pub price: f64,
}

/// Validation failures when lifting wire coin data into domain types.
#[derive(Debug, Error)]
pub enum CoinValidationError {
    #[error("coin {0}: invalid numeric field {1}: {2}")]
    InvalidNumber(CoinId, &'static str, String),

    #[error("coin {0}: missing USD market data")]
    MissingUsdQuote(CoinId),

    #[error("invalid chart timestamp: {0}")]
    InvalidTimestamp(f64),
}
