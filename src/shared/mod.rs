//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;
pub mod serde_util;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for coin identifiers (e.g. `"bitcoin"`, `"ethereum"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

/// Order direction: Buy or Sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderType::Buy => write!(f, "Buy"),
            OrderType::Sell => write!(f, "Sell"),
        }
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Convert a wire `f64` (the backend serializes `BigDecimal` as a JSON
/// number) into a `Decimal` for domain types.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, String> {
    Decimal::try_from(value).map_err(|e| format!("invalid decimal {}: {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde() {
        let id = CoinId::from("bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bitcoin\"");
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_order_type_serde() {
        let buy: OrderType = serde_json::from_str("\"BUY\"").unwrap();
        assert_eq!(buy, OrderType::Buy);
        let sell: OrderType = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(sell, OrderType::Sell);
        assert_eq!(serde_json::to_string(&buy).unwrap(), "\"BUY\"");
    }

    #[test]
    fn test_decimal_from_f64() {
        let d = decimal_from_f64(1234.56).unwrap();
        assert_eq!(d.to_string(), "1234.56");
        assert!(decimal_from_f64(f64::NAN).is_err());
    }
}
