//! Orders: buy/sell execution records.

pub mod wire;

#[cfg(feature = "http")]
pub mod client;

use super::coin::{Coin, CoinValidationError};
use crate::shared::{decimal_from_f64, OrderType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Execution state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Filled,
    Cancelled,
    PartiallyFilled,
    Error,
    Success,
}

/// One executed (or pending) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub order_type: OrderType,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub status: OrderStatus,
    pub item: OrderItem,
}

/// The traded position inside an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub sell_price: Option<Decimal>,
    pub coin: Coin,
}

#[derive(Debug, Error)]
pub enum OrderValidationError {
    #[error("order {0}: invalid numeric field {1}: {2}")]
    InvalidNumber(u64, &'static str, String),

    #[error("order {0}: {1}")]
    Coin(u64, CoinValidationError),
}

impl TryFrom<wire::OrderResponse> for Order {
    type Error = OrderValidationError;

    fn try_from(source: wire::OrderResponse) -> Result<Self, Self::Error> {
        let id = source.id;
        let number = |name, v| {
            decimal_from_f64(v).map_err(|e| OrderValidationError::InvalidNumber(id, name, e))
        };
        Ok(Order {
            id,
            order_type: source.order_type,
            price: number("price", source.price)?,
            timestamp: source.timestamp,
            status: source.status,
            item: OrderItem {
                quantity: number("quantity", source.order_item.quantity)?,
                buy_price: number("buy_price", source.order_item.buy_price)?,
                sell_price: match source.order_item.sell_price {
                    Some(v) => Some(number("sell_price", v)?),
                    None => None,
                },
                coin: Coin::try_from(source.order_item.coin)
                    .map_err(|e| OrderValidationError::Coin(id, e))?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_conversion() {
        let json = r#"{
            "id": 21,
            "orderType": "BUY",
            "price": 650.0,
            "timestamp": 1700000000000,
            "status": "SUCCESS",
            "orderItem": {
                "quantity": 0.01,
                "buyPrice": 65000.0,
                "sellPrice": null,
                "coin": {
                    "id": "bitcoin",
                    "symbol": "btc",
                    "name": "Bitcoin",
                    "image": "https://img.example/btc.png",
                    "current_price": 65000.0,
                    "market_cap": 1280000000000.0,
                    "market_cap_rank": 1,
                    "total_volume": 31000000000.0,
                    "high_24h": 66000.0,
                    "low_24h": 64000.0,
                    "price_change_24h": 100.0,
                    "price_change_percentage_24h": 0.15
                }
            }
        }"#;
        let wire: wire::OrderResponse = serde_json::from_str(json).unwrap();
        let order = Order::try_from(wire).unwrap();
        assert_eq!(order.order_type, OrderType::Buy);
        assert_eq!(order.status, OrderStatus::Success);
        assert_eq!(order.item.quantity.to_string(), "0.01");
        assert!(order.item.sell_price.is_none());
        assert_eq!(order.timestamp.timestamp(), 1_700_000_000);
    }
}
