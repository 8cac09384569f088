//! Wire types for order endpoints.

use super::OrderStatus;
use crate::domain::coin::wire::CoinResponse;
use crate::shared::{serde_util, OrderType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: u64,
    pub order_type: OrderType,
    pub price: f64,
    #[serde(with = "serde_util::timestamp_ms")]
    pub timestamp: DateTime<Utc>,
    pub status: OrderStatus,
    pub order_item: OrderItemResponse,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub quantity: f64,
    pub buy_price: f64,
    pub sell_price: Option<f64>,
    pub coin: CoinResponse,
}

/// Body for the pay-order endpoint.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub coin_id: String,
    pub quantity: f64,
    pub order_type: OrderType,
}
