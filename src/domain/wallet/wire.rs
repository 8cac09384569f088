//! Wire types for wallet endpoints.

use super::WalletTransactionType;
use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct WalletResponse {
    pub id: u64,
    pub balance: f64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: u64,
    pub wallet_transaction_type: WalletTransactionType,
    #[serde(with = "serde_util::timestamp_ms")]
    pub date: DateTime<Utc>,
    pub purpose: Option<String>,
    pub amount: f64,
}

/// Response from creating a top-up payment order.
#[derive(Deserialize, Debug, Clone)]
pub struct PaymentOrderResponse {
    pub payment_url: String,
    pub order_id: Option<u64>,
}

/// Body for wallet-to-wallet transfers.
#[derive(Serialize, Debug, Clone)]
pub struct TransferRequest {
    pub amount: f64,
    pub purpose: Option<String>,
}
