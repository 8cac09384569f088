//! Wallet: balance, deposits, transfers, transaction history, top-up orders.

pub mod wire;

#[cfg(feature = "http")]
pub mod client;

use crate::shared::decimal_from_f64;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user's fiat wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    pub id: u64,
    pub balance: Decimal,
}

/// One wallet ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub id: u64,
    pub transaction_type: WalletTransactionType,
    pub date: DateTime<Utc>,
    pub purpose: Option<String>,
    pub amount: Decimal,
}

/// Ledger entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletTransactionType {
    Withdrawal,
    WalletTransfer,
    AddMoney,
    BuyAsset,
    SellAsset,
}

/// Payment gateway for top-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Razorpay,
    Stripe,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Razorpay => "RAZORPAY",
            Self::Stripe => "STRIPE",
        }
    }
}

/// Redirect target for a created top-up payment order. Not stored in any
/// slice — the caller navigates to `url` and the deposit is completed on
/// return via the order id.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLink {
    pub url: String,
    pub order_id: Option<u64>,
}

/// Validation failures when lifting wallet wire data.
#[derive(Debug, Error)]
pub enum WalletValidationError {
    #[error("wallet: invalid amount {0}: {1}")]
    InvalidAmount(f64, String),
}

fn amount(value: f64) -> Result<Decimal, WalletValidationError> {
    decimal_from_f64(value).map_err(|e| WalletValidationError::InvalidAmount(value, e))
}

impl TryFrom<wire::WalletResponse> for Wallet {
    type Error = WalletValidationError;

    fn try_from(source: wire::WalletResponse) -> Result<Self, Self::Error> {
        Ok(Wallet {
            id: source.id,
            balance: amount(source.balance)?,
        })
    }
}

impl TryFrom<wire::TransactionResponse> for WalletTransaction {
    type Error = WalletValidationError;

    fn try_from(source: wire::TransactionResponse) -> Result<Self, Self::Error> {
        Ok(WalletTransaction {
            id: source.id,
            transaction_type: source.wallet_transaction_type,
            date: source.date,
            purpose: source.purpose,
            amount: amount(source.amount)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_conversion() {
        let json = r#"{"id": 3, "balance": 1250.75}"#;
        let wire: wire::WalletResponse = serde_json::from_str(json).unwrap();
        let wallet = Wallet::try_from(wire).unwrap();
        assert_eq!(wallet.balance.to_string(), "1250.75");
    }

    #[test]
    fn test_transaction_conversion() {
        let json = r#"{
            "id": 11,
            "walletTransactionType": "ADD_MONEY",
            "date": 1700000000000,
            "purpose": "top-up",
            "amount": 500.0
        }"#;
        let wire: wire::TransactionResponse = serde_json::from_str(json).unwrap();
        let tx = WalletTransaction::try_from(wire).unwrap();
        assert_eq!(tx.transaction_type, WalletTransactionType::AddMoney);
        assert_eq!(tx.date.timestamp(), 1_700_000_000);
        assert_eq!(tx.amount.to_string(), "500");
    }
}
