//! Withdrawals: user requests and their approval lifecycle.

pub mod wire;

#[cfg(feature = "http")]
pub mod client;

use crate::shared::decimal_from_f64;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Approval state of a withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WithdrawalStatus {
    Pending,
    Success,
    Declined,
}

impl WithdrawalStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, WithdrawalStatus::Pending)
    }
}

/// A withdrawal request. `user` is populated on the admin listing only.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub id: u64,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub status: WithdrawalStatus,
    pub user: Option<UserSummary>,
}

/// Requesting user, as shown on the admin approval table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: u64,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum WithdrawalValidationError {
    #[error("withdrawal {0}: invalid amount {1}: {2}")]
    InvalidAmount(u64, f64, String),
}

impl TryFrom<wire::WithdrawalResponse> for Withdrawal {
    type Error = WithdrawalValidationError;

    fn try_from(source: wire::WithdrawalResponse) -> Result<Self, Self::Error> {
        let amount = decimal_from_f64(source.amount)
            .map_err(|e| WithdrawalValidationError::InvalidAmount(source.id, source.amount, e))?;
        Ok(Withdrawal {
            id: source.id,
            amount,
            date: source.date,
            status: source.status,
            user: source.user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdrawal_conversion_with_user() {
        let json = r#"{
            "id": 9,
            "amount": 500.0,
            "date": 1700000000000,
            "status": "PENDING",
            "user": {"id": 2, "fullName": "Ada Lovelace", "email": "ada@example.com"}
        }"#;
        let wire: wire::WithdrawalResponse = serde_json::from_str(json).unwrap();
        let w = Withdrawal::try_from(wire).unwrap();
        assert!(w.status.is_pending());
        assert_eq!(w.amount.to_string(), "500");
        assert_eq!(w.user.unwrap().full_name, "Ada Lovelace");
    }

    #[test]
    fn test_withdrawal_conversion_without_user() {
        let json = r#"{"id": 9, "amount": 25.5, "date": 1700000000000, "status": "SUCCESS"}"#;
        let wire: wire::WithdrawalResponse = serde_json::from_str(json).unwrap();
        let w = Withdrawal::try_from(wire).unwrap();
        assert_eq!(w.status, WithdrawalStatus::Success);
        assert!(w.user.is_none());
    }
}
