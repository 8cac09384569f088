//! Wire types for withdrawal endpoints.

use super::{UserSummary, WithdrawalStatus};
use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct WithdrawalResponse {
    pub id: u64,
    pub amount: f64,
    #[serde(with = "serde_util::timestamp_ms")]
    pub date: DateTime<Utc>,
    pub status: WithdrawalStatus,
    #[serde(default)]
    pub user: Option<UserSummary>,
}
