//! Assets: the user's coin holdings (portfolio).

pub mod wire;

#[cfg(feature = "http")]
pub mod client;

use super::coin::{Coin, CoinValidationError};
use crate::shared::decimal_from_f64;
use rust_decimal::Decimal;
use thiserror::Error;

/// One holding in the user's portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: u64,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub coin: Coin,
}

impl Asset {
    /// Current market value of the holding.
    pub fn value(&self) -> Decimal {
        self.quantity * self.coin.current_price
    }
}

#[derive(Debug, Error)]
pub enum AssetValidationError {
    #[error("asset {0}: invalid numeric field {1}: {2}")]
    InvalidNumber(u64, &'static str, String),

    #[error("asset {0}: {1}")]
    Coin(u64, CoinValidationError),
}

impl TryFrom<wire::AssetResponse> for Asset {
    type Error = AssetValidationError;

    fn try_from(source: wire::AssetResponse) -> Result<Self, Self::Error> {
        let id = source.id;
        let number = |name, v| {
            decimal_from_f64(v).map_err(|e| AssetValidationError::InvalidNumber(id, name, e))
        };
        Ok(Asset {
            id,
            quantity: number("quantity", source.quantity)?,
            buy_price: number("buy_price", source.buy_price)?,
            coin: Coin::try_from(source.coin).map_err(|e| AssetValidationError::Coin(id, e))?,
        })
    }
}
