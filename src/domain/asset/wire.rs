//! Wire types for asset endpoints.

use crate::domain::coin::wire::CoinResponse;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    pub id: u64,
    pub quantity: f64,
    pub buy_price: f64,
    pub coin: CoinResponse,
}
