//! Watchlist: the user's followed coins.

pub mod wire;

#[cfg(feature = "http")]
pub mod client;

use super::coin::{Coin, CoinValidationError};

/// A user's watchlist. The backend returns the whole updated watchlist on
/// every add/remove, so the snapshot is always replaced in full.
#[derive(Debug, Clone, PartialEq)]
pub struct Watchlist {
    pub id: u64,
    pub coins: Vec<Coin>,
}

impl TryFrom<wire::WatchlistResponse> for Watchlist {
    type Error = CoinValidationError;

    fn try_from(source: wire::WatchlistResponse) -> Result<Self, Self::Error> {
        let coins = source
            .coins
            .into_iter()
            .map(Coin::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Watchlist {
            id: source.id,
            coins,
        })
    }
}

impl Watchlist {
    /// Whether a coin is already on the list.
    pub fn contains(&self, coin_id: &crate::shared::CoinId) -> bool {
        self.coins.iter().any(|c| &c.id == coin_id)
    }
}
