//! Watchlist sub-client — fetch, add coin, remove coin.

use crate::client::TradexClient;
use crate::domain::watchlist::Watchlist;
use crate::error::SdkError;
use crate::shared::CoinId;
use crate::store::Scope;

/// Sub-client for watchlist operations.
pub struct Watchlists<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Watchlists<'a> {
    /// Fetch the user's watchlist.
    pub async fn fetch(&self, scope: &Scope) -> Result<Watchlist, SdkError> {
        self.client
            .store
            .watchlist
            .run_scoped(scope, async {
                lift(self.client.http.get_user_watchlist().await?)
            })
            .await
    }

    /// Add a coin. The server replies with the updated watchlist, which
    /// replaces the snapshot.
    pub async fn add_coin(&self, coin_id: &CoinId) -> Result<Watchlist, SdkError> {
        self.client
            .store
            .watchlist
            .run_mutation(async { lift(self.client.http.patch_watchlist_add(coin_id).await?) })
            .await
    }

    /// Remove a coin; snapshot replaced with the server's updated watchlist.
    pub async fn remove_coin(&self, coin_id: &CoinId) -> Result<Watchlist, SdkError> {
        self.client
            .store
            .watchlist
            .run_mutation(async { lift(self.client.http.patch_watchlist_remove(coin_id).await?) })
            .await
    }
}

fn lift(resp: crate::domain::watchlist::wire::WatchlistResponse) -> Result<Watchlist, SdkError> {
    Watchlist::try_from(resp).map_err(|e| SdkError::Validation(e.to_string()))
}
