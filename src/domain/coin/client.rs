//! Coins sub-client — listings, details, chart series, search.

use crate::client::TradexClient;
use crate::domain::coin::{wire, Coin, CoinDetails, CoinSummary, CoinValidationError, MarketChart};
use crate::error::SdkError;
use crate::shared::CoinId;
use crate::store::Scope;

/// Sub-client for coin market data.
pub struct Coins<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Coins<'a> {
    /// Fetch one page of the coin list into the `coin_list` slice.
    pub async fn list(&self, scope: &Scope, page: u32) -> Result<Vec<Coin>, SdkError> {
        self.client
            .store
            .coin_list
            .run_scoped(scope, async {
                lift_coins(self.client.http.get_coin_list(page).await?)
            })
            .await
    }

    /// Fetch the top-50 coins by market cap into the `top_coins` slice.
    pub async fn top50(&self, scope: &Scope) -> Result<Vec<Coin>, SdkError> {
        self.client
            .store
            .top_coins
            .run_scoped(scope, async {
                lift_coins(self.client.http.get_top50().await?)
            })
            .await
    }

    /// Fetch the trending list into the `top_coins` slice.
    pub async fn trending(&self, scope: &Scope) -> Result<Vec<Coin>, SdkError> {
        self.client
            .store
            .top_coins
            .run_scoped(scope, async {
                lift_coins(self.client.http.get_trending().await?)
            })
            .await
    }

    /// Fetch the detail view for one coin into the `coin_details` slice.
    pub async fn details(&self, scope: &Scope, coin_id: &CoinId) -> Result<CoinDetails, SdkError> {
        self.client
            .store
            .coin_details
            .run_scoped(scope, async {
                let resp = self.client.http.get_coin_details(coin_id).await?;
                CoinDetails::try_from(resp).map_err(validation)
            })
            .await
    }

    /// Fetch the chart series for one coin into the `market_chart` slice.
    pub async fn market_chart(
        &self,
        scope: &Scope,
        coin_id: &CoinId,
        days: u32,
    ) -> Result<MarketChart, SdkError> {
        self.client
            .store
            .market_chart
            .run_scoped(scope, async {
                let resp = self.client.http.get_market_chart(coin_id, days).await?;
                MarketChart::try_from((coin_id.clone(), days, resp)).map_err(validation)
            })
            .await
    }

    /// Search coins by keyword into the `search` slice.
    pub async fn search(&self, scope: &Scope, keyword: &str) -> Result<Vec<CoinSummary>, SdkError> {
        self.client
            .store
            .search
            .run_scoped(scope, async {
                let resp = self.client.http.search_coin(keyword).await?;
                Ok(resp.coins.into_iter().map(CoinSummary::from).collect())
            })
            .await
    }

    /// Debounced search entry point for search-as-you-type.
    ///
    /// Waits out the store's quiet period first; if a newer keystroke
    /// arrived in the meantime this call yields `Ok(None)` without touching
    /// the network. A burst of calls therefore issues exactly one request.
    pub async fn search_debounced(
        &self,
        scope: &Scope,
        keyword: &str,
    ) -> Result<Option<Vec<CoinSummary>>, SdkError> {
        if !self.client.store.search_debounce.settle().await {
            return Ok(None);
        }
        self.search(scope, keyword).await.map(Some)
    }
}

fn lift_coins(rows: Vec<wire::CoinResponse>) -> Result<Vec<Coin>, SdkError> {
    rows.into_iter()
        .map(|row| Coin::try_from(row).map_err(validation))
        .collect()
}

fn validation(e: CoinValidationError) -> SdkError {
    SdkError::Validation(e.to_string())
}
