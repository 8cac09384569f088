//! Assets sub-client — portfolio and per-coin holdings.

use crate::client::TradexClient;
use crate::domain::asset::{Asset, AssetValidationError};
use crate::error::SdkError;
use crate::shared::CoinId;
use crate::store::Scope;

/// Sub-client for portfolio queries.
pub struct Assets<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Assets<'a> {
    /// Fetch the full portfolio.
    pub async fn fetch_all(&self, scope: &Scope) -> Result<Vec<Asset>, SdkError> {
        self.client
            .store
            .assets
            .run_scoped(scope, async {
                self.client
                    .http
                    .get_assets()
                    .await?
                    .into_iter()
                    .map(|row| Asset::try_from(row).map_err(validation))
                    .collect()
            })
            .await
    }

    /// Fetch one asset by id.
    pub async fn fetch(&self, scope: &Scope, asset_id: u64) -> Result<Asset, SdkError> {
        self.client
            .store
            .asset_details
            .run_scoped(scope, async {
                Asset::try_from(self.client.http.get_asset(asset_id).await?).map_err(validation)
            })
            .await
    }

    /// Fetch the user's holding for one coin (e.g. to prefill the sell form).
    pub async fn fetch_by_coin(&self, scope: &Scope, coin_id: &CoinId) -> Result<Asset, SdkError> {
        self.client
            .store
            .asset_details
            .run_scoped(scope, async {
                Asset::try_from(self.client.http.get_asset_by_coin(coin_id).await?)
                    .map_err(validation)
            })
            .await
    }
}

fn validation(e: AssetValidationError) -> SdkError {
    SdkError::Validation(e.to_string())
}
