//! Orders sub-client — pay (buy/sell) + history.

use crate::client::TradexClient;
use crate::domain::order::{wire, Order, OrderValidationError};
use crate::error::SdkError;
use crate::shared::{CoinId, OrderType};
use crate::store::Scope;

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Orders<'a> {
    /// Execute a buy or sell at market price.
    ///
    /// Serialized per resource: a second `pay` while one is in flight is
    /// rejected rather than raced. On success the order history slice is
    /// refreshed; the wallet and portfolio slices are left to the caller to
    /// re-fetch (balances changed server-side).
    pub async fn pay(
        &self,
        coin_id: &CoinId,
        quantity: f64,
        order_type: OrderType,
    ) -> Result<Vec<Order>, SdkError> {
        let request = wire::CreateOrderRequest {
            coin_id: coin_id.to_string(),
            quantity,
            order_type,
        };
        self.client
            .store
            .orders
            .run_mutation(async {
                let created = lift(self.client.http.post_pay_order(&request).await?)?;
                let mut orders = lift_all(self.client.http.get_orders().await?)?;
                if !orders.iter().any(|o| o.id == created.id) {
                    orders.insert(0, created);
                }
                Ok(orders)
            })
            .await
    }

    /// Fetch the user's order history.
    pub async fn history(&self, scope: &Scope) -> Result<Vec<Order>, SdkError> {
        self.client
            .store
            .orders
            .run_scoped(scope, async {
                lift_all(self.client.http.get_orders().await?)
            })
            .await
    }

    /// Fetch one order by id. Returned directly; the history slice already
    /// carries the authoritative list.
    pub async fn get(&self, order_id: u64) -> Result<Order, SdkError> {
        lift(self.client.http.get_order(order_id).await?)
    }
}

fn lift(resp: wire::OrderResponse) -> Result<Order, SdkError> {
    Order::try_from(resp).map_err(|e: OrderValidationError| SdkError::Validation(e.to_string()))
}

fn lift_all(rows: Vec<wire::OrderResponse>) -> Result<Vec<Order>, SdkError> {
    rows.into_iter().map(lift).collect()
}
