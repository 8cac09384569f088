//! Wallet sub-client — balance, deposit, transfer, transactions, top-up.

use crate::client::TradexClient;
use crate::domain::wallet::{
    wire, PaymentLink, PaymentMethod, Wallet, WalletTransaction, WalletValidationError,
};
use crate::error::SdkError;
use crate::store::Scope;

/// Sub-client for wallet operations.
pub struct Wallets<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Wallets<'a> {
    /// Fetch the user's wallet.
    pub async fn fetch(&self, scope: &Scope) -> Result<Wallet, SdkError> {
        self.client
            .store
            .wallet
            .run_scoped(scope, async { lift(self.client.http.get_wallet().await?) })
            .await
    }

    /// Fetch the wallet transaction history.
    pub async fn transactions(&self, scope: &Scope) -> Result<Vec<WalletTransaction>, SdkError> {
        self.client
            .store
            .transactions
            .run_scoped(scope, async {
                self.client
                    .http
                    .get_wallet_transactions()
                    .await?
                    .into_iter()
                    .map(|row| WalletTransaction::try_from(row).map_err(validation))
                    .collect()
            })
            .await
    }

    /// Complete a top-up: credit the wallet for a settled payment order.
    pub async fn deposit(&self, order_id: u64, payment_id: &str) -> Result<Wallet, SdkError> {
        self.client
            .store
            .wallet
            .run_mutation(async {
                lift(self.client.http.put_wallet_deposit(order_id, payment_id).await?)
            })
            .await
    }

    /// Transfer funds to another wallet.
    pub async fn transfer(
        &self,
        recipient_wallet_id: u64,
        amount: f64,
        purpose: Option<String>,
    ) -> Result<Wallet, SdkError> {
        let request = wire::TransferRequest { amount, purpose };
        self.client
            .store
            .wallet
            .run_mutation(async {
                lift(
                    self.client
                        .http
                        .put_wallet_transfer(recipient_wallet_id, &request)
                        .await?,
                )
            })
            .await
    }

    /// Create a top-up payment order with the given gateway.
    ///
    /// Returns the redirect link directly; no slice is touched until the
    /// user returns and [`Wallets::deposit`] settles the order.
    pub async fn topup(&self, method: PaymentMethod, amount: u64) -> Result<PaymentLink, SdkError> {
        let resp = self.client.http.post_payment_order(method, amount).await?;
        Ok(PaymentLink {
            url: resp.payment_url,
            order_id: resp.order_id,
        })
    }
}

fn lift(resp: wire::WalletResponse) -> Result<Wallet, SdkError> {
    Wallet::try_from(resp).map_err(validation)
}

fn validation(e: WalletValidationError) -> SdkError {
    SdkError::Validation(e.to_string())
}
