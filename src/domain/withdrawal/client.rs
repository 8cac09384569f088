//! Withdrawals sub-client — request + history.

use crate::client::TradexClient;
use crate::domain::withdrawal::{wire, Withdrawal, WithdrawalValidationError};
use crate::error::SdkError;
use crate::store::Scope;

/// Sub-client for the user's withdrawal operations. Admin approval lives in
/// the `admin` sub-client.
pub struct Withdrawals<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Withdrawals<'a> {
    /// Request a withdrawal of `amount` USD.
    ///
    /// Short-circuits with a `Validation` failure when no payment details
    /// are on file — the endpoint is never called in that case, and the UI
    /// should route the user to the add-payment-method screen.
    ///
    /// On success the history slice is refreshed and returned; the new
    /// request is its most recent entry.
    pub async fn request(&self, amount: u64) -> Result<Vec<Withdrawal>, SdkError> {
        if self.client.store.payment_details.data().await.is_none() {
            return Err(SdkError::Validation(
                "no payment method on file; add payment details first".into(),
            ));
        }

        self.client
            .store
            .withdrawal_history
            .run_mutation(async {
                let created = lift(self.client.http.post_withdrawal(amount).await?)?;
                // The history endpoint reflects the new request; refresh so
                // the slice holds the full list rather than one record.
                let mut history = lift_all(self.client.http.get_withdrawal_history().await?)?;
                if !history.iter().any(|w| w.id == created.id) {
                    history.insert(0, created);
                }
                Ok(history)
            })
            .await
    }

    /// Fetch the user's withdrawal history.
    pub async fn history(&self, scope: &Scope) -> Result<Vec<Withdrawal>, SdkError> {
        self.client
            .store
            .withdrawal_history
            .run_scoped(scope, async {
                lift_all(self.client.http.get_withdrawal_history().await?)
            })
            .await
    }
}

pub(crate) fn lift(resp: wire::WithdrawalResponse) -> Result<Withdrawal, SdkError> {
    Withdrawal::try_from(resp).map_err(validation)
}

pub(crate) fn lift_all(rows: Vec<wire::WithdrawalResponse>) -> Result<Vec<Withdrawal>, SdkError> {
    rows.into_iter().map(lift).collect()
}

fn validation(e: WithdrawalValidationError) -> SdkError {
    SdkError::Validation(e.to_string())
}
