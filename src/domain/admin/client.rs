//! Admin sub-client — withdrawal request listing + approval.
//!
//! Requires a profile with `Role::Admin`; the backend enforces this, the
//! client only routes.

use crate::client::TradexClient;
use crate::domain::withdrawal::client::lift_all;
use crate::domain::withdrawal::Withdrawal;
use crate::error::SdkError;
use crate::store::Scope;

/// Sub-client for admin withdrawal approval.
pub struct Admin<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Admin<'a> {
    /// Fetch all withdrawal requests into the `withdrawal_requests` slice.
    pub async fn withdrawal_requests(&self, scope: &Scope) -> Result<Vec<Withdrawal>, SdkError> {
        self.client
            .store
            .withdrawal_requests
            .run_scoped(scope, async {
                lift_all(self.client.http.get_all_withdrawal_requests().await?)
            })
            .await
    }

    /// Accept or decline a request, then re-fetch the list so the requests
    /// snapshot reflects the new status (the row's badge flips from PENDING).
    pub async fn proceed_withdrawal(
        &self,
        withdrawal_id: u64,
        accept: bool,
    ) -> Result<Vec<Withdrawal>, SdkError> {
        self.client
            .store
            .withdrawal_requests
            .run_mutation(async {
                self.client
                    .http
                    .patch_proceed_withdrawal(withdrawal_id, accept)
                    .await?;
                lift_all(self.client.http.get_all_withdrawal_requests().await?)
            })
            .await
    }
}
