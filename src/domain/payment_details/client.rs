//! Payment-details sub-client — add + fetch.

use crate::client::TradexClient;
use crate::domain::payment_details::{AddPaymentDetailsRequest, PaymentDetails};
use crate::error::SdkError;
use crate::store::Scope;

/// Sub-client for payment-details operations.
pub struct PaymentDetailsOps<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> PaymentDetailsOps<'a> {
    /// Fetch the payment details on file. A `NotFound` failure means the
    /// user has not added any yet.
    pub async fn fetch(&self, scope: &Scope) -> Result<PaymentDetails, SdkError> {
        self.client
            .store
            .payment_details
            .run_scoped(scope, async {
                Ok(self.client.http.get_payment_details().await?)
            })
            .await
    }

    /// Register payment details for the account.
    pub async fn add(&self, request: &AddPaymentDetailsRequest) -> Result<PaymentDetails, SdkError> {
        self.client
            .store
            .payment_details
            .run_mutation(async { Ok(self.client.http.post_payment_details(request).await?) })
            .await
    }
}
