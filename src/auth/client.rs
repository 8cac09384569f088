//! Auth sub-client — signup, signin (with 2FA branch), profile, logout.

use crate::auth::{
    SigninOutcome, SigninRequest, SignupRequest, User, VerificationType,
};
use crate::client::TradexClient;
use crate::error::SdkError;
use crate::store::Scope;

/// Sub-client for authentication operations.
pub struct AuthOps<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> AuthOps<'a> {
    /// Register a new account and sign straight in.
    ///
    /// The backend issues a jwt on signup, so on success the session is
    /// established and the auth slice holds the fresh profile.
    pub async fn signup(&self, request: &SignupRequest) -> Result<User, SdkError> {
        self.client
            .store
            .auth
            .run_mutation(async {
                let resp = self.client.http.post_signup(request).await?;
                self.establish_session(resp.jwt).await
            })
            .await
    }

    /// Sign in with email and password.
    ///
    /// When the account has two-factor auth enabled the backend withholds the
    /// jwt and returns a session id instead; the caller must follow up with
    /// [`verify_signin_otp`](Self::verify_signin_otp). In that case the auth
    /// slice is not touched.
    pub async fn signin(&self, request: &SigninRequest) -> Result<SigninOutcome, SdkError> {
        let resp = self.client.http.post_signin(request).await?;

        if resp.two_factor_auth_enabled {
            let session = resp.session.ok_or_else(|| {
                SdkError::Other("two-factor signin response missing session id".to_string())
            })?;
            return Ok(SigninOutcome::TwoFactorRequired { session });
        }

        let user = self
            .client
            .store
            .auth
            .run_mutation(async { self.establish_session(resp.jwt).await })
            .await?;
        Ok(SigninOutcome::Authenticated(user))
    }

    /// Complete a two-factor signin with the OTP sent to the user.
    pub async fn verify_signin_otp(&self, otp: &str, session: &str) -> Result<User, SdkError> {
        self.client
            .store
            .auth
            .run_mutation(async {
                let resp = self.client.http.post_signin_otp(otp, session).await?;
                self.establish_session(resp.jwt).await
            })
            .await
    }

    /// Fetch the profile for the current session into the auth slice.
    ///
    /// Used on startup to restore a persisted session: set the token via a
    /// builder, then call this to validate it. A 401 clears the token.
    pub async fn profile(&self, scope: &Scope) -> Result<User, SdkError> {
        let result = self
            .client
            .store
            .auth
            .run_scoped(scope, async {
                self.client.http.get_profile().await.map_err(SdkError::from)
            })
            .await;

        if let Err(ref e) = result {
            if matches!(e, SdkError::Http(crate::error::HttpError::Unauthorized)) {
                self.client.http.clear_auth_token().await;
            }
        }
        result
    }

    /// Ask the backend to send a verification OTP to the user's email or
    /// mobile, ahead of enabling two-factor auth.
    pub async fn send_verification_otp(
        &self,
        verification_type: VerificationType,
    ) -> Result<(), SdkError> {
        self.client
            .http
            .post_send_verification_otp(verification_type)
            .await?;
        Ok(())
    }

    /// Verify the OTP and enable two-factor auth on the account. Commits the
    /// updated profile to the auth slice.
    pub async fn enable_two_factor(&self, otp: &str) -> Result<User, SdkError> {
        self.client
            .store
            .auth
            .run_mutation(async {
                let user = self.client.http.patch_enable_two_factor(otp).await?;
                Ok(user)
            })
            .await
    }

    /// End the session: drop the token and reset every slice so no
    /// user-scoped data survives into the next session.
    pub async fn logout(&self) {
        self.client.http.clear_auth_token().await;
        self.client.store.reset_all().await;
    }

    /// Whether a bearer token is currently held.
    ///
    /// Says nothing about server-side validity; use [`profile`](Self::profile)
    /// for a validated check.
    pub async fn is_authenticated(&self) -> bool {
        self.client.http.has_auth_token().await
    }

    /// Store the jwt and fetch the profile it belongs to.
    async fn establish_session(&self, jwt: Option<String>) -> Result<User, SdkError> {
        let token = jwt.ok_or_else(|| {
            SdkError::Other("auth response missing jwt".to_string())
        })?;
        self.client.http.set_auth_token(Some(token)).await;

        match self.client.http.get_profile().await {
            Ok(user) => Ok(user),
            Err(e) => {
                // A token the backend immediately rejects is worthless.
                self.client.http.clear_auth_token().await;
                Err(e.into())
            }
        }
    }
}
