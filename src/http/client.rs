//! Low-level HTTP client — `TradexHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level client wraps this.
//!
//! There is deliberately no retry or backoff at this layer: a failed call
//! surfaces once, as one snapshot failure, and the user re-triggers it.

use crate::auth::{AuthResponse, SigninRequest, SignupRequest, User, VerificationType};
use crate::domain::asset::wire::AssetResponse;
use crate::domain::chat::{ChatBotResponse, ChatPromptRequest};
use crate::domain::coin::wire::{
    CoinDetailsResponse, CoinResponse, MarketChartResponse, SearchResponse,
};
use crate::domain::order::wire::{CreateOrderRequest, OrderResponse};
use crate::domain::payment_details::{AddPaymentDetailsRequest, PaymentDetails};
use crate::domain::wallet::wire::{
    PaymentOrderResponse, TransactionResponse, TransferRequest, WalletResponse,
};
use crate::domain::wallet::PaymentMethod;
use crate::domain::withdrawal::wire::WithdrawalResponse;
use crate::error::HttpError;
use crate::shared::CoinId;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Tradex REST API.
pub struct TradexHttp {
    base_url: String,
    client: Client,
    /// Bearer token — the single source of session credential truth.
    /// NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl TradexHttp {
    pub fn new(base_url: &str) -> Self {
        Self::with_token(base_url, None)
    }

    /// Construct with a pre-seeded bearer token (session restore).
    pub(crate) fn with_token(base_url: &str, token: Option<String>) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(token)),
        }
    }

    /// Set the bearer token after a successful signin/OTP verification.
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    /// Clear the bearer token.
    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    /// Check if a bearer token is set.
    pub(crate) async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn post_signup(&self, body: &SignupRequest) -> Result<AuthResponse, HttpError> {
        let url = format!("{}/auth/signup", self.base_url);
        self.post(&url, body).await
    }

    pub async fn post_signin(&self, body: &SigninRequest) -> Result<AuthResponse, HttpError> {
        let url = format!("{}/auth/signin", self.base_url);
        self.post(&url, body).await
    }

    pub async fn post_signin_otp(
        &self,
        otp: &str,
        session: &str,
    ) -> Result<AuthResponse, HttpError> {
        let url = format!(
            "{}/auth/two-factor/otp/{}?id={}",
            self.base_url,
            urlencoding::encode(otp),
            urlencoding::encode(session)
        );
        self.post(&url, &serde_json::json!({})).await
    }

    pub async fn get_profile(&self) -> Result<User, HttpError> {
        let url = format!("{}/api/users/profile", self.base_url);
        self.get(&url).await
    }

    pub async fn post_send_verification_otp(
        &self,
        verification_type: VerificationType,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/api/users/verification/{}/send-otp",
            self.base_url,
            verification_type.as_str()
        );
        self.post(&url, &serde_json::json!({})).await
    }

    pub async fn patch_enable_two_factor(&self, otp: &str) -> Result<User, HttpError> {
        let url = format!(
            "{}/api/users/enable-two-factor/verify-otp/{}",
            self.base_url,
            urlencoding::encode(otp)
        );
        self.patch(&url, &serde_json::json!({})).await
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn get_coin_list(&self, page: u32) -> Result<Vec<CoinResponse>, HttpError> {
        let url = format!("{}/coins?page={}", self.base_url, page);
        self.get(&url).await
    }

    pub async fn get_top50(&self) -> Result<Vec<CoinResponse>, HttpError> {
        let url = format!("{}/coins/top50", self.base_url);
        self.get(&url).await
    }

    pub async fn get_trending(&self) -> Result<Vec<CoinResponse>, HttpError> {
        let url = format!("{}/coins/trending", self.base_url);
        self.get(&url).await
    }

    pub async fn get_coin_details(
        &self,
        coin_id: &CoinId,
    ) -> Result<CoinDetailsResponse, HttpError> {
        let url = format!("{}/coins/details/{}", self.base_url, coin_id);
        self.get(&url).await
    }

    pub async fn get_market_chart(
        &self,
        coin_id: &CoinId,
        days: u32,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!("{}/coins/{}/chart?days={}", self.base_url, coin_id, days);
        self.get(&url).await
    }

    pub async fn search_coin(&self, keyword: &str) -> Result<SearchResponse, HttpError> {
        let url = format!(
            "{}/coins/search?q={}",
            self.base_url,
            urlencoding::encode(keyword)
        );
        self.get(&url).await
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub async fn get_user_watchlist(
        &self,
    ) -> Result<crate::domain::watchlist::wire::WatchlistResponse, HttpError> {
        let url = format!("{}/api/watchlist/user", self.base_url);
        self.get(&url).await
    }

    pub async fn patch_watchlist_add(
        &self,
        coin_id: &CoinId,
    ) -> Result<crate::domain::watchlist::wire::WatchlistResponse, HttpError> {
        let url = format!("{}/api/watchlist/add/coin/{}", self.base_url, coin_id);
        self.patch(&url, &serde_json::json!({})).await
    }

    pub async fn patch_watchlist_remove(
        &self,
        coin_id: &CoinId,
    ) -> Result<crate::domain::watchlist::wire::WatchlistResponse, HttpError> {
        let url = format!("{}/api/watchlist/remove/coin/{}", self.base_url, coin_id);
        self.patch(&url, &serde_json::json!({})).await
    }

    // ── Wallet ───────────────────────────────────────────────────────────

    pub async fn get_wallet(&self) -> Result<WalletResponse, HttpError> {
        let url = format!("{}/api/wallet", self.base_url);
        self.get(&url).await
    }

    pub async fn put_wallet_deposit(
        &self,
        order_id: u64,
        payment_id: &str,
    ) -> Result<WalletResponse, HttpError> {
        let url = format!(
            "{}/api/wallet/deposit?order_id={}&payment_id={}",
            self.base_url,
            order_id,
            urlencoding::encode(payment_id)
        );
        self.put(&url, &serde_json::json!({})).await
    }

    pub async fn put_wallet_transfer(
        &self,
        recipient_wallet_id: u64,
        body: &TransferRequest,
    ) -> Result<WalletResponse, HttpError> {
        let url = format!(
            "{}/api/wallet/{}/transfer",
            self.base_url, recipient_wallet_id
        );
        self.put(&url, body).await
    }

    pub async fn get_wallet_transactions(&self) -> Result<Vec<TransactionResponse>, HttpError> {
        let url = format!("{}/api/transactions", self.base_url);
        self.get(&url).await
    }

    pub async fn post_payment_order(
        &self,
        method: PaymentMethod,
        amount: u64,
    ) -> Result<PaymentOrderResponse, HttpError> {
        let url = format!(
            "{}/api/payment/{}/amount/{}",
            self.base_url,
            method.as_str(),
            amount
        );
        self.post(&url, &serde_json::json!({})).await
    }

    // ── Withdrawal ───────────────────────────────────────────────────────

    pub async fn post_withdrawal(&self, amount: u64) -> Result<WithdrawalResponse, HttpError> {
        let url = format!("{}/api/withdrawal/{}", self.base_url, amount);
        self.post(&url, &serde_json::json!({})).await
    }

    pub async fn get_withdrawal_history(&self) -> Result<Vec<WithdrawalResponse>, HttpError> {
        let url = format!("{}/api/withdrawal", self.base_url);
        self.get(&url).await
    }

    pub async fn get_all_withdrawal_requests(
        &self,
    ) -> Result<Vec<WithdrawalResponse>, HttpError> {
        let url = format!("{}/api/admin/withdrawal", self.base_url);
        self.get(&url).await
    }

    pub async fn patch_proceed_withdrawal(
        &self,
        withdrawal_id: u64,
        accept: bool,
    ) -> Result<WithdrawalResponse, HttpError> {
        let url = format!(
            "{}/api/admin/withdrawal/{}/proceed/{}",
            self.base_url, withdrawal_id, accept
        );
        self.patch(&url, &serde_json::json!({})).await
    }

    // ── Payment details ──────────────────────────────────────────────────

    pub async fn post_payment_details(
        &self,
        body: &AddPaymentDetailsRequest,
    ) -> Result<PaymentDetails, HttpError> {
        let url = format!("{}/api/payment-details", self.base_url);
        self.post(&url, body).await
    }

    pub async fn get_payment_details(&self) -> Result<PaymentDetails, HttpError> {
        let url = format!("{}/api/payment-details", self.base_url);
        self.get(&url).await
    }

    // ── Assets ───────────────────────────────────────────────────────────

    pub async fn get_assets(&self) -> Result<Vec<AssetResponse>, HttpError> {
        let url = format!("{}/api/asset", self.base_url);
        self.get(&url).await
    }

    pub async fn get_asset(&self, asset_id: u64) -> Result<AssetResponse, HttpError> {
        let url = format!("{}/api/asset/{}", self.base_url, asset_id);
        self.get(&url).await
    }

    pub async fn get_asset_by_coin(&self, coin_id: &CoinId) -> Result<AssetResponse, HttpError> {
        let url = format!("{}/api/asset/coin/{}/user", self.base_url, coin_id);
        self.get(&url).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn post_pay_order(
        &self,
        body: &CreateOrderRequest,
    ) -> Result<OrderResponse, HttpError> {
        let url = format!("{}/api/orders/pay", self.base_url);
        self.post(&url, body).await
    }

    pub async fn get_orders(&self) -> Result<Vec<OrderResponse>, HttpError> {
        let url = format!("{}/api/orders", self.base_url);
        self.get(&url).await
    }

    pub async fn get_order(&self, order_id: u64) -> Result<OrderResponse, HttpError> {
        let url = format!("{}/api/orders/{}", self.base_url, order_id);
        self.get(&url).await
    }

    // ── Chat ─────────────────────────────────────────────────────────────

    pub async fn post_chat_prompt(
        &self,
        body: &ChatPromptRequest,
    ) -> Result<ChatBotResponse, HttpError> {
        let url = format!("{}/chat/bot/coin", self.base_url);
        self.post(&url, body).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::PUT, url, Some(body)).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::PATCH, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(%method, url, "dispatching request");
        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for TradexHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
