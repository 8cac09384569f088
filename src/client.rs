//! High-level client — `TradexClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the resource store, and accessor methods.

use crate::auth::client::AuthOps;
use crate::auth::User;
use crate::domain::admin::client::Admin;
use crate::domain::asset::client::Assets;
use crate::domain::asset::Asset;
use crate::domain::chat::client::Chat;
use crate::domain::chat::ChatSession;
use crate::domain::coin::client::Coins;
use crate::domain::coin::{Coin, CoinDetails, CoinSummary, MarketChart};
use crate::domain::order::client::Orders;
use crate::domain::order::Order;
use crate::domain::payment_details::client::PaymentDetailsOps;
use crate::domain::payment_details::PaymentDetails;
use crate::domain::wallet::client::Wallets;
use crate::domain::wallet::{Wallet, WalletTransaction};
use crate::domain::watchlist::client::Watchlists;
use crate::domain::watchlist::Watchlist;
use crate::domain::withdrawal::client::Withdrawals;
use crate::domain::withdrawal::Withdrawal;
use crate::error::SdkError;
use crate::http::TradexHttp;
use crate::store::{Debouncer, Slice};

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::auth::client::AuthOps as AuthClient;
pub use crate::domain::admin::client::Admin as AdminClient;
pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::chat::client::Chat as ChatClient;
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::payment_details::client::PaymentDetailsOps as PaymentDetailsClient;
pub use crate::domain::wallet::client::Wallets as WalletsClient;
pub use crate::domain::watchlist::client::Watchlists as WatchlistsClient;
pub use crate::domain::withdrawal::client::Withdrawals as WithdrawalsClient;

/// One slice per server-backed resource. Every sub-client operation routes
/// its result through exactly one of these, so a UI can subscribe to the
/// snapshots it renders and ignore the rest.
pub struct Store {
    pub auth: Slice<User>,
    pub coin_list: Slice<Vec<Coin>>,
    pub top_coins: Slice<Vec<Coin>>,
    pub search: Slice<Vec<CoinSummary>>,
    pub coin_details: Slice<CoinDetails>,
    pub market_chart: Slice<MarketChart>,
    pub watchlist: Slice<Watchlist>,
    pub wallet: Slice<Wallet>,
    pub transactions: Slice<Vec<WalletTransaction>>,
    pub payment_details: Slice<PaymentDetails>,
    pub withdrawal_history: Slice<Vec<Withdrawal>>,
    pub withdrawal_requests: Slice<Vec<Withdrawal>>,
    pub assets: Slice<Vec<Asset>>,
    pub asset_details: Slice<Asset>,
    pub orders: Slice<Vec<Order>>,
    pub chat: Slice<ChatSession>,
    pub(crate) search_debounce: Debouncer,
}

impl Store {
    pub fn new() -> Self {
        Self {
            auth: Slice::new("auth"),
            coin_list: Slice::new("coin_list"),
            top_coins: Slice::new("top_coins"),
            search: Slice::new("search"),
            coin_details: Slice::new("coin_details"),
            market_chart: Slice::new("market_chart"),
            watchlist: Slice::new("watchlist"),
            wallet: Slice::new("wallet"),
            transactions: Slice::new("transactions"),
            payment_details: Slice::new("payment_details"),
            withdrawal_history: Slice::new("withdrawal_history"),
            withdrawal_requests: Slice::new("withdrawal_requests"),
            assets: Slice::new("assets"),
            asset_details: Slice::new("asset_details"),
            orders: Slice::new("orders"),
            chat: Slice::new("chat"),
            search_debounce: Debouncer::default(),
        }
    }

    /// Reset every slice to its pristine snapshot. Called on logout so no
    /// user-scoped data leaks into the next session.
    pub async fn reset_all(&self) {
        self.auth.reset().await;
        self.coin_list.reset().await;
        self.top_coins.reset().await;
        self.search.reset().await;
        self.coin_details.reset().await;
        self.market_chart.reset().await;
        self.watchlist.reset().await;
        self.wallet.reset().await;
        self.transactions.reset().await;
        self.payment_details.reset().await;
        self.withdrawal_history.reset().await;
        self.withdrawal_requests.reset().await;
        self.assets.reset().await;
        self.asset_details.reset().await;
        self.orders.reset().await;
        self.chat.reset().await;
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// The primary entry point for the Tradex SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.wallets()`, etc. Clones share the same store
/// and session.
pub struct TradexClient {
    pub(crate) http: TradexHttp,
    pub(crate) store: Arc<Store>,
}

impl TradexClient {
    pub fn builder() -> TradexClientBuilder {
        TradexClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> AuthOps<'_> {
        AuthOps { client: self }
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn watchlists(&self) -> Watchlists<'_> {
        Watchlists { client: self }
    }

    pub fn wallets(&self) -> Wallets<'_> {
        Wallets { client: self }
    }

    pub fn withdrawals(&self) -> Withdrawals<'_> {
        Withdrawals { client: self }
    }

    pub fn payment_details(&self) -> PaymentDetailsOps<'_> {
        PaymentDetailsOps { client: self }
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    /// The resource store — subscribe to slices from here.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl Clone for TradexClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            store: self.store.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TradexClientBuilder {
    base_url: String,
    bearer_token: Option<String>,
}

impl Default for TradexClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            bearer_token: None,
        }
    }
}

impl TradexClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Seed a persisted bearer token (session restore). Call
    /// `client.auth().profile(..)` afterwards to validate it.
    pub fn bearer_token(mut self, token: &str) -> Self {
        self.bearer_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> Result<TradexClient, SdkError> {
        Ok(TradexClient {
            http: TradexHttp::with_token(&self.base_url, self.bearer_token),
            store: Arc::new(Store::new()),
        })
    }
}
