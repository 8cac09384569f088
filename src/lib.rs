//! # Tradex SDK
//!
//! A Rust SDK for the Tradex crypto trading platform, built around
//! per-resource state slices.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Types, domain models, formatting helpers (always available)
//! 2. **Store** — `Slice<T>` snapshots with the request/success/failure lifecycle
//! 3. **Auth** — Signup/signin, two-factor flow, session token handling
//! 4. **HTTP API** — `TradexHttp`, one method per REST endpoint
//! 5. **High-Level Client** — `TradexClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradex_sdk::prelude::*;
//!
//! let client = TradexClient::builder()
//!     .base_url("https://api.tradex.app")
//!     .build()?;
//!
//! let scope = Scope::new();
//! let coins = client.coins().list(&scope, 1).await?;
//! let snapshot = client.store().coin_list.snapshot().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, serde helpers, and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types and snapshot fault taxonomy.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Store ───────────────────────────────────────────────────────────

/// Resource slices: snapshots, cancellation scopes, debouncing.
pub mod store;

// ── Layer 3: Auth ────────────────────────────────────────────────────────────

/// Authentication: signup/signin, two-factor flow, user profile.
pub mod auth;

// ── Layer 4: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `TradexClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, OrderType};

    // Store primitives
    pub use crate::store::{Scope, Slice, Snapshot, SEARCH_QUIET_PERIOD};

    // Domain types — coins
    pub use crate::domain::coin::{
        ChartPoint, Coin, CoinDetails, CoinSummary, CoinValidationError, MarketChart,
    };

    // Domain types — portfolio
    pub use crate::domain::asset::Asset;
    pub use crate::domain::order::{Order, OrderItem, OrderStatus};
    pub use crate::domain::watchlist::Watchlist;

    // Domain types — money movement
    pub use crate::domain::payment_details::{AddPaymentDetailsRequest, PaymentDetails};
    pub use crate::domain::wallet::{
        PaymentLink, PaymentMethod, Wallet, WalletTransaction, WalletTransactionType,
    };
    pub use crate::domain::withdrawal::{UserSummary, Withdrawal, WithdrawalStatus};

    // Domain types — chat
    pub use crate::domain::chat::{ChatMessage, ChatRole, ChatSession};

    // Errors
    pub use crate::error::{Fault, FaultKind, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth types
    pub use crate::auth::{
        Role, SigninOutcome, SigninRequest, SignupRequest, TwoFactorAuth, User, VerificationType,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AdminClient, AssetsClient, AuthClient, ChatClient, CoinsClient, OrdersClient,
        PaymentDetailsClient, Store, TradexClient, TradexClientBuilder, WalletsClient,
        WatchlistsClient, WithdrawalsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::TradexHttp;
}
