//! Integration tests against a live Tradex backend.
//!
//! These exercise real signin → fetch → mutate flows and therefore need a
//! running backend plus a seeded test account.
//!
//! All tests are `#[ignore]` because they require network access.
//!
//! Run with:
//! ```bash
//! TRADEX_API_URL=http://localhost:5454 \
//! TRADEX_TEST_EMAIL=... TRADEX_TEST_PASSWORD=... \
//! cargo test --test live_api_integration -- --ignored
//! ```

use std::time::Duration;

use tokio::time::timeout;

use tradex_sdk::prelude::*;

const TEST_TIMEOUT: Duration = Duration::from_secs(15);

fn env(key: &str) -> String {
    dotenvy::dotenv().ok();
    std::env::var(key).unwrap_or_else(|_| panic!("{key} must be set for live tests"))
}

fn live_client() -> TradexClient {
    TradexClient::builder()
        .base_url(&env("TRADEX_API_URL"))
        .build()
        .expect("client builds")
}

/// Sign in with the seeded test account (2FA disabled on it).
async fn signed_in_client() -> TradexClient {
    let client = live_client();
    let outcome = timeout(
        TEST_TIMEOUT,
        client.auth().signin(&SigninRequest {
            email: env("TRADEX_TEST_EMAIL"),
            password: env("TRADEX_TEST_PASSWORD"),
        }),
    )
    .await
    .expect("signin timed out")
    .expect("signin should succeed");

    assert!(
        matches!(outcome, SigninOutcome::Authenticated(_)),
        "test account must not have 2FA enabled, got: {outcome:?}"
    );
    client
}

#[tokio::test]
#[ignore]
async fn test_coin_list_populates_slice() {
    let client = live_client();
    let scope = Scope::new();

    let coins = timeout(TEST_TIMEOUT, client.coins().list(&scope, 1))
        .await
        .expect("timed out")
        .expect("coin list should succeed");
    assert!(!coins.is_empty());

    let snap = client.store().coin_list.snapshot().await;
    assert_eq!(snap.data.as_ref().map(Vec::len), Some(coins.len()));
    assert!(!snap.loading);
    assert!(snap.error.is_none());
}

#[tokio::test]
#[ignore]
async fn test_coin_details_and_chart() {
    let client = live_client();
    let scope = Scope::new();
    let coin_id = CoinId::from("bitcoin");

    let details = timeout(TEST_TIMEOUT, client.coins().details(&scope, &coin_id))
        .await
        .expect("timed out")
        .expect("details should succeed");
    assert_eq!(details.id, coin_id);

    let chart = timeout(
        TEST_TIMEOUT,
        client.coins().market_chart(&scope, &coin_id, 7),
    )
    .await
    .expect("timed out")
    .expect("chart should succeed");
    assert!(!chart.points.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_profile_round_trip() {
    let client = signed_in_client().await;
    let scope = Scope::new();

    let user = client
        .auth()
        .profile(&scope)
        .await
        .expect("profile should succeed");
    assert_eq!(user.email, env("TRADEX_TEST_EMAIL"));
    assert_eq!(client.store().auth.data().await, Some(user));
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_profile_is_unauthorized() {
    let client = live_client();
    let scope = Scope::new();

    let err = client.auth().profile(&scope).await.unwrap_err();
    assert_eq!(err.kind(), FaultKind::Unauthorized);

    let snap = client.store().auth.snapshot().await;
    assert_eq!(snap.error.unwrap().kind, FaultKind::Unauthorized);
}

#[tokio::test]
#[ignore]
async fn test_watchlist_add_and_remove() {
    let client = signed_in_client().await;
    let coin_id = CoinId::from("ethereum");

    let with = client
        .watchlists()
        .add_coin(&coin_id)
        .await
        .expect("add should succeed");
    assert!(with.contains(&coin_id));

    let without = client
        .watchlists()
        .remove_coin(&coin_id)
        .await
        .expect("remove should succeed");
    assert!(!without.contains(&coin_id));
}

#[tokio::test]
#[ignore]
async fn test_wallet_and_transactions() {
    let client = signed_in_client().await;
    let scope = Scope::new();

    let wallet = client
        .wallets()
        .fetch(&scope)
        .await
        .expect("wallet should succeed");
    assert!(wallet.balance >= rust_decimal::Decimal::ZERO);

    client
        .wallets()
        .transactions(&scope)
        .await
        .expect("transactions should succeed");
}

#[tokio::test]
#[ignore]
async fn test_logout_clears_session() {
    let client = signed_in_client().await;
    client.auth().logout().await;

    assert!(!client.auth().is_authenticated().await);
    assert!(client.store().auth.snapshot().await.is_pristine());
    assert!(client.store().wallet.snapshot().await.is_pristine());
}
