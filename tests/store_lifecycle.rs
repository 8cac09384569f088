//! Client-level lifecycle tests for the resource store.
//!
//! These run fully offline: guards and cancellation short-circuit before the
//! network, and the one test that does reach the transport points at a
//! closed local port so the failure path is exercised deterministically.

use futures_channel::oneshot;
use std::sync::Arc;

use tradex_sdk::prelude::*;

/// A base URL nothing listens on (port 9, discard). Connections are refused
/// immediately, so transport failures resolve fast.
const DEAD_URL: &str = "http://127.0.0.1:9";

fn dead_client() -> TradexClient {
    TradexClient::builder()
        .base_url(DEAD_URL)
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn test_withdrawal_guard_short_circuits_before_transport() {
    let client = dead_client();

    // No payment details on file — the request must fail with a validation
    // fault without ever dialing the (dead) endpoint.
    let err = client.withdrawals().request(500).await.unwrap_err();
    assert_eq!(err.kind(), FaultKind::Validation);

    // The guard fires before dispatch, so the history slice never entered
    // the loading state.
    assert!(client.store().withdrawal_history.snapshot().await.is_pristine());
}

#[tokio::test]
async fn test_transport_failure_lands_in_snapshot() {
    let client = dead_client();
    let scope = Scope::new();

    let err = client.coins().top50(&scope).await.unwrap_err();
    assert_eq!(err.kind(), FaultKind::Transport);

    let snap = client.store().top_coins.snapshot().await;
    assert!(snap.data.is_none());
    assert!(!snap.loading);
    assert_eq!(snap.error.unwrap().kind, FaultKind::Transport);
}

#[tokio::test]
async fn test_chat_failure_leaves_transcript_untouched() {
    let client = dead_client();

    let err = client.chat().send("what is bitcoin?").await.unwrap_err();
    assert_eq!(err.kind(), FaultKind::Transport);

    // The prompt must not be echoed into a failed snapshot.
    assert!(client.store().chat.data().await.is_none());
}

#[tokio::test]
async fn test_logout_resets_every_slice() {
    let client = dead_client();

    // Seed one slice directly, as if a fetch had succeeded earlier.
    client
        .store()
        .orders
        .run(async { Ok(Vec::<Order>::new()) })
        .await
        .unwrap();
    assert!(!client.store().orders.snapshot().await.is_pristine());

    client.auth().logout().await;

    assert!(client.store().orders.snapshot().await.is_pristine());
    assert!(client.store().auth.snapshot().await.is_pristine());
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn test_bearer_token_seeding() {
    let client = TradexClient::builder()
        .base_url(DEAD_URL)
        .bearer_token("persisted-jwt")
        .build()
        .unwrap();
    assert!(client.auth().is_authenticated().await);

    client.auth().logout().await;
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn test_concurrent_reads_last_resolution_wins() {
    let slice: Arc<Slice<u32>> = Arc::new(Slice::new("race"));
    let (tx_slow, rx_slow) = oneshot::channel::<u32>();

    // First read dispatched, held open on the channel.
    let slow = {
        let slice = slice.clone();
        tokio::spawn(async move {
            slice
                .run(async { rx_slow.await.map_err(|e| SdkError::Other(e.to_string())) })
                .await
        })
    };

    // Wait until the slow read is in flight, then run a fast one to
    // completion.
    while !slice.snapshot().await.loading {
        tokio::task::yield_now().await;
    }
    slice.run(async { Ok(2) }).await.unwrap();
    assert_eq!(slice.data().await, Some(2));

    // Now the slow read resolves — it commits last, so it wins.
    tx_slow.send(1).unwrap();
    slow.await.unwrap().unwrap();
    assert_eq!(slice.data().await, Some(1));
}

#[tokio::test]
async fn test_debounced_search_burst_issues_one_request() {
    let client = dead_client();
    let scope = Scope::new();

    // Two keystrokes inside one quiet period: the older call is superseded
    // and returns Ok(None) without touching the network; the newer call
    // proceeds (and here fails against the dead endpoint).
    let coins = client.coins();
    let (older, newer) = tokio::join!(
        coins.search_debounced(&scope, "bit"),
        coins.search_debounced(&scope, "bitcoin"),
    );

    assert!(matches!(older, Ok(None)));
    assert_eq!(newer.unwrap_err().kind(), FaultKind::Transport);

    // Only the winning keyword's request reached the slice.
    let snap = client.store().search.snapshot().await;
    assert!(!snap.loading);
    assert_eq!(snap.error.unwrap().kind, FaultKind::Transport);
}

fn pending_request(id: u64) -> Withdrawal {
    Withdrawal {
        id,
        amount: rust_decimal::Decimal::new(500, 0),
        date: chrono::Utc::now(),
        status: WithdrawalStatus::Pending,
        user: Some(UserSummary {
            id: 2,
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
        }),
    }
}

#[tokio::test]
async fn test_proceed_withdrawal_failure_keeps_pending_list() {
    let client = dead_client();

    // Requests list fetched earlier on the admin screen.
    client
        .store()
        .withdrawal_requests
        .run(async { Ok(vec![pending_request(9)]) })
        .await
        .unwrap();

    let err = client.admin().proceed_withdrawal(9, true).await.unwrap_err();
    assert_eq!(err.kind(), FaultKind::Transport);

    // The approval never reached the server, so the row stays pending and
    // the stale list survives alongside the error.
    let snap = client.store().withdrawal_requests.snapshot().await;
    assert!(snap.data.unwrap()[0].status.is_pending());
    assert!(!snap.loading);
    assert_eq!(snap.error.unwrap().kind, FaultKind::Transport);
}

#[tokio::test]
async fn test_proceed_withdrawal_commits_refetched_list() {
    let client = dead_client();
    client
        .store()
        .withdrawal_requests
        .run(async { Ok(vec![pending_request(9)]) })
        .await
        .unwrap();

    // Drive the approval mutation with a hand-controlled resolution: the
    // slice stays on the stale pending list while the patch + re-fetch are
    // in flight, then holds the re-fetched list once it resolves.
    let (tx, rx) = oneshot::channel::<Vec<Withdrawal>>();
    let bg = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .store()
                .withdrawal_requests
                .run_mutation(async { rx.await.map_err(|e| SdkError::Other(e.to_string())) })
                .await
        })
    };

    while !client.store().withdrawal_requests.snapshot().await.loading {
        tokio::task::yield_now().await;
    }
    let in_flight = client.store().withdrawal_requests.snapshot().await;
    assert!(in_flight.data.unwrap()[0].status.is_pending());

    let accepted = Withdrawal {
        status: WithdrawalStatus::Success,
        ..pending_request(9)
    };
    tx.send(vec![accepted]).unwrap();
    bg.await.unwrap().unwrap();

    let snap = client.store().withdrawal_requests.snapshot().await;
    let rows = snap.data.unwrap();
    assert_eq!(rows[0].id, 9);
    assert_eq!(rows[0].status, WithdrawalStatus::Success);
    assert!(!rows[0].status.is_pending());
    assert!(snap.error.is_none());
}

#[tokio::test]
async fn test_screen_teardown_drops_late_resolution() {
    let client = dead_client();
    let store = client.store();

    // Simulate a wallet screen that fetched, then navigated away before the
    // (never-arriving) response. Pre-populate from an earlier visit.
    store
        .wallet
        .run(async {
            Ok(Wallet {
                id: 1,
                balance: rust_decimal::Decimal::ONE_HUNDRED,
            })
        })
        .await
        .unwrap();

    let scope = Scope::new();
    let result = store
        .wallet
        .run_scoped(&scope, async {
            scope.cancel();
            Ok(Wallet {
                id: 1,
                balance: rust_decimal::Decimal::ZERO,
            })
        })
        .await;

    assert!(matches!(result, Err(SdkError::Cancelled)));
    let snap = store.wallet.snapshot().await;
    assert_eq!(snap.data.unwrap().balance, rust_decimal::Decimal::ONE_HUNDRED);
    assert!(!snap.loading);
    assert!(snap.error.is_none());
}
