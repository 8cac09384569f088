//! Resource snapshot store — async request/state synchronization.
//!
//! Every backend resource (wallet, watchlist, coin list, …) is projected onto
//! a [`Snapshot`] owned by a [`Slice`]. An operation marks the snapshot
//! loading, performs one network call, and commits exactly one of two
//! terminal transitions:
//!
//! - **success** — `data` fully replaced, `loading=false`, `error=None`
//! - **failure** — `error` set, `loading=false`, `data` untouched
//!   (stale-while-revalidate)
//!
//! Slices are single-writer, many-reader: presentation code observes
//! snapshots via [`Slice::subscribe`] and never mutates them directly.
//!
//! Concurrent reads are not deduplicated — both run and the last to resolve
//! wins. Mutations are serialized per slice: a second mutating call while one
//! is in flight is rejected with [`SdkError::MutationInFlight`]. Read
//! operations take a [`Scope`] so a resolution that outlives its consumer is
//! dropped instead of applied.

pub mod debounce;

pub use debounce::{Debouncer, SEARCH_QUIET_PERIOD};

use crate::error::{Fault, SdkError};
use async_lock::{Mutex, RwLock};
use futures_channel::mpsc;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// The `{data, loading, error}` tuple a presentation layer observes.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Last successfully fetched payload; `None` until the first success.
    pub data: Option<T>,
    /// True strictly between dispatch and resolution.
    pub loading: bool,
    /// Last failure; cleared on the next dispatch and on success.
    pub error: Option<Fault>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Snapshot<T> {
    /// True if this snapshot has never seen a request cycle.
    pub fn is_pristine(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }
}

// ─── Scope ───────────────────────────────────────────────────────────────────

/// Cancellation scope tied to a consumer's lifetime.
///
/// A screen creates one `Scope`, passes it to every read it dispatches, and
/// calls [`Scope::cancel`] on teardown. In-flight requests are not aborted,
/// but their resolutions are dropped instead of applied to shared state.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    cancelled: Arc<AtomicBool>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// ─── Slice ───────────────────────────────────────────────────────────────────

/// State + transition mechanism for one backend resource.
pub struct Slice<T> {
    name: &'static str,
    state: RwLock<Snapshot<T>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Snapshot<T>>>>,
    mutation_gate: Mutex<()>,
}

impl<T: Clone> Slice<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RwLock::new(Snapshot::default()),
            subscribers: Mutex::new(Vec::new()),
            mutation_gate: Mutex::new(()),
        }
    }

    /// Resource name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current snapshot (cloned).
    pub async fn snapshot(&self) -> Snapshot<T> {
        self.state.read().await.clone()
    }

    /// Current data, if any.
    pub async fn data(&self) -> Option<T> {
        self.state.read().await.data.clone()
    }

    /// Subscribe to snapshot changes. The current snapshot is delivered
    /// immediately, then every transition until the receiver is dropped.
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<Snapshot<T>> {
        let (tx, rx) = mpsc::unbounded();
        let current = self.snapshot().await;
        let _ = tx.unbounded_send(current);
        self.subscribers.lock().await.push(tx);
        rx
    }

    /// Reset to the pristine snapshot (e.g. on logout).
    pub async fn reset(&self) {
        let snap = {
            let mut state = self.state.write().await;
            *state = Snapshot::default();
            state.clone()
        };
        self.publish(snap).await;
    }

    /// Drive one read operation through the snapshot lifecycle.
    ///
    /// The result is also returned so callers can chain follow-up work
    /// independent of store subscription.
    pub async fn run<F>(&self, op: F) -> Result<T, SdkError>
    where
        F: Future<Output = Result<T, SdkError>>,
    {
        self.begin().await;
        self.resolve(op.await).await
    }

    /// Like [`Slice::run`], but the resolution is dropped if `scope` was
    /// cancelled while the request was in flight.
    pub async fn run_scoped<F>(&self, scope: &Scope, op: F) -> Result<T, SdkError>
    where
        F: Future<Output = Result<T, SdkError>>,
    {
        if scope.is_cancelled() {
            return Err(SdkError::Cancelled);
        }
        self.begin().await;
        let result = op.await;
        if scope.is_cancelled() {
            tracing::debug!(resource = self.name, "dropping resolution for cancelled scope");
            self.settle().await;
            return Err(SdkError::Cancelled);
        }
        self.resolve(result).await
    }

    /// Drive one mutating operation, serialized per slice.
    ///
    /// Rejects with [`SdkError::MutationInFlight`] if another mutation on
    /// this resource has not yet resolved. Reads stay concurrent.
    pub async fn run_mutation<F>(&self, op: F) -> Result<T, SdkError>
    where
        F: Future<Output = Result<T, SdkError>>,
    {
        let _gate = self
            .mutation_gate
            .try_lock()
            .ok_or(SdkError::MutationInFlight)?;
        self.begin().await;
        self.resolve(op.await).await
    }

    // ── Transitions ──────────────────────────────────────────────────────

    async fn begin(&self) {
        let snap = {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
            state.clone()
        };
        tracing::debug!(resource = self.name, "request dispatched");
        self.publish(snap).await;
    }

    async fn resolve(&self, result: Result<T, SdkError>) -> Result<T, SdkError> {
        match result {
            Ok(value) => {
                let snap = {
                    let mut state = self.state.write().await;
                    state.data = Some(value.clone());
                    state.loading = false;
                    state.error = None;
                    state.clone()
                };
                self.publish(snap).await;
                Ok(value)
            }
            Err(err) => {
                let fault = Fault::from(&err);
                tracing::warn!(
                    resource = self.name,
                    kind = ?fault.kind,
                    "request failed: {}",
                    fault.message
                );
                let snap = {
                    let mut state = self.state.write().await;
                    state.loading = false;
                    state.error = Some(fault);
                    state.clone()
                };
                self.publish(snap).await;
                Err(err)
            }
        }
    }

    /// Clear `loading` without publishing a result — used when a resolution
    /// is dropped for a cancelled scope.
    async fn settle(&self) {
        let snap = {
            let mut state = self.state.write().await;
            state.loading = false;
            state.clone()
        };
        self.publish(snap).await;
    }

    async fn publish(&self, snap: Snapshot<T>) {
        let mut subs = self.subscribers.lock().await;
        subs.retain(|tx| tx.unbounded_send(snap.clone()).is_ok());
    }
}
