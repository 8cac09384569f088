//! Debounce helper for high-frequency user input (search-as-you-type).

use futures_timer::Delay;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Quiet period used by the search screen.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// Collapses a burst of calls into the latest one.
///
/// Each call to [`Debouncer::settle`] starts a quiet-period timer; only the
/// call that is still the newest when its timer fires reports `true`. A
/// keystroke burst therefore triggers exactly one fetch.
pub struct Debouncer {
    quiet: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: AtomicU64::new(0),
        }
    }

    /// Wait out the quiet period. Returns `true` if no newer call arrived
    /// in the meantime (i.e. the caller should fire its request).
    pub async fn settle(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Delay::new(self.quiet).await;
        self.generation.load(Ordering::SeqCst) == generation
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_QUIET_PERIOD)
    }
}
