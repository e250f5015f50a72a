use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Interval for re-fetching an open tracking or detail view
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Periodic refresh owned by one page view.
///
/// `start` replaces any running loop and `stop` ends it; both are cheap to
/// call from effects and cleanup handlers.
#[derive(Clone, Debug)]
pub struct AutoRefresh {
    interval_ms: u32,
    generation: Arc<AtomicU64>,
}

impl AutoRefresh {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn start<F>(&self, tick: F)
    where
        F: Fn() + 'static,
    {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        let interval_ms = self.interval_ms;

        wasm_bindgen_futures::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(interval_ms).await;
                if generation.load(Ordering::SeqCst) != my_generation {
                    break;
                }
                tick();
            }
        });
    }

    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for AutoRefresh {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL_MS)
    }
}
