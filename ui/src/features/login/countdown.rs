//! Scoped one-second countdown backing the verification-code cooldown.
//!
//! `countdown` returns the ticking future and a guard. Whoever owns the
//! guard owns the countdown: cancelling or dropping it aborts the future,
//! after which no further tick is delivered.

use futures::future::{abortable, AbortHandle, LocalBoxFuture};
use futures::FutureExt;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::{sleep, Duration};

const TICK_MS: u32 = 1_000;

/// Cancels the associated countdown when cancelled or dropped
#[derive(Debug)]
pub struct CountdownGuard {
    handle: AbortHandle,
}

impl CountdownGuard {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for CountdownGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Count down from `seconds`, calling `on_tick` with the remaining seconds
/// once per second. The last call receives 0, then the future completes.
pub fn countdown<F>(seconds: u32, mut on_tick: F) -> (LocalBoxFuture<'static, ()>, CountdownGuard)
where
    F: FnMut(u32) + 'static,
{
    let ticking = async move {
        let mut remaining = seconds;
        while remaining > 0 {
            wait_one_tick().await;
            remaining -= 1;
            on_tick(remaining);
        }
    };

    let (ticking, handle) = abortable(ticking);
    (ticking.map(|_| ()).boxed_local(), CountdownGuard { handle })
}

#[cfg(target_arch = "wasm32")]
async fn wait_one_tick() {
    TimeoutFuture::new(TICK_MS).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn wait_one_tick() {
    sleep(Duration::from_millis(u64::from(TICK_MS))).await;
}
