//! Cancelable one-second tick source for the countdown timer.
//!
//! The TUI event loop is synchronous (crossterm poll-based); the periodic
//! tick lives in a background tokio task and reaches the loop as [`Tick`]
//! events over a bounded mpsc channel. The [`Ticker`] handle is the single
//! owner of that task: dropping it aborts the task, so no exit path can
//! leave a periodic callback running.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// One tick of the countdown clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Bounded capacity for in-flight ticks. The consumer drains every frame,
/// so a small buffer suffices; missed ticks are skipped, not replayed.
const TICK_CHANNEL_CAPACITY: usize = 8;

/// Handle owning the background tick task.
///
/// The task is aborted when the handle is dropped or [`stop`](Self::stop)
/// is called; receivers observe the channel closing.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Cancels the tick task.
    ///
    /// Equivalent to dropping the handle; provided so call sites can name
    /// the state transition.
    pub fn stop(self) {
        self.handle.abort();
    }

    /// Whether the tick task has already terminated.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns a tick task firing every `period`.
///
/// The first tick arrives one full `period` after the call (never
/// immediately), so a fresh session lasts its full wall-clock length. The
/// task exits on its own if the receiver is dropped.
#[must_use]
pub fn spawn(period: Duration) -> (Ticker, mpsc::Receiver<Tick>) {
    let (tx, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
    let handle = tokio::spawn(async move {
        let mut interval = time::interval_at(time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Tick).await.is_err() {
                // Receiver gone; nothing left to drive.
                break;
            }
        }
    });
    (Ticker { handle }, rx)
}
