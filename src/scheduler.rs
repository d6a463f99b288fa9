use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::{interval, MissedTickBehavior};

/// Completion stamp of one refresh run.
#[derive(Debug, Clone)]
pub struct RefreshTick {
    pub completed_at: DateTime<Local>,
}

impl RefreshTick {
    pub fn now() -> Self {
        Self {
            completed_at: Local::now(),
        }
    }

    /// Wall-clock display format: `HH:MM:SS DD-MM-YYYY`.
    pub fn to_display(&self) -> String {
        self.completed_at.format("%H:%M:%S %d-%m-%Y").to_string()
    }
}

/// Drives the refresh pipeline on a fixed cadence.
///
/// Runs `refresh` immediately, then once per `every`. The loop awaits
/// each run to completion before polling the timer again, so at most
/// one run is ever in flight; ticks that fire while a run is still
/// executing are skipped rather than queued, keeping the cadence
/// aligned instead of bursting after a slow run.
///
/// Never returns. A failed run is the closure's concern (it renders
/// the error); the next tick is the only recovery path.
pub async fn watch<F, Fut>(every: Duration, mut refresh: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut timer = interval(every);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // First tick completes immediately, giving the run-at-start.
        timer.tick().await;
        refresh().await;
    }
}
