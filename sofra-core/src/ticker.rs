//! Once-per-second countdown updates.

use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::calendar::{ClockTime, Countdown, countdown};

const TICK: Duration = Duration::from_secs(1);

/// Background task that recomputes the countdown every second and publishes
/// it on a watch channel.
///
/// The task stops on `cancel()`, when the ticker is dropped, or when every
/// receiver is gone.
pub struct CountdownTicker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Spawn onto the current tokio runtime. `clock` returns wall-clock "now"
    /// in the zone the boundaries are given in.
    pub fn spawn<F>(
        clock: F,
        boundary_a: ClockTime,
        boundary_b: ClockTime,
    ) -> (Self, watch::Receiver<Countdown>)
    where
        F: Fn() -> NaiveDateTime + Send + 'static,
    {
        let (tx, rx) = watch::channel(countdown(clock(), boundary_a, boundary_b));
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    () = token.cancelled() => {
                        debug!("Countdown ticker cancelled");
                        break;
                    }
                    () = tx.closed() => {
                        debug!("Countdown ticker has no receivers left");
                        break;
                    }
                    _ = interval.tick() => {
                        let next = countdown(clock(), boundary_a, boundary_b);
                        tx.send_if_modified(|current| {
                            if *current == next {
                                return false;
                            }
                            *current = next;
                            true
                        });
                    }
                }
            }
        });

        (CountdownTicker { cancel, handle }, rx)
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
