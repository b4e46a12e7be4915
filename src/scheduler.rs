use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

/// Drive `cycle` once per `period`, starting immediately.
///
/// The cycle future is awaited to completion before the next tick is
/// taken, so two cycles can never run at once. When a cycle overruns its
/// period the backed-up ticks are skipped, not queued, which keeps a slow
/// network from causing a burst of catch-up refreshes.
///
/// State is owned by the loop and handed to each cycle, which hands it
/// back alongside its outcome. A failed cycle is logged and the loop
/// waits for the next tick; it never exits.
pub async fn run_refresh_loop<S, F, Fut, E>(period: Duration, mut state: S, mut cycle: F)
where
    F: FnMut(S) -> Fut,
    Fut: Future<Output = (S, Result<(), E>)>,
    E: Display,
{
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        debug!("refresh tick");

        let (next_state, outcome) = cycle(state).await;
        state = next_state;

        if let Err(e) = outcome {
            warn!("refresh failed: {}; keeping the previous page until the next tick", e);
        }
    }
}
