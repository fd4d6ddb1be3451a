use crate::day::DayKey;
use crate::state::AppState;
use crate::storage::save_store;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error};

/// Periodically writes the full store to disk.
pub fn spawn_persist_timer(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            debug!("periodic persist");
            if let Err(err) = state.persist(DayKey::today()).await {
                error!("periodic persist failed: {err}");
            }
        }
    })
}

/// Periodically runs the day-rollover check; persists only when the day
/// actually changed.
pub fn spawn_rollover_timer(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let today = DayKey::today();
            let mut store = state.store.lock().await;
            let outcome = store.check_date_change(today, state.policy);
            if !outcome.changed {
                continue;
            }
            if let Err(err) = save_store(&state.data_path, &mut store, today).await {
                error!("failed to persist after rollover: {err}");
            }
        }
    })
}
