use quest_tracker::models::{Frequency, Priority};
use quest_tracker::rollover::RolloverPolicy;
use quest_tracker::store::LAST_DATE_KEY;
use quest_tracker::timers::{spawn_persist_timer, spawn_rollover_timer};
use quest_tracker::{AppState, DayKey, Store, load_storage};
use std::path::Path;
use std::time::Duration;
use tokio::time::{Instant, sleep};

const PERIOD: Duration = Duration::from_millis(20);

async fn wait_for_file(path: &Path) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            return true;
        }
        sleep(Duration::from_millis(10)).await;
    }
    false
}

#[tokio::test]
async fn persist_timer_writes_reloadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let today = DayKey::today();

    let mut store = Store::new();
    store.check_date_change(today, RolloverPolicy::default());
    store.add_task(today, 1, "Stretch", Priority::Low, 5).unwrap();
    store.toggle_task(today, 1);
    store
        .add_habit(2, "Water", "💧", Frequency::Daily, 8)
        .unwrap();

    let state = AppState::new(path.clone(), store, RolloverPolicy::default());
    let handle = spawn_persist_timer(state.clone(), PERIOD);

    assert!(wait_for_file(&path).await, "persist timer never wrote");

    // Holding the lock keeps the timer from writing while the file is read.
    let store = state.store.lock().await;
    let reloaded = Store::from_storage(&load_storage(&path).await);
    handle.abort();

    assert_eq!(reloaded, *store);
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.habits().len(), 1);
    assert_eq!(reloaded.last_date(), Some(today));
}

#[tokio::test]
async fn rollover_timer_skips_write_on_same_day() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = Store::new();
    store.check_date_change(DayKey::today(), RolloverPolicy::default());

    let state = AppState::new(path.clone(), store, RolloverPolicy::default());
    let handle = spawn_rollover_timer(state, PERIOD);

    sleep(PERIOD * 10).await;
    handle.abort();

    assert!(!tokio::fs::try_exists(&path).await.unwrap());
}

#[tokio::test]
async fn rollover_timer_saves_new_day() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let today = DayKey::today();
    let yesterday = today.days_before(1);

    let mut store = Store::new();
    store.check_date_change(yesterday, RolloverPolicy::default());
    store
        .add_habit(1, "Read", "📚", Frequency::Daily, 3)
        .unwrap();
    store.increment_habit(yesterday, 1);

    let state = AppState::new(path.clone(), store, RolloverPolicy::default());
    let handle = spawn_rollover_timer(state.clone(), PERIOD);

    assert!(wait_for_file(&path).await, "rollover timer never wrote");

    let store = state.store.lock().await;
    let storage = load_storage(&path).await;
    handle.abort();

    let expected = today.to_string();
    assert_eq!(storage.get_item(LAST_DATE_KEY), Some(expected.as_str()));
    assert_eq!(store.habits()[0].current, 0);
}
