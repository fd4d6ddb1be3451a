use crate::day::DayKey;
use crate::errors::EngineError;
use crate::events::Notification;
use crate::models::{Habit, Task};
use crate::rollover::RolloverPolicy;
use crate::seed;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use tracing::{debug, error};

pub const TASKS_KEY: &str = "tasks";
pub const HABITS_KEY: &str = "habits";
pub const DAILY_PROGRESS_KEY: &str = "dailyProgress";
pub const LIFETIME_XP_KEY: &str = "lifetimeXP";
pub const LAST_DATE_KEY: &str = "lastDate";

/// Flat string-to-string namespace the store is serialized into.
///
/// Every value is itself a string: collections are JSON text, the XP scalar
/// is a decimal integer and the last-seen date is a `YYYY-MM-DD` day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalStorage {
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.items.insert(key.to_string(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Owner of every piece of tracker state.
///
/// Engines mutate it through the `impl Store` blocks in `tasks`, `habits` and
/// `rollover`; everyone else gets read access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub(crate) tasks: Vec<Task>,
    pub(crate) habits: Vec<Habit>,
    pub(crate) daily_progress: BTreeMap<DayKey, u8>,
    pub(crate) lifetime_xp: u64,
    pub(crate) last_date: Option<DayKey>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn daily_progress(&self) -> &BTreeMap<DayKey, u8> {
        &self.daily_progress
    }

    /// Persisted lifetime scalar, without today's completions.
    pub fn stored_lifetime_xp(&self) -> u64 {
        self.lifetime_xp
    }

    pub fn last_date(&self) -> Option<DayKey> {
        self.last_date
    }

    /// Decodes each entry independently; a missing or unreadable entry falls
    /// back to its empty value.
    pub fn from_storage(storage: &LocalStorage) -> Self {
        let lifetime_xp = storage
            .get_item(LIFETIME_XP_KEY)
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(value) => Some(value),
                Err(err) => {
                    error!("failed to parse {LIFETIME_XP_KEY}: {err}");
                    None
                }
            })
            .unwrap_or(0);

        let last_date = storage
            .get_item(LAST_DATE_KEY)
            .and_then(|raw| match raw.parse::<DayKey>() {
                Ok(day) => Some(day),
                Err(err) => {
                    error!("failed to parse {LAST_DATE_KEY}: {err}");
                    None
                }
            });

        Self {
            tasks: decode_entry(storage, TASKS_KEY),
            habits: decode_entry(storage, HABITS_KEY),
            daily_progress: decode_entry(storage, DAILY_PROGRESS_KEY),
            lifetime_xp,
            last_date,
        }
    }

    pub fn write_to(&self, storage: &mut LocalStorage) -> Result<(), EngineError> {
        storage.set_item(TASKS_KEY, serde_json::to_string(&self.tasks)?);
        storage.set_item(HABITS_KEY, serde_json::to_string(&self.habits)?);
        storage.set_item(DAILY_PROGRESS_KEY, serde_json::to_string(&self.daily_progress)?);
        storage.set_item(LIFETIME_XP_KEY, self.lifetime_xp.to_string());
        match self.last_date {
            Some(day) => storage.set_item(LAST_DATE_KEY, day.to_string()),
            None => storage.remove_item(LAST_DATE_KEY),
        }
        Ok(())
    }

    pub fn to_storage(&self) -> Result<LocalStorage, EngineError> {
        let mut storage = LocalStorage::default();
        self.write_to(&mut storage)?;
        Ok(storage)
    }

    /// Records today's completion percentage and serializes everything.
    pub fn save(&mut self, today: DayKey) -> Result<LocalStorage, EngineError> {
        self.record_daily_progress(today);
        self.to_storage()
    }

    /// Rebuilds a store at process start: decode, seed empty collections,
    /// record today's progress, then run the rollover check.
    pub fn open(
        storage: &LocalStorage,
        today: DayKey,
        now_ms: i64,
        seed_samples: bool,
        policy: RolloverPolicy,
    ) -> (Self, Vec<Notification>) {
        let mut store = Self::from_storage(storage);
        if seed_samples {
            seed::seed_if_empty(&mut store, today, now_ms);
        }
        store.record_daily_progress(today);

        let outcome = store.check_date_change(today, policy);
        debug!(
            tasks = store.tasks.len(),
            habits = store.habits.len(),
            "store opened"
        );
        (store, outcome.notifications)
    }
}

fn decode_entry<T>(storage: &LocalStorage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match storage.get_item(key) {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse stored {key}: {err}");
                T::default()
            }
        },
        None => T::default(),
    }
}

/// Creation-time identifier that stays strictly above every id in use.
pub(crate) fn next_id(existing: impl Iterator<Item = i64>, now_ms: i64) -> i64 {
    match existing.max() {
        Some(max) if max >= now_ms => max + 1,
        _ => now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, Priority};

    fn day(d: u32) -> DayKey {
        DayKey::from_ymd(2026, 10, d).unwrap()
    }

    fn sample_store() -> Store {
        let mut store = Store::new();
        store.tasks.push(Task {
            id: 1,
            text: "Write report".into(),
            completed: true,
            priority: Priority::High,
            xp: 25,
            date: day(15),
        });
        store.habits.push(Habit {
            id: 2,
            name: "Read".into(),
            icon: "📚".into(),
            frequency: Frequency::Weekly,
            target: 3,
            current: 1,
            streak: 4,
            history: BTreeMap::from([(day(15), 1)]),
        });
        store.daily_progress.insert(day(14), 50);
        store.lifetime_xp = 120;
        store.last_date = Some(day(15));
        store
    }

    #[test]
    fn storage_layout_uses_expected_keys() {
        let storage = sample_store().to_storage().unwrap();
        assert_eq!(storage.get_item(LIFETIME_XP_KEY), Some("120"));
        assert_eq!(storage.get_item(LAST_DATE_KEY), Some("2026-10-15"));
        assert_eq!(storage.get_item(DAILY_PROGRESS_KEY), Some(r#"{"2026-10-14":50}"#));
        assert!(storage.get_item(TASKS_KEY).unwrap().contains(r#""priority":"high""#));
        assert!(storage.get_item(HABITS_KEY).unwrap().contains(r#""history":{"2026-10-15":1}"#));
    }

    #[test]
    fn reload_reproduces_state() {
        let store = sample_store();
        let reloaded = Store::from_storage(&store.to_storage().unwrap());
        assert_eq!(reloaded, store);
    }

    #[test]
    fn corrupt_entries_fall_back_to_empty() {
        let mut storage = sample_store().to_storage().unwrap();
        storage.set_item(TASKS_KEY, "{not json");
        storage.set_item(LIFETIME_XP_KEY, "lots");

        let store = Store::from_storage(&storage);
        assert!(store.tasks().is_empty());
        assert_eq!(store.stored_lifetime_xp(), 0);
        assert_eq!(store.habits().len(), 1);
    }

    #[test]
    fn open_seeds_first_load() {
        let (store, _) = Store::open(
            &LocalStorage::default(),
            day(15),
            1_000,
            true,
            RolloverPolicy::default(),
        );
        assert_eq!(store.tasks().len(), 4);
        assert_eq!(store.habits().len(), 4);
        assert_eq!(store.last_date(), Some(day(15)));
        assert_eq!(store.daily_progress().get(&day(15)), Some(&0));
    }

    #[test]
    fn next_id_never_collides() {
        assert_eq!(next_id([].into_iter(), 500), 500);
        assert_eq!(next_id([10, 900].into_iter(), 500), 901);
        assert_eq!(next_id([10].into_iter(), 500), 500);
    }
}
