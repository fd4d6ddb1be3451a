use crate::day::DayKey;
use crate::models::{Frequency, Habit, Priority, Task};
use crate::store::Store;
use std::collections::BTreeMap;
use tracing::info;

const SAMPLE_QUESTS: [(&str, Priority, u32); 4] = [
    ("Complete morning workout routine", Priority::High, 25),
    ("Study programming for 2 hours", Priority::High, 30),
    ("Review project documentation", Priority::Medium, 15),
    ("Organize workspace", Priority::Low, 10),
];

const SAMPLE_HABITS: [(&str, &str, u32); 4] = [
    ("Morning Exercise", "💪", 1),
    ("Read 30 Minutes", "📚", 1),
    ("Drink 8 Glasses of Water", "💧", 8),
    ("Code Practice", "💻", 1),
];

/// Fills whichever collection is empty with starter content.
pub fn seed_if_empty(store: &mut Store, today: DayKey, now_ms: i64) {
    if store.tasks.is_empty() {
        store.tasks = SAMPLE_QUESTS
            .iter()
            .zip(1..)
            .map(|(&(text, priority, xp), offset)| Task {
                id: now_ms + offset,
                text: text.to_string(),
                completed: false,
                priority,
                xp,
                date: today,
            })
            .collect();
        info!(count = store.tasks.len(), "seeded sample quests");
    }

    if store.habits.is_empty() {
        store.habits = SAMPLE_HABITS
            .iter()
            .zip(1..)
            .map(|(&(name, icon, target), offset)| Habit {
                id: now_ms + offset,
                name: name.to_string(),
                icon: icon.to_string(),
                frequency: Frequency::Daily,
                target,
                current: 0,
                streak: 0,
                history: BTreeMap::new(),
            })
            .collect();
        info!(count = store.habits.len(), "seeded sample habits");
    }
}
