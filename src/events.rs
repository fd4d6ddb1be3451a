use crate::day::DayKey;
use crate::models::{HabitId, TaskId};
use serde::{Deserialize, Serialize};

/// Fixed XP bonus announced when a habit reaches its period target.
pub const HABIT_TARGET_XP_BONUS: u32 = 20;

/// Side effects produced by a store mutation.
///
/// Engines never render; they hand these back to whoever drove the mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    XpGained { xp: u32 },
    TaskAdded { id: TaskId },
    TaskUpdated { id: TaskId },
    TaskDeleted { id: TaskId },
    HabitAdded { id: HabitId },
    HabitTargetReached { id: HabitId, streak: u32 },
    HabitDeleted { id: HabitId },
    DayRolledOver {
        previous: Option<DayKey>,
        today: DayKey,
        folded_xp: u64,
    },
}

/// Result of a store mutation. `changed` is false when the target id was
/// not found or a guard turned the call into a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub notifications: Vec<Notification>,
}

impl Outcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed(notifications: Vec<Notification>) -> Self {
        Self {
            changed: true,
            notifications,
        }
    }
}
