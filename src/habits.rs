use crate::day::DayKey;
use crate::errors::EngineError;
use crate::events::{HABIT_TARGET_XP_BONUS, Notification, Outcome};
use crate::models::{Frequency, Habit, HabitId};
use crate::store::{Store, next_id};
use std::collections::BTreeMap;
use tracing::debug;

impl Store {
    pub fn add_habit(
        &mut self,
        now_ms: i64,
        name: &str,
        icon: &str,
        frequency: Frequency,
        target: u32,
    ) -> Result<Outcome, EngineError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("rejected habit with empty name");
            return Err(EngineError::validation("Please enter a habit name!"));
        }
        if target == 0 {
            return Err(EngineError::validation("Habit target must be at least 1"));
        }

        let id = next_id(self.habits.iter().map(|habit| habit.id), now_ms);
        self.habits.push(Habit {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            frequency,
            target,
            current: 0,
            streak: 0,
            history: BTreeMap::new(),
        });

        Ok(Outcome::changed(vec![Notification::HabitAdded { id }]))
    }

    /// Bumps the period count by one, never past the target.
    ///
    /// The streak is credited on the call that lifts `current` to `target`.
    /// Nothing remembers that the period was already credited, so a reset
    /// followed by new increments on the same day credits it again.
    pub fn increment_habit(&mut self, today: DayKey, id: HabitId) -> Outcome {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return Outcome::unchanged();
        };
        if habit.current >= habit.target {
            return Outcome::unchanged();
        }

        habit.current += 1;
        habit.history.insert(today, habit.current);

        let mut notifications = Vec::new();
        if habit.current >= habit.target {
            habit.streak += 1;
            notifications.push(Notification::HabitTargetReached {
                id,
                streak: habit.streak,
            });
            notifications.push(Notification::XpGained {
                xp: HABIT_TARGET_XP_BONUS,
            });
        }

        Outcome::changed(notifications)
    }

    /// Zeroes the period count; streak and history are left alone.
    pub fn reset_habit_progress(&mut self, id: HabitId) -> Outcome {
        match self.habits.iter_mut().find(|habit| habit.id == id) {
            Some(habit) => {
                habit.current = 0;
                Outcome::changed(Vec::new())
            }
            None => Outcome::unchanged(),
        }
    }

    /// Callers are responsible for obtaining confirmation first.
    pub fn delete_habit(&mut self, id: HabitId) -> Outcome {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return Outcome::unchanged();
        }
        Outcome::changed(vec![Notification::HabitDeleted { id }])
    }
}
