use crate::day::DayKey;
use crate::events::{Notification, Outcome};
use crate::models::Frequency;
use crate::store::Store;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RolloverPolicy {
    /// Also zero weekly habits when the rollover lands in a new ISO week.
    pub reset_weekly: bool,
}

impl Store {
    /// Compares the last seen day with `today` and applies the day boundary
    /// once. Calling it again on the same day is a no-op.
    pub fn check_date_change(&mut self, today: DayKey, policy: RolloverPolicy) -> Outcome {
        let previous = self.last_date;
        if previous == Some(today) {
            return Outcome::unchanged();
        }

        let new_week = previous.is_some_and(|day| day.week_start() != today.week_start());
        for habit in &mut self.habits {
            let resets = match habit.frequency {
                Frequency::Daily => true,
                Frequency::Weekly => policy.reset_weekly && new_week,
            };
            if resets {
                habit.current = 0;
            }
        }

        let folded_xp: u64 = match previous {
            Some(day) => self
                .tasks
                .iter()
                .filter(|task| task.date == day && task.completed)
                .map(|task| u64::from(task.xp))
                .sum(),
            None => 0,
        };
        self.lifetime_xp += folded_xp;
        self.last_date = Some(today);
        self.record_daily_progress(today);

        info!(
            previous = ?previous.map(|day| day.to_string()),
            today = %today,
            folded_xp,
            "day rolled over"
        );

        Outcome::changed(vec![Notification::DayRolledOver {
            previous,
            today,
            folded_xp,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn day(d: u32) -> DayKey {
        DayKey::from_ymd(2026, 10, d).unwrap()
    }

    fn store_on(last: DayKey) -> Store {
        let mut store = Store::new();
        store.last_date = Some(last);
        store
            .add_habit(1, "Exercise", "💪", Frequency::Daily, 1)
            .unwrap();
        store
            .add_habit(2, "Long run", "🏃", Frequency::Weekly, 3)
            .unwrap();
        store.increment_habit(last, 1);
        store.increment_habit(last, 2);
        store
    }

    #[test]
    fn same_day_is_noop() {
        let mut store = store_on(day(15));
        let snapshot = store.clone();
        let outcome = store.check_date_change(day(15), RolloverPolicy::default());
        assert!(!outcome.changed);
        assert_eq!(store, snapshot);
    }

    #[test]
    fn resets_daily_habits_and_folds_previous_xp() {
        let mut store = store_on(day(14));
        store.add_task(day(14), 10, "done", Priority::High, 25).unwrap();
        store.add_task(day(14), 11, "open", Priority::Low, 10).unwrap();
        store.add_task(day(13), 12, "older", Priority::Low, 50).unwrap();
        store.toggle_task(day(14), 10);
        store.toggle_task(day(13), 12);

        let outcome = store.check_date_change(day(15), RolloverPolicy::default());

        let daily = &store.habits()[0];
        assert_eq!(daily.current, 0);
        assert_eq!(daily.streak, 1);
        assert_eq!(store.habits()[1].current, 1);
        assert_eq!(store.stored_lifetime_xp(), 25);
        assert_eq!(store.last_date(), Some(day(15)));
        assert_eq!(store.daily_progress().get(&day(15)), Some(&0));
        assert_eq!(
            outcome.notifications,
            vec![Notification::DayRolledOver {
                previous: Some(day(14)),
                today: day(15),
                folded_xp: 25,
            }]
        );

        let again = store.check_date_change(day(15), RolloverPolicy::default());
        assert!(!again.changed);
        assert_eq!(store.stored_lifetime_xp(), 25);
    }

    #[test]
    fn first_check_folds_nothing() {
        let mut store = Store::new();
        store.add_task(day(15), 1, "a", Priority::Low, 10).unwrap();
        store.toggle_task(day(15), 1);

        store.check_date_change(day(15), RolloverPolicy::default());
        assert_eq!(store.stored_lifetime_xp(), 0);
        assert_eq!(store.last_date(), Some(day(15)));
    }

    #[test]
    fn weekly_reset_only_when_enabled_and_week_changes() {
        let policy = RolloverPolicy { reset_weekly: true };

        // Wednesday to Thursday, same ISO week.
        let mut store = store_on(day(14));
        store.check_date_change(day(15), policy);
        assert_eq!(store.habits()[1].current, 1);

        // Sunday to Monday.
        let mut store = store_on(day(18));
        store.check_date_change(day(19), policy);
        assert_eq!(store.habits()[1].current, 0);
    }
}
