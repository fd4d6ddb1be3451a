use crate::day::DayKey;
use crate::errors::EngineError;
use crate::events::{Notification, Outcome};
use crate::models::{Priority, Task, TaskId};
use crate::store::{Store, next_id};
use tracing::debug;

impl Store {
    /// Today's quests in insertion order. Every aggregate is computed over
    /// this view; tasks dated other days are invisible.
    pub fn today_tasks(&self, today: DayKey) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.date == today)
    }

    pub fn list_today_tasks(&self, today: DayKey) -> Vec<Task> {
        self.today_tasks(today).cloned().collect()
    }

    pub fn add_task(
        &mut self,
        today: DayKey,
        now_ms: i64,
        text: &str,
        priority: Priority,
        xp: u32,
    ) -> Result<Outcome, EngineError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("rejected quest with empty name");
            return Err(EngineError::validation("Please enter a quest name!"));
        }

        let id = next_id(self.tasks.iter().map(|task| task.id), now_ms);
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            priority,
            xp,
            date: today,
        });
        self.record_daily_progress(today);

        Ok(Outcome::changed(vec![Notification::TaskAdded { id }]))
    }

    pub fn toggle_task(&mut self, today: DayKey, id: TaskId) -> Outcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Outcome::unchanged();
        };

        task.completed = !task.completed;
        let mut notifications = Vec::new();
        if task.completed {
            notifications.push(Notification::XpGained { xp: task.xp });
        }
        self.record_daily_progress(today);

        Outcome::changed(notifications)
    }

    /// Replaces the editable fields. Unlike `add_task` the text is not
    /// checked for emptiness.
    pub fn update_task(
        &mut self,
        today: DayKey,
        id: TaskId,
        text: &str,
        priority: Priority,
        xp: u32,
    ) -> Outcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Outcome::unchanged();
        };

        task.text = text.trim().to_string();
        task.priority = priority;
        task.xp = xp;
        self.record_daily_progress(today);

        Outcome::changed(vec![Notification::TaskUpdated { id }])
    }

    /// Callers are responsible for obtaining confirmation first.
    pub fn delete_task(&mut self, today: DayKey, id: TaskId) -> Outcome {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Outcome::unchanged();
        }
        self.record_daily_progress(today);

        Outcome::changed(vec![Notification::TaskDeleted { id }])
    }
}
