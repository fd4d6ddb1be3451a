use crate::day::DayKey;
use crate::events::Notification;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type TaskId = i64;
pub type HabitId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub xp: u32,
    pub date: DayKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub icon: String,
    pub frequency: Frequency,
    pub target: u32,
    pub current: u32,
    pub streak: u32,
    #[serde(default)]
    pub history: BTreeMap<DayKey, u32>,
}

impl Habit {
    /// Share of the period target reached so far, 0-100.
    pub fn progress_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.target) * 100.0
    }
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_task_xp")]
    pub xp: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub text: String,
    pub priority: Priority,
    pub xp: u32,
}

#[derive(Debug, Deserialize)]
pub struct NewHabitRequest {
    pub name: String,
    #[serde(default = "default_habit_icon")]
    pub icon: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default = "default_habit_target")]
    pub target: u32,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// Months to move from `year`/`month`, negative for earlier.
    pub offset: Option<i32>,
}

fn default_task_xp() -> u32 {
    10
}

fn default_habit_icon() -> String {
    "💪".to_string()
}

fn default_habit_target() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub date: DayKey,
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub daily_progress: BTreeMap<DayKey, u8>,
    pub lifetime_xp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub date: DayKey,
    pub completed_today: usize,
    pub total_today: usize,
    pub daily_percent: u8,
    pub streak: u32,
    pub lifetime_xp: u64,
    pub weekly_average: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub changed: bool,
    pub notifications: Vec<Notification>,
    pub stats: StatsResponse,
}

#[derive(Debug, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub last_7_days: Vec<SeriesPoint>,
    pub habit_progress: Vec<SeriesPoint>,
    pub last_30_days: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionBucket {
    None,
    Low,
    Medium,
    High,
}

impl CompletionBucket {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0 => Self::None,
            1..=49 => Self::Low,
            50..=79 => Self::Medium,
            _ => Self::High,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: DayKey,
    pub day: u32,
    pub completion: u8,
    pub bucket: CompletionBucket,
    pub is_today: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}
