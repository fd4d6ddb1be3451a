use crate::day::DayKey;
use crate::models::{
    CalendarDay, CalendarResponse, ChartsResponse, CompletionBucket, SeriesPoint, StatsResponse,
};
use crate::store::Store;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

const HABIT_LABEL_CHARS: usize = 15;

impl Store {
    /// Stores today's completion percentage in the daily progress map.
    pub fn record_daily_progress(&mut self, today: DayKey) {
        let percent = daily_completion(self, today);
        self.daily_progress.insert(today, percent);
    }
}

pub fn build_stats(store: &Store) -> StatsResponse {
    build_stats_at(DayKey::today(), store)
}

pub fn build_stats_at(today: DayKey, store: &Store) -> StatsResponse {
    let (completed_today, total_today) = today_counts(store, today);

    StatsResponse {
        date: today,
        completed_today,
        total_today,
        daily_percent: percent_of(completed_today, total_today),
        streak: calculate_streak(store.daily_progress()),
        lifetime_xp: lifetime_xp(store, today),
        weekly_average: weekly_average(store.daily_progress(), today),
    }
}

fn today_counts(store: &Store, today: DayKey) -> (usize, usize) {
    store
        .today_tasks(today)
        .fold((0, 0), |(done, total), task| {
            (done + usize::from(task.completed), total + 1)
        })
}

fn percent_of(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u8
}

/// Rounded share of today's tasks that are completed; 0 with no tasks.
pub fn daily_completion(store: &Store, today: DayKey) -> u8 {
    let (completed, total) = today_counts(store, today);
    percent_of(completed, total)
}

/// Consecutive fully-completed days, newest recorded day first.
///
/// Only days present in the map are inspected, so a day with no entry
/// neither extends nor breaks the run.
pub fn calculate_streak(progress: &BTreeMap<DayKey, u8>) -> u32 {
    progress
        .values()
        .rev()
        .take_while(|percent| **percent >= 100)
        .count() as u32
}

/// Persisted lifetime XP plus the XP of quests completed today.
pub fn lifetime_xp(store: &Store, today: DayKey) -> u64 {
    let today_xp: u64 = store
        .today_tasks(today)
        .filter(|task| task.completed)
        .map(|task| u64::from(task.xp))
        .sum();
    store.stored_lifetime_xp() + today_xp
}

/// Mean completion over the seven days ending today, missing days as 0.
pub fn weekly_average(progress: &BTreeMap<DayKey, u8>, today: DayKey) -> u8 {
    let sum: u32 = (0..7)
        .map(|offset| u32::from(percent_on(progress, today.days_before(offset))))
        .sum();
    (f64::from(sum) / 7.0).round() as u8
}

fn percent_on(progress: &BTreeMap<DayKey, u8>, day: DayKey) -> u8 {
    progress.get(&day).copied().unwrap_or(0)
}

pub fn build_charts_at(today: DayKey, store: &Store) -> ChartsResponse {
    let progress = store.daily_progress();

    let last_7_days = (0..7)
        .rev()
        .map(|offset| {
            let day = today.days_before(offset);
            SeriesPoint {
                label: day.short_label(),
                value: f64::from(percent_on(progress, day)),
            }
        })
        .collect();

    let habit_progress = store
        .habits()
        .iter()
        .map(|habit| SeriesPoint {
            label: habit.name.chars().take(HABIT_LABEL_CHARS).collect(),
            value: habit.progress_percent(),
        })
        .collect();

    let last_30_days = (0..30)
        .rev()
        .map(|offset| {
            let day = today.days_before(offset);
            SeriesPoint {
                label: day.day_of_month().to_string(),
                value: f64::from(percent_on(progress, day)),
            }
        })
        .collect();

    ChartsResponse {
        last_7_days,
        habit_progress,
        last_30_days,
    }
}

/// Month grid for the calendar heatmap, weeks starting on Sunday.
///
/// Returns `None` for an invalid year/month.
pub fn build_calendar(
    today: DayKey,
    store: &Store,
    year: i32,
    month: u32,
) -> Option<CalendarResponse> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    let days_in_month = (next - first).num_days() as u32;
    let progress = store.daily_progress();

    let days = (1..=days_in_month)
        .filter_map(|day| DayKey::from_ymd(year, month, day))
        .map(|date| {
            let completion = percent_on(progress, date);
            CalendarDay {
                date,
                day: date.day_of_month(),
                completion,
                bucket: CompletionBucket::for_percent(completion),
                is_today: date == today,
            }
        })
        .collect();

    Some(CalendarResponse {
        year,
        month,
        title: first.format("%B %Y").to_string(),
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    })
}

/// Moves a (year, month) pair by `delta` months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta as u32))?
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))?
    };
    Some((shifted.year(), shifted.month()))
}
