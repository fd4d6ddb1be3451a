use quest_tracker::DayKey;
use quest_tracker::LocalStorage;
use quest_tracker::Store;
use quest_tracker::events::Notification;
use quest_tracker::models::{Frequency, Priority};
use quest_tracker::rollover::RolloverPolicy;
use quest_tracker::stats::{build_stats_at, calculate_streak, weekly_average};
use std::collections::BTreeMap;

fn day(d: u32) -> DayKey {
    DayKey::from_ymd(2026, 10, d).unwrap()
}

#[test]
fn quest_completion_is_banked_after_rollover() {
    let today = day(15);
    let mut store = Store::new();
    store.check_date_change(today, RolloverPolicy::default());

    let outcome = store
        .add_task(today, 1_000, "Write report", Priority::High, 25)
        .unwrap();
    let id = match outcome.notifications.as_slice() {
        [Notification::TaskAdded { id }] => *id,
        other => panic!("unexpected notifications: {other:?}"),
    };

    let toggled = store.toggle_task(today, id);
    assert_eq!(toggled.notifications, vec![Notification::XpGained { xp: 25 }]);

    let stats = build_stats_at(today, &store);
    assert_eq!(stats.daily_percent, 100);
    assert_eq!(stats.lifetime_xp, 25);
    assert_eq!(store.daily_progress().get(&today), Some(&100));

    let tomorrow = day(16);
    store.check_date_change(tomorrow, RolloverPolicy::default());
    assert_eq!(store.stored_lifetime_xp(), 25);

    let next = build_stats_at(tomorrow, &store);
    assert_eq!(next.lifetime_xp, 25);
    assert_eq!(next.total_today, 0);
    assert_eq!(next.daily_percent, 0);
}

#[test]
fn rollover_resets_daily_habit_but_keeps_streak() {
    let mut store = Store::new();
    store.check_date_change(day(14), RolloverPolicy::default());
    store
        .add_habit(1, "Morning Exercise", "💪", Frequency::Daily, 1)
        .unwrap();
    store.add_task(day(14), 10, "ship", Priority::Medium, 15).unwrap();
    store.add_task(day(14), 11, "skip", Priority::Low, 10).unwrap();
    store.toggle_task(day(14), 10);
    store.increment_habit(day(14), 1);
    assert_eq!(store.habits()[0].current, 1);
    assert_eq!(store.habits()[0].streak, 1);

    store.check_date_change(day(15), RolloverPolicy::default());

    let habit = &store.habits()[0];
    assert_eq!(habit.current, 0);
    assert_eq!(habit.streak, 1);
    assert_eq!(store.stored_lifetime_xp(), 15);
}

#[test]
fn weekly_average_and_streak_examples() {
    let today = day(15);
    let progress = BTreeMap::from([(today, 100), (today.days_before(1), 50)]);
    assert_eq!(weekly_average(&progress, today), 21);

    let progress = BTreeMap::from([
        (today, 100),
        (today.days_before(1), 100),
        (today.days_before(2), 80),
    ]);
    assert_eq!(calculate_streak(&progress), 2);
}

#[test]
fn habit_counter_stays_within_target() {
    let today = day(15);
    let mut store = Store::new();
    store
        .add_habit(1, "Drink water", "💧", Frequency::Daily, 8)
        .unwrap();

    let mut credited = 0;
    for _ in 0..20 {
        let outcome = store.increment_habit(today, 1);
        credited += outcome
            .notifications
            .iter()
            .filter(|n| matches!(n, Notification::HabitTargetReached { .. }))
            .count();
        let habit = &store.habits()[0];
        assert!(habit.current <= habit.target);
    }
    assert_eq!(credited, 1);
    assert_eq!(store.habits()[0].streak, 1);
}

#[test]
fn saved_store_reloads_identically() {
    let today = day(15);
    let (mut store, _) = Store::open(
        &LocalStorage::default(),
        today,
        5_000,
        true,
        RolloverPolicy::default(),
    );
    let first = store.tasks()[0].id;
    store.toggle_task(today, first);
    let habit = store.habits()[2].id;
    store.increment_habit(today, habit);

    let storage = store.save(today).unwrap();
    let reloaded = Store::from_storage(&storage);

    assert_eq!(reloaded, store);
    assert_eq!(
        build_stats_at(today, &reloaded),
        build_stats_at(today, &store)
    );
}

#[test]
fn reopening_same_day_does_not_reseed_or_refold() {
    let today = day(15);
    let (mut store, first_events) = Store::open(
        &LocalStorage::default(),
        today,
        5_000,
        true,
        RolloverPolicy::default(),
    );
    assert_eq!(first_events.len(), 1);
    let id = store.tasks()[0].id;
    store.toggle_task(today, id);
    let storage = store.save(today).unwrap();

    let (reopened, events) = Store::open(&storage, today, 9_000, true, RolloverPolicy::default());
    assert!(events.is_empty());
    assert_eq!(reopened.tasks().len(), 4);
    assert_eq!(reopened.stored_lifetime_xp(), 0);
    assert_eq!(build_stats_at(today, &reopened).lifetime_xp, 25);
}
