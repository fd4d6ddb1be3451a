use crate::day::DayKey;
use crate::errors::AppError;
use crate::events::Outcome;
use crate::models::{
    CalendarQuery, CalendarResponse, ChartsResponse, ConfirmQuery, HabitId, MutationResponse,
    NewHabitRequest, NewTaskRequest, StateResponse, StatsResponse, TaskId, UpdateTaskRequest,
};
use crate::state::AppState;
use crate::stats::{build_calendar, build_charts_at, build_stats, build_stats_at, shift_month};
use crate::storage::save_store;
use crate::store::Store;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use chrono::{Datelike, Utc};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = DayKey::today();
    let store = state.store.lock().await;
    Html(render_index(&build_stats_at(today, &store)))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let today = DayKey::today();
    let store = state.store.lock().await;
    Json(StateResponse {
        date: today,
        tasks: store.list_today_tasks(today),
        habits: store.habits().to_vec(),
        daily_progress: store.daily_progress().clone(),
        lifetime_xp: store.stored_lifetime_xp(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    Json(build_stats(&store))
}

pub async fn get_charts(State(state): State<AppState>) -> Json<ChartsResponse> {
    let store = state.store.lock().await;
    Json(build_charts_at(DayKey::today(), &store))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = DayKey::today();
    let year = query.year.unwrap_or(today.date().year());
    let month = query.month.unwrap_or(today.date().month());
    let (year, month) = shift_month(year, month, query.offset.unwrap_or(0))
        .ok_or_else(|| AppError::bad_request("invalid year or month"))?;

    let store = state.store.lock().await;
    build_calendar(today, &store, year, month)
        .map(Json)
        .ok_or_else(|| AppError::bad_request("invalid year or month"))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.add_task(today, now_millis(), &payload.text, payload.priority, payload.xp)?;
    commit(&state, today, &mut store, outcome).await
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<MutationResponse>, AppError> {
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.toggle_task(today, id);
    commit(&state, today, &mut store, outcome).await
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.update_task(today, id, &payload.text, payload.priority, payload.xp);
    commit(&state, today, &mut store, outcome).await
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<MutationResponse>, AppError> {
    require_confirmation(&query)?;
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.delete_task(today, id);
    commit(&state, today, &mut store, outcome).await
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.add_habit(
        now_millis(),
        &payload.name,
        &payload.icon,
        payload.frequency,
        payload.target,
    )?;
    commit(&state, today, &mut store, outcome).await
}

pub async fn increment_habit(
    State(state): State<AppState>,
    Path(id): Path<HabitId>,
) -> Result<Json<MutationResponse>, AppError> {
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.increment_habit(today, id);
    commit(&state, today, &mut store, outcome).await
}

pub async fn reset_habit(
    State(state): State<AppState>,
    Path(id): Path<HabitId>,
) -> Result<Json<MutationResponse>, AppError> {
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.reset_habit_progress(id);
    commit(&state, today, &mut store, outcome).await
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<HabitId>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<MutationResponse>, AppError> {
    require_confirmation(&query)?;
    let today = DayKey::today();
    let mut store = state.store.lock().await;
    let outcome = store.delete_habit(id);
    commit(&state, today, &mut store, outcome).await
}

fn require_confirmation(query: &ConfirmQuery) -> Result<(), AppError> {
    if query.confirm {
        Ok(())
    } else {
        Err(AppError::bad_request("deletion requires confirm=true"))
    }
}

async fn commit(
    state: &AppState,
    today: DayKey,
    store: &mut Store,
    outcome: Outcome,
) -> Result<Json<MutationResponse>, AppError> {
    if outcome.changed {
        save_store(&state.data_path, store, today).await?;
    }
    for notification in &outcome.notifications {
        info!(?notification, "notification");
    }

    Ok(Json(MutationResponse {
        changed: outcome.changed,
        notifications: outcome.notifications,
        stats: build_stats_at(today, store),
    }))
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
