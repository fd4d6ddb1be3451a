use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/charts", get(handlers::get_charts))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/tasks", post(handlers::add_task))
        .route(
            "/api/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/habits", post(handlers::add_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/increment", post(handlers::increment_habit))
        .route("/api/habits/:id/reset", post(handlers::reset_habit))
        .with_state(state)
}
