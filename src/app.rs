use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/habits",
            get(handlers::get_tracker).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            put(handlers::update_habit).delete(handlers::delete_habit),
        )
        .route("/api/habits/:id/toggle", post(handlers::toggle_completion))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/clear", post(handlers::clear_habits))
        .with_state(state)
}
