use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks", get(handlers::today_tasks))
        .route("/new", post(handlers::new_task))
        .with_state(state)
}
