use crate::auth::is_authorized;
use crate::clock::day_window;
use crate::errors::AppError;
use crate::models::{NewTaskForm, TaskRecord};
use crate::state::AppState;
use crate::storage::{StoreError, TaskStore};
use crate::ui::render_index;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = today_records(&state).await?;
    Ok(Html(render_index(records.len(), &Local::now())))
}

pub async fn today_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskRecord>>, AppError> {
    let records = today_records(&state).await?;
    Ok(Json(records))
}

pub async fn new_task(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<StatusCode, AppError> {
    let Form(pairs) = form.map_err(|err| {
        warn!("rejected form body: {err}");
        AppError::bad_request("Failed to parse form data")
    })?;
    let form = NewTaskForm::from_pairs(pairs);

    if !is_authorized(form.token.as_deref().unwrap_or_default(), &state.token) {
        return Err(AppError::unauthorized("Invalid token"));
    }

    let task_id = parse_task_id(form.task_id.as_deref())
        .ok_or_else(|| AppError::bad_request("Invalid task_id"))?;

    let record = with_store(&state, move |store| store.create(task_id)).await?;
    info!("recorded task {} as #{}", record.task_id, record.id);

    Ok(StatusCode::CREATED)
}

/// Base-10 `u32`; anything else (empty, signed, fractional, too large) is
/// rejected.
fn parse_task_id(raw: Option<&str>) -> Option<u32> {
    let raw = raw?;
    if raw.starts_with('+') {
        return None;
    }
    raw.parse::<u32>().ok()
}

async fn today_records(state: &AppState) -> Result<Vec<TaskRecord>, AppError> {
    let (start, end) = day_window(&Local::now());
    with_store(state, move |store| store.list_between(&start, &end)).await
}

// SQLite calls block, so they run off the async workers.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&TaskStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    let result = tokio::task::spawn_blocking(move || op(&store)).await?;
    Ok(result?)
}
