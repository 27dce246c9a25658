use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::server::data_models::CreateTaskRequest;
use crate::server::state::ServerState;
use crate::server::ServerError;
use crate::store::Task;

/// `GET /tasks` — the full collection, in insertion order.
pub async fn list_tasks(
    State(state): State<Arc<ServerState>>,
) -> Result<(StatusCode, Json<Vec<Task>>), ServerError> {
    let tasks = state.load_tasks()?;
    tracing::info!(count = tasks.len(), "Listing tasks");

    Ok((StatusCode::OK, Json(tasks)))
}

/// `POST /tasks` — append a task under a freshly assigned id.
pub async fn create_task(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ServerError> {
    let _guard = state.lock_writes();

    let mut tasks = state.load_tasks()?;
    let task = Task {
        id: state.next_id(),
        title: request.title,
    };
    tracing::info!(id = task.id, title = ?task.title, "Adding task");

    tasks.push(task.clone());
    state.save_tasks(&tasks)?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// `DELETE /tasks/:id` — remove the matching task, if any.
///
/// The id arrives as a raw path segment; a segment that does not parse as an
/// integer matches nothing, and the response is 204 either way.
pub async fn delete_task(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let _guard = state.lock_writes();

    let mut tasks = state.load_tasks()?;
    tracing::info!(id = %id, "Deleting task");

    if let Ok(id) = id.parse::<u64>() {
        tasks.retain(|task| task.id != id);
    }
    state.save_tasks(&tasks)?;

    Ok(StatusCode::NO_CONTENT)
}
