use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::{delete, get};
use clap::Args;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::server::routes::{default, tasks};
use crate::server::state::ServerState;
use crate::store::TaskStore;

#[derive(Debug, Args)]
pub struct RouterArgs {
    /// Location of the task store file.
    #[clap(short, long, default_value = "tasks.json")]
    pub data_file: PathBuf,

    /// Surface storage failures as 500 responses instead of absorbing them.
    #[clap(long)]
    pub strict: bool,
}

pub fn init_router(args: &RouterArgs) -> anyhow::Result<Router> {
    let store = TaskStore::open(&args.data_file);
    let state = Arc::new(ServerState::new(store, args.strict)?);

    Ok(build_router(state))
}

pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/tasks/:id", delete(tasks::delete_task))
        .route("/health", get(default::health_check))
        .with_state(state)
        .layer((
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                // Log the matched route's path (with placeholders not filled in).
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                info_span!(
                    "http_request",
                    method = ?request.method(),
                    matched_path,
                )
            }),
            TimeoutLayer::new(Duration::from_secs(15)),
            // Any origin may call the API.
            CorsLayer::permissive(),
        ))
}
