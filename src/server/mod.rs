mod init;
mod state;
pub mod data_models;
pub mod routes;
pub mod utils;

pub use init::{build_router, init_router, RouterArgs};
pub use state::ServerState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: `{0}`")]
    Store(#[from] crate::Error),

    #[error("Internal server error: `{0}`")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Store(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            ServerError::InternalError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
