use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::garaga::GaragaError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Submit: request body is not valid JSON -> {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Calldata generation failed -> {0}")]
    Calldata(#[from] GaragaError),
    #[error("Proof file error -> {0}")]
    ProofFile(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ServerError::Calldata(_) | ServerError::ProofFile(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
