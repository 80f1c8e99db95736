use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde_json::Value;

use crate::app_state::AppState;
use crate::error::{Result, ServerError};
use crate::garaga;

/// Accept a proof payload, persist it for garaga, and relay the generated
/// calldata back to the caller.
pub async fn generate_calldata_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    tracing::info!("proof submitted ({} bytes)", body.len());

    let proof: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Failed to parse proof JSON: {:?}", e);
        ServerError::InvalidJson(e)
    })?;

    // One proof file per request so concurrent submissions cannot clobber
    // each other before the subprocess reads them.
    let proof_file = tempfile::Builder::new()
        .prefix("proof-")
        .suffix(".json")
        .tempfile_in(state.proof_dir())?;
    std::fs::write(proof_file.path(), proof.to_string())?;

    tracing::info!("proof saved to {}", proof_file.path().display());

    let calldata = garaga::generate_calldata(
        state.garaga_bin(),
        state.proving_system(),
        state.verification_key_path(),
        proof_file.path(),
        state.tool_timeout(),
    )
    .await
    .map_err(|e| {
        tracing::error!("calldata generation failed: {e}");
        ServerError::from(e)
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        calldata,
    ))
}
