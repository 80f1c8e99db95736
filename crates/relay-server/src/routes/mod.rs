use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, Method, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

pub mod calldata;

use calldata::generate_calldata_handler;

/// Build the relay router. POST on any path generates calldata, OPTIONS
/// preflights are answered by the CORS layer, everything else gets a JSON
/// 404. The body limit applies before the handler reads the payload.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", post(generate_calldata_handler))
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Browser callers post to whatever path they were configured with, so any
/// POST is routed to the calldata handler; other methods fall through.
async fn fallback(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> axum::response::Response {
    if method == Method::POST {
        return generate_calldata_handler(State(state), body)
            .await
            .into_response();
    }
    Response::builder()
        .header("Content-Type", "application/json")
        .status(StatusCode::NOT_FOUND)
        .body(json!("404 Not Found").to_string())
        .expect("response building should not fail")
        .into_response()
}
