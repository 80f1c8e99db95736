use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use relay_server::{app_state::AppState, routes::router};
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const MAX_BODY_SIZE: usize = 1024 * 1024; // 1 MB limit

/// Per-test stand-in for a garaga install: the stub executable, the
/// pre-existing verification key, and the directory the server writes
/// proof files into. Dropping it removes everything.
pub struct StubEnv {
    pub dir: TempDir,
}

impl StubEnv {
    pub fn verification_key_path(&self) -> PathBuf {
        self.dir.path().join("verification_key.json")
    }

    /// Where the stub copies the proof file the server passed via `--proof`.
    pub fn capture_path(&self) -> PathBuf {
        self.dir.path().join("captured_proof.json")
    }

    /// Touched by the stub on every invocation.
    pub fn marker_path(&self) -> PathBuf {
        self.dir.path().join("invoked")
    }
}

/// Write an executable shell script standing in for the garaga binary.
pub fn write_stub_tool(dir: &Path, script: &str) -> PathBuf {
    let bin = dir.join("garaga-stub.sh");
    fs::write(&bin, format!("#!/bin/sh\n{script}\n")).unwrap();
    let mut permissions = fs::metadata(&bin).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&bin, permissions).unwrap();
    bin
}

/// Stub script that records its invocation, captures the `--proof` file,
/// then runs `outcome` (echo/exit/sleep snippets per test).
fn recording_stub_script(env: &StubEnv, outcome: &str) -> String {
    format!(
        "touch {marker}\n\
         while [ $# -gt 0 ]; do\n\
         \x20 if [ \"$1\" = \"--proof\" ]; then cp \"$2\" {capture}; fi\n\
         \x20 shift\n\
         done\n\
         {outcome}",
        marker = env.marker_path().display(),
        capture = env.capture_path().display(),
    )
}

pub fn setup_app_with(outcome: &str, tool_timeout: Duration, max_body_bytes: usize) -> (Router, StubEnv) {
    let env = StubEnv {
        dir: TempDir::new().unwrap(),
    };
    fs::write(env.verification_key_path(), "{}").unwrap();
    let script = recording_stub_script(&env, outcome);
    let bin = write_stub_tool(env.dir.path(), &script);

    let state = AppState::new(
        bin,
        "groth16".to_owned(),
        env.verification_key_path(),
        env.dir.path().to_path_buf(),
        tool_timeout,
    );
    (router(state, max_body_bytes), env)
}

pub fn setup_app(outcome: &str) -> (Router, StubEnv) {
    setup_app_with(outcome, Duration::from_secs(5), MAX_BODY_SIZE)
}

pub fn post_proof(path: &str, input: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(input.to_owned()))
        .unwrap()
}

pub async fn submit(app: Router, input: &str) -> Response<Body> {
    app.oneshot(post_proof("/", input)).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), MAX_BODY_SIZE).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
