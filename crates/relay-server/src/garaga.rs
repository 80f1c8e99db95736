//! Command-line wrapper around the external garaga calldata generator.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

#[derive(Error, Debug)]
pub enum GaragaError {
    #[error("garaga could not be launched: {0}")]
    Io(#[from] std::io::Error),
    #[error("garaga execution failed: {0}")]
    CommandFailed(String),
    #[error("garaga timed out after {0} seconds")]
    Timeout(u64),
}

/// Call garaga from the command line to produce Starknet calldata.
///
/// The verification key and proof files must be prepared by the caller.
/// Returns the tool's standard output trimmed of surrounding whitespace.
/// The child process is killed if it is still running after `time_limit`.
///
/// * `garaga_bin`: path of the garaga executable.
/// * `system`: proving system identifier (`groth16`).
/// * `verification_key_file`: path to the verification key file.
/// * `proof_file`: path to the proof file to generate calldata for.
pub async fn generate_calldata(
    garaga_bin: &Path,
    system: &str,
    verification_key_file: &Path,
    proof_file: &Path,
    time_limit: Duration,
) -> Result<String, GaragaError> {
    let child = Command::new(garaga_bin)
        .arg("calldata")
        .arg("--system")
        .arg(system)
        .arg("--vk")
        .arg(verification_key_file)
        .arg("--proof")
        .arg(proof_file)
        .arg("--format")
        .arg("array")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = timeout(time_limit, child.wait_with_output())
        .await
        .map_err(|_| GaragaError::Timeout(time_limit.as_secs()))??;

    if !output.status.success() {
        return Err(GaragaError::CommandFailed(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
