use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Config;

/// Shared handler state holding everything the calldata route needs: the
/// tool invocation parameters and the directory proof files are written to.
/// All paths are injected here so tests can point the server at per-test
/// temporary directories.
#[derive(Clone)]
pub struct AppState {
    garaga_bin: PathBuf,
    proving_system: String,
    verification_key_path: PathBuf,
    proof_dir: PathBuf,
    tool_timeout: Duration,
}

impl AppState {
    pub fn new(
        garaga_bin: PathBuf,
        proving_system: String,
        verification_key_path: PathBuf,
        proof_dir: PathBuf,
        tool_timeout: Duration,
    ) -> Self {
        Self {
            garaga_bin,
            proving_system,
            verification_key_path,
            proof_dir,
            tool_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.garaga_bin.clone(),
            config.proving_system.clone(),
            config.verification_key_path.clone(),
            config.proof_dir.clone(),
            Duration::from_secs(config.tool_timeout_seconds),
        )
    }

    pub fn garaga_bin(&self) -> &Path {
        &self.garaga_bin
    }

    pub fn proving_system(&self) -> &str {
        &self.proving_system
    }

    pub fn verification_key_path(&self) -> &Path {
        &self.verification_key_path
    }

    pub fn proof_dir(&self) -> &Path {
        &self.proof_dir
    }

    pub fn tool_timeout(&self) -> Duration {
        self.tool_timeout
    }
}
