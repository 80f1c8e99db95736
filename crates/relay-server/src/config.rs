use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server_port: u16,
    pub log_level: String,
    /// Path of the external garaga executable.
    pub garaga_bin: PathBuf,
    /// Proving system identifier passed to garaga (`groth16`).
    pub proving_system: String,
    /// Pre-existing verification key file read by garaga.
    pub verification_key_path: PathBuf,
    /// Directory receiving the per-request proof files.
    pub proof_dir: PathBuf,
    pub max_body_bytes: usize,
    pub tool_timeout_seconds: u64,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("Failed to parse log level: {0}")]
    LogLevelParseError(String),
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevelParseError(self.log_level.clone()))
    }
}
