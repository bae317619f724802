//! One module per command: each runs a short, linear sequence of contract
//! calls and writes a human-readable report.
//!
//! Commands take an already-built binding and an output sink, so the same
//! code runs against a live node from `main` and against a mock node in
//! tests.

pub mod batch_upload;
pub mod fixtures;
pub mod mint;
pub mod publish;
pub mod query;
pub mod upload;

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::blockchain::{ChainClient, ChainError, Wallet};
use crate::config::{ClientConfig, ConfigError};

/// Anything that can make a command fail.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("Invalid input file {path}: {reason}")]
    Input { path: PathBuf, reason: String },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Build a client that can only read chain state.
pub fn read_only_client(config: &ClientConfig) -> Result<ChainClient, CommandError> {
    let rpc_url = config.rpc_url()?;
    Ok(ChainClient::read_only(rpc_url, &config.chain))
}

/// Build a signing client whose key is read from the environment variable
/// `key_env`.
pub fn signing_client<F>(config: &ClientConfig, key_env: &str, env: F) -> Result<ChainClient, CommandError>
where
    F: Fn(&str) -> Option<String>,
{
    let rpc_url = config.rpc_url()?;
    let wallet = Wallet::from_env(key_env, env)?;
    Ok(ChainClient::with_wallet(rpc_url, &config.chain, wallet))
}

/// Read a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let invalid = |reason: String| CommandError::Input {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
}
