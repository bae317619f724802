//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::{
    ClientConfig, ContractKind, MANGA_NFT_ADDRESS_ENV, RPC_URL_ENV, UPLOADER_ADDR_ENV,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading and resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment variable {0} is not set")]
    MissingVar(String),

    #[error("Invalid address in {field}: {reason}")]
    InvalidAddress { field: String, reason: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rpc_url: Option<String>,
    pub contract: Option<(ContractKind, String)>,
}

impl Overrides {
    fn apply(&self, config: &mut ClientConfig) {
        if let Some(url) = &self.rpc_url {
            config.chain.rpc_url = Some(url.clone());
        }
        if let Some((kind, address)) = &self.contract {
            config.contracts.set(*kind, address.clone());
        }
    }
}

/// Load configuration from an optional TOML file, overlay the environment
/// as seen through `env` and then `overrides`. The result is validated
/// before it is returned.
pub fn load_config<F>(path: Option<&Path>, overrides: &Overrides, env: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => ClientConfig::default(),
    };

    apply_env(&mut config, env);
    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML configuration file without validating it.
pub fn load_file(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ClientConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Overlay environment values onto `config`.
///
/// Empty values are treated as unset.
pub fn apply_env<F>(config: &mut ClientConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = lookup(RPC_URL_ENV) {
        config.chain.rpc_url = Some(url);
    }
    if let Some(address) = lookup(MANGA_NFT_ADDRESS_ENV) {
        config.contracts.set(ContractKind::MangaNft, address);
    }
    if let Some(address) = lookup(UPLOADER_ADDR_ENV) {
        config.contracts.set(ContractKind::MonthlyReport, address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_env_overrides_file_values() {
        let mut config: ClientConfig = toml::from_str(
            r#"
            [chain]
            rpc_url = "http://file:8545"
            confirmation_timeout_secs = 30

            [contracts]
            uploader_address = "0xC001000000000000000000000000000000000001"
            "#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            ("RPC_URL", "http://env:8545"),
            ("MANGA_NFT_ADDRESS", "0x12E2C1e3A8CA617689A4E4E6d6a098Faf08B8189"),
        ]
        .into_iter()
        .collect();
        apply_env(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.chain.rpc_url.as_deref(), Some("http://env:8545"));
        assert_eq!(config.chain.confirmation_timeout_secs, 30);
        assert_eq!(
            config.contracts.manga_nft_address.as_deref(),
            Some("0x12E2C1e3A8CA617689A4E4E6d6a098Faf08B8189")
        );
        assert_eq!(
            config.contracts.uploader_address.as_deref(),
            Some("0xC001000000000000000000000000000000000001")
        );
    }

    #[test]
    fn test_empty_env_value_is_unset() {
        let mut config = ClientConfig::default();
        apply_env(&mut config, |key| (key == "RPC_URL").then(|| "  ".to_string()));
        assert!(config.chain.rpc_url.is_none());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chain]\nrpc_url = \"http://localhost:8545\"\npoll_interval_ms = 250").unwrap();

        let config = load_file(file.path()).unwrap();
        assert_eq!(config.chain.rpc_url.as_deref(), Some("http://localhost:8545"));
        assert_eq!(config.chain.poll_interval_ms, 250);
        assert_eq!(config.chain.rpc_timeout_secs, 10);
    }

    #[test]
    fn test_overrides_win() {
        let mut config = ClientConfig::default();
        config.chain.rpc_url = Some("http://env:8545".to_string());

        let overrides = Overrides {
            rpc_url: Some("http://cli:8545".to_string()),
            contract: Some((
                ContractKind::MangaNft,
                "0x12E2C1e3A8CA617689A4E4E6d6a098Faf08B8189".to_string(),
            )),
        };
        overrides.apply(&mut config);

        assert_eq!(config.chain.rpc_url.as_deref(), Some("http://cli:8545"));
        assert!(config.contracts.get(ContractKind::MangaNft).is_some());
        assert!(config.contracts.get(ContractKind::MonthlyReport).is_none());
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chain]\nconfirmation_blocks = 0").unwrap();

        let err = load_config(Some(file.path()), &Overrides::default(), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("confirmation_blocks"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("/nonexistent/manga-nft.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chain\nrpc_url = 1").unwrap();
        assert!(matches!(load_file(file.path()), Err(ConfigError::Parse(_))));
    }
}
