//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, confirmations >= 1)
//! - Check that configured URLs and addresses parse
//!
//! Presence of required values is not checked here; each command resolves
//! what it needs and reports the missing environment variable by name.

use alloy::primitives::Address;
use thiserror::Error;
use url::Url;

use crate::config::schema::{ClientConfig, ContractKind};

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate the configuration, returning every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let chain = &config.chain;

    if let Some(raw) = &chain.rpc_url {
        match raw.parse::<Url>() {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError::new(
                "chain.rpc_url",
                format!("unsupported scheme '{}', expected http or https", url.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new("chain.rpc_url", e.to_string())),
        }
    }

    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("chain.rpc_timeout_secs", "must be greater than 0"));
    }
    if chain.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "chain.confirmation_timeout_secs",
            "must be greater than 0",
        ));
    }
    if chain.confirmation_blocks == 0 {
        errors.push(ValidationError::new("chain.confirmation_blocks", "must be at least 1"));
    }
    if chain.poll_interval_ms == 0 {
        errors.push(ValidationError::new("chain.poll_interval_ms", "must be greater than 0"));
    }

    for (kind, field) in [
        (ContractKind::MangaNft, "contracts.manga_nft_address"),
        (ContractKind::MonthlyReport, "contracts.uploader_address"),
    ] {
        if let Some(raw) = config.contracts.get(kind) {
            if let Err(e) = raw.parse::<Address>() {
                errors.push(ValidationError::new(field, e.to_string()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
