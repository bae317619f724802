//! Configuration schema definitions.
//!
//! All types derive Serde traits so a TOML file can provide any subset of
//! the settings. Signing keys are absent: they are only ever
//! read from the environment.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::loader::ConfigError;

/// Environment variable holding the JSON-RPC endpoint.
pub const RPC_URL_ENV: &str = "RPC_URL";
/// Environment variable holding the manga NFT contract address.
pub const MANGA_NFT_ADDRESS_ENV: &str = "MANGA_NFT_ADDRESS";
/// Environment variable holding the monthly report contract address.
pub const UPLOADER_ADDR_ENV: &str = "UPLOADER_ADDR";
/// Signing key used by the platform wallet (mint, uploads).
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
/// Signing key used by creators publishing chapters.
pub const CREATOR_KEY_ENV: &str = "CREATOR_KEY";

/// Root configuration for the client.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Provider and confirmation settings.
    pub chain: ChainConfig,

    /// Addresses of the deployed contracts.
    pub contracts: ContractsConfig,
}

/// JSON-RPC provider settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: Option<String>,

    /// Timeout for a single RPC request in seconds.
    pub rpc_timeout_secs: u64,

    /// Maximum time to wait for a submitted transaction to be included.
    pub confirmation_timeout_secs: u64,

    /// Number of blocks (including the inclusion block) before a receipt counts.
    pub confirmation_blocks: u32,

    /// Receipt polling interval in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            rpc_timeout_secs: 10,
            confirmation_timeout_secs: 120,
            confirmation_blocks: 1,
            poll_interval_ms: 1_000,
        }
    }
}

/// Deployed contract addresses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// Manga chapter NFT contract (`freeMint`, `createChapter`).
    pub manga_nft_address: Option<String>,

    /// Monthly creator/reader report contract (uploads and queries).
    pub uploader_address: Option<String>,
}

/// The two contracts the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    MangaNft,
    MonthlyReport,
}

impl ContractKind {
    /// Environment variable that carries this contract's address.
    pub fn env_var(self) -> &'static str {
        match self {
            ContractKind::MangaNft => MANGA_NFT_ADDRESS_ENV,
            ContractKind::MonthlyReport => UPLOADER_ADDR_ENV,
        }
    }
}

impl ClientConfig {
    /// Resolve the RPC endpoint, failing if none was configured.
    pub fn rpc_url(&self) -> Result<Url, ConfigError> {
        let raw = self
            .chain
            .rpc_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar(RPC_URL_ENV.to_string()))?;
        raw.parse().map_err(|e: url::ParseError| ConfigError::InvalidValue {
            field: RPC_URL_ENV.to_string(),
            reason: e.to_string(),
        })
    }

    /// Resolve a contract address, failing if none was configured.
    pub fn contract_address(&self, kind: ContractKind) -> Result<Address, ConfigError> {
        let raw = self
            .contracts
            .get(kind)
            .ok_or_else(|| ConfigError::MissingVar(kind.env_var().to_string()))?;
        raw.parse().map_err(|e: alloy::hex::FromHexError| ConfigError::InvalidAddress {
            field: kind.env_var().to_string(),
            reason: e.to_string(),
        })
    }
}

impl ContractsConfig {
    pub fn get(&self, kind: ContractKind) -> Option<&str> {
        match kind {
            ContractKind::MangaNft => self.manga_nft_address.as_deref(),
            ContractKind::MonthlyReport => self.uploader_address.as_deref(),
        }
    }

    pub fn set(&mut self, kind: ContractKind, address: String) {
        match kind {
            ContractKind::MangaNft => self.manga_nft_address = Some(address),
            ContractKind::MonthlyReport => self.uploader_address = Some(address),
        }
    }
}
