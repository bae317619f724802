//! Wallet management for transaction signing.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{ChainError, ChainResult};

/// A local signing key and its derived address.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &str) -> ChainResult<Self> {
        let key_hex = private_key_hex.trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), "Wallet initialized");

        Ok(Self { signer })
    }

    /// Load a wallet from the named environment variable, looked up
    /// through `env`.
    ///
    /// Scripts disagree on the variable (`PRIVATE_KEY` for the platform
    /// wallet, `CREATOR_KEY` for creators), so the caller names it.
    pub fn from_env<F>(var: &str, env: F) -> ChainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let private_key = env(var)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ChainError::MissingKey(var.to_string()))?;

        Self::from_private_key(&private_key)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Convert into the network wallet used by the signing provider.
    pub(crate) fn into_network_wallet(self) -> EthereumWallet {
        EthereumWallet::from(self.signer)
    }
}
