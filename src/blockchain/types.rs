//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use alloy::rpc::types::{Log, TransactionReceipt};
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed before the node answered.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The node answered with a JSON-RPC error payload.
    #[error("Node error: {0}")]
    ErrorResponse(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The signing key environment variable is not set.
    #[error("Environment variable {0} is not set")]
    MissingKey(String),

    /// A state-changing call was attempted on a client without a signer.
    #[error("{0} requires a signing key but the client is read-only")]
    ReadOnly(String),

    /// The node or the contract refused the transaction before inclusion.
    #[error("Transaction {function} rejected: {reason}")]
    TransactionRejected { function: String, reason: String },

    /// No receipt appeared within the confirmation window.
    #[error("Transaction {tx_hash} not confirmed after {timeout_secs} seconds")]
    ConfirmationTimeout { tx_hash: TxHash, timeout_secs: u64 },

    /// The transaction was included but reverted, or its receipt is unusable.
    #[error("Transaction {tx_hash} failed: {reason}")]
    ConfirmationFailure { tx_hash: TxHash, reason: String },

    /// A read-only call errored or returned undecodable data.
    #[error("Call to {function} reverted: {reason}")]
    CallReverted { function: String, reason: String },
}

impl ChainError {
    /// Reclassify a node error raised while preparing or sending a
    /// transaction as a rejection of that transaction. Transport failures
    /// and timeouts are left as they are.
    pub(crate) fn into_rejection(self, function: &str) -> Self {
        match self {
            ChainError::ErrorResponse(reason) => ChainError::TransactionRejected {
                function: function.to_string(),
                reason,
            },
            other => other,
        }
    }

    /// Reclassify a node error raised by a read call as a revert.
    pub(crate) fn into_revert(self, function: &str) -> Self {
        match self {
            ChainError::ErrorResponse(reason) => ChainError::CallReverted {
                function: function.to_string(),
                reason,
            },
            other => other,
        }
    }
}

/// Result type for blockchain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// A submitted transaction that has not been confirmed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTx {
    /// Contract function that was called.
    pub function: String,
    /// Hash returned by the node.
    pub tx_hash: TxHash,
}

/// A confirmed transaction.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub function: String,
    pub tx_hash: TxHash,
    /// Block the transaction was included in.
    pub block_number: u64,
    pub gas_used: u64,
    /// Emitted logs in receipt order.
    pub logs: Vec<Log>,
}

impl Receipt {
    pub(crate) fn from_rpc(function: &str, receipt: &TransactionReceipt, block_number: u64) -> Self {
        Self {
            function: function.to_string(),
            tx_hash: receipt.transaction_hash,
            block_number,
            gas_used: receipt.gas_used,
            logs: receipt.inner.logs().to_vec(),
        }
    }
}
