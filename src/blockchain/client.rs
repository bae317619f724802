//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint (no I/O happens at construction)
//! - Query chain state (block number, nonce, gas price, receipts)
//! - Perform read-only contract calls without a signing key
//! - Apply a per-request timeout to every RPC call

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::json_rpc::RpcError;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;
use alloy::transports::TransportResult;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{ChainError, ChainResult};
use crate::blockchain::wallet::Wallet;
use crate::config::ChainConfig;

/// A provider that can sign, together with the address it signs for.
#[derive(Clone)]
pub(crate) struct Signer {
    pub(crate) provider: Arc<dyn Provider + Send + Sync>,
    pub(crate) address: Address,
}

/// Blockchain RPC client bound to one endpoint.
///
/// Reads always go through a filler-free provider, so they never need a key.
/// State-changing calls go through the signing provider, which exists only
/// when the client was built with a [`Wallet`].
#[derive(Clone)]
pub struct ChainClient {
    reader: Arc<dyn Provider + Send + Sync>,
    pub(crate) signer: Option<Signer>,
    rpc_url: Url,
    pub(crate) config: ChainConfig,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a client that can only read chain state.
    pub fn read_only(rpc_url: Url, config: &ChainConfig) -> Self {
        let reader = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(rpc_url.clone());

        tracing::debug!(rpc_url = %rpc_url, "Read-only chain client initialized");

        Self {
            reader: Arc::new(reader),
            signer: None,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            rpc_url,
            config: config.clone(),
        }
    }

    /// Create a client that signs transactions with `wallet`.
    pub fn with_wallet(rpc_url: Url, config: &ChainConfig, wallet: Wallet) -> Self {
        let address = wallet.address();
        let provider = ProviderBuilder::new()
            .wallet(wallet.into_network_wallet())
            .connect_http(rpc_url.clone());

        let mut client = Self::read_only(rpc_url, config);
        client.signer = Some(Signer {
            provider: Arc::new(provider),
            address,
        });

        tracing::info!(
            rpc_url = %client.rpc_url,
            sender = %address,
            "Signing chain client initialized"
        );

        client
    }

    /// Whether state-changing calls are unavailable.
    pub fn is_read_only(&self) -> bool {
        self.signer.is_none()
    }

    /// Address transactions are sent from, if the client can sign.
    pub fn sender(&self) -> Option<Address> {
        self.signer.as_ref().map(|signer| signer.address)
    }

    /// Perform a non-mutating call against current chain state and decode
    /// its return value.
    pub async fn read_state<C: SolCall>(&self, to: Address, call: &C) -> ChainResult<C::Return> {
        let function = function_name::<C>();
        let request = TransactionRequest::default()
            .with_to(to)
            .with_input(call.abi_encode());

        let output = self
            .rpc(self.reader.call(request))
            .await
            .map_err(|e| e.into_revert(function))?;

        tracing::debug!(function, contract = %to, bytes = output.len(), "Read call returned");

        C::abi_decode_returns(&output).map_err(|e| ChainError::CallReverted {
            function: function.to_string(),
            reason: format!("undecodable return data: {}", e),
        })
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<u64> {
        self.rpc(self.reader.get_chain_id()).await
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        self.rpc(self.reader.get_block_number()).await
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn get_transaction_count(&self, address: Address) -> ChainResult<u64> {
        self.rpc(self.reader.get_transaction_count(address)).await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> ChainResult<u128> {
        self.rpc(self.reader.get_gas_price()).await
    }

    /// Estimate the gas a transaction request would use.
    pub async fn estimate_gas(&self, request: TransactionRequest) -> ChainResult<u64> {
        self.rpc(self.reader.estimate_gas(request)).await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ChainResult<Option<TransactionReceipt>> {
        self.rpc(self.reader.get_transaction_receipt(tx_hash)).await
    }

    /// Run one RPC request under the configured timeout.
    ///
    /// An error payload from the node becomes [`ChainError::ErrorResponse`];
    /// anything that kept the request from being answered stays
    /// [`ChainError::Rpc`].
    pub(crate) async fn rpc<F, T>(&self, request: F) -> ChainResult<T>
    where
        F: IntoFuture<Output = TransportResult<T>>,
    {
        match timeout(self.timeout_duration, request).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(RpcError::ErrorResp(payload))) => Err(ChainError::ErrorResponse(payload.to_string())),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("sender", &self.sender())
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

/// Bare function name of a call type, e.g. `freeMint` for
/// `freeMint(address,uint256)`.
pub fn function_name<C: SolCall>() -> &'static str {
    C::SIGNATURE.split('(').next().unwrap_or(C::SIGNATURE)
}
