//! Transaction building, submission, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build transactions with nonce, gas price and gas estimation
//! - Sign and broadcast through the signing provider
//! - Poll for the receipt until it has enough confirmations
//!
//! Nothing here retries: the first failure is returned to the caller.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::client::{function_name, ChainClient};
use crate::blockchain::types::{ChainError, ChainResult, PendingTx, Receipt};

impl ChainClient {
    /// Encode `call`, sign it and send it to `to`.
    ///
    /// An error answer from the node before it accepts the transaction,
    /// including a revert during gas estimation, is reported as
    /// [`ChainError::TransactionRejected`]. An unreachable node stays
    /// [`ChainError::Rpc`] or [`ChainError::Timeout`].
    pub async fn submit_transaction<C: SolCall>(&self, to: Address, call: &C) -> ChainResult<PendingTx> {
        let function = function_name::<C>();
        let signer = self
            .signer
            .clone()
            .ok_or_else(|| ChainError::ReadOnly(function.to_string()))?;

        let request = self
            .build(signer.address, to, call.abi_encode().into())
            .await
            .map_err(|e| e.into_rejection(function))?;

        let pending = self
            .rpc(signer.provider.send_transaction(request))
            .await
            .map_err(|e| e.into_rejection(function))?;
        let tx_hash = *pending.tx_hash();

        tracing::info!(function, contract = %to, tx_hash = %tx_hash, "Transaction submitted");

        Ok(PendingTx {
            function: function.to_string(),
            tx_hash,
        })
    }

    /// Build a fully specified legacy transaction request.
    async fn build(&self, from: Address, to: Address, data: Bytes) -> ChainResult<TransactionRequest> {
        let nonce = self.get_transaction_count(from).await?;
        let chain_id = self.get_chain_id().await?;
        let gas_price = self.get_gas_price().await?;

        let request = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_input(data);
        let gas_limit = self.estimate_gas(request.clone()).await?;

        tracing::debug!(nonce, chain_id, gas_price, gas_limit, "Transaction built");

        Ok(request
            .with_nonce(nonce)
            .with_chain_id(chain_id)
            .with_gas_price(gas_price)
            .with_gas_limit(gas_limit))
    }

    /// Wait until `pending` is included with the configured number of
    /// confirmations.
    pub async fn confirm_transaction(&self, pending: PendingTx) -> ChainResult<Receipt> {
        let required_confirmations = u64::from(self.config.confirmation_blocks.max(1));
        let timeout_secs = self.config.confirmation_timeout_secs;
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);
        let tx_hash = pending.tx_hash;

        let failure = |reason: String| ChainError::ConfirmationFailure { tx_hash, reason };

        let result = timeout(Duration::from_secs(timeout_secs), async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                let receipt = match self.get_transaction_receipt(tx_hash).await {
                    Ok(Some(receipt)) => receipt,
                    Ok(None) => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                if !receipt.status() {
                    return Err(failure("transaction reverted".to_string()));
                }

                let Some(tx_block) = receipt.block_number else {
                    return Err(failure("receipt has no block number".to_string()));
                };

                let current_block = self.get_block_number().await?;
                let confirmations = current_block.saturating_sub(tx_block) + 1;

                if confirmations >= required_confirmations {
                    tracing::info!(
                        function = %pending.function,
                        tx_hash = %tx_hash,
                        block_number = tx_block,
                        "Transaction confirmed"
                    );
                    return Ok(Receipt::from_rpc(&pending.function, &receipt, tx_block));
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(_) => Err(ChainError::ConfirmationTimeout { tx_hash, timeout_secs }),
        }
    }

    /// Submit `call` and wait for its confirmation.
    pub async fn send_and_confirm<C: SolCall>(&self, to: Address, call: &C) -> ChainResult<Receipt> {
        let pending = self.submit_transaction(to, call).await?;
        self.confirm_transaction(pending).await
    }
}
