//! Binding for the manga chapter NFT contract.

use alloy::primitives::{Address, U256};

use crate::blockchain::events::decode_logs;
use crate::blockchain::{ChainClient, ChainResult, PendingTx, Receipt};
use crate::contracts::abi::IMangaNft;
use crate::contracts::events::ChapterEvent;
use crate::contracts::records::ChapterMetadata;

/// The manga NFT contract at a fixed address.
#[derive(Debug, Clone)]
pub struct MangaNft {
    client: ChainClient,
    address: Address,
}

impl MangaNft {
    pub fn new(client: ChainClient, address: Address) -> Self {
        Self { client, address }
    }

    /// Submit `freeMint(to, tokenId)`.
    pub async fn free_mint(&self, to: Address, token_id: U256) -> ChainResult<PendingTx> {
        let call = IMangaNft::freeMintCall { to, tokenId: token_id };
        self.client.submit_transaction(self.address, &call).await
    }

    /// Submit `createChapter` with the given metadata.
    pub async fn create_chapter(&self, metadata: &ChapterMetadata) -> ChainResult<PendingTx> {
        let call = IMangaNft::createChapterCall::from(metadata);
        self.client.submit_transaction(self.address, &call).await
    }

    pub async fn confirm(&self, pending: PendingTx) -> ChainResult<Receipt> {
        self.client.confirm_transaction(pending).await
    }

    /// `ChapterCreated` and `ChapterMinted` events in `receipt`.
    pub fn chapter_events(&self, receipt: &Receipt) -> Vec<ChapterEvent> {
        decode_logs(receipt)
    }
}
