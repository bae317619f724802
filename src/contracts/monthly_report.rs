//! Binding for the monthly creator/reader report contract.
//!
//! Uploads are state-changing and need a signing client; the two getters
//! work on a read-only client. Equal-length checks for the batch uploads
//! belong to the contract, so mismatched inputs are sent as-is and the
//! node's rejection is returned unchanged.

use alloy::primitives::Address;

use crate::blockchain::{ChainClient, ChainResult, PendingTx, Receipt};
use crate::contracts::abi::IMonthlyReport;
use crate::contracts::records::{CreatorRecord, MonthId, ReaderRecord};

#[derive(Debug, Clone)]
pub struct MonthlyReport {
    client: ChainClient,
    address: Address,
}

impl MonthlyReport {
    pub fn new(client: ChainClient, address: Address) -> Self {
        Self { client, address }
    }

    pub async fn upload_creator_data(
        &self,
        month: MonthId,
        user: Address,
        record: CreatorRecord,
    ) -> ChainResult<PendingTx> {
        let call = IMonthlyReport::uploadCreatorDataCall {
            monthId: month.into(),
            user,
            data: record.into(),
        };
        self.client.submit_transaction(self.address, &call).await
    }

    pub async fn upload_reader_data(
        &self,
        month: MonthId,
        user: Address,
        record: ReaderRecord,
    ) -> ChainResult<PendingTx> {
        let call = IMonthlyReport::uploadReaderDataCall {
            monthId: month.into(),
            user,
            data: record.into(),
        };
        self.client.submit_transaction(self.address, &call).await
    }

    /// Upload every creator record in one transaction.
    pub async fn batch_upload_creator_data(
        &self,
        month: MonthId,
        users: Vec<Address>,
        records: &[CreatorRecord],
    ) -> ChainResult<PendingTx> {
        let call = IMonthlyReport::batchUploadCreatorDataCall {
            monthId: month.into(),
            users,
            data: records.iter().copied().map(Into::into).collect(),
        };
        self.client.submit_transaction(self.address, &call).await
    }

    /// Upload every reader record in one transaction.
    pub async fn batch_upload_reader_data(
        &self,
        month: MonthId,
        users: Vec<Address>,
        records: &[ReaderRecord],
    ) -> ChainResult<PendingTx> {
        let call = IMonthlyReport::batchUploadReaderDataCall {
            monthId: month.into(),
            users,
            data: records.iter().copied().map(Into::into).collect(),
        };
        self.client.submit_transaction(self.address, &call).await
    }

    pub async fn confirm(&self, pending: PendingTx) -> ChainResult<Receipt> {
        self.client.confirm_transaction(pending).await
    }

    /// Creator statistics for `month`. Unknown keys come back as the
    /// contract's zero-valued record.
    pub async fn get_creator_data(&self, month: MonthId, user: Address) -> ChainResult<CreatorRecord> {
        let call = IMonthlyReport::getCreatorDataCall {
            monthId: month.into(),
            user,
        };
        let data = self.client.read_state(self.address, &call).await?;
        Ok(data.into())
    }

    /// Reader statistics for `month`.
    pub async fn get_reader_data(&self, month: MonthId, user: Address) -> ChainResult<ReaderRecord> {
        let call = IMonthlyReport::getReaderDataCall {
            monthId: month.into(),
            user,
        };
        let data = self.client.read_state(self.address, &call).await?;
        Ok(data.into())
    }
}
