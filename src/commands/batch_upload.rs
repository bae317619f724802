//! `batch-upload`: upload many creator and reader records, one transaction
//! per record kind.

use alloy::primitives::Address;
use clap::Args;
use serde::Deserialize;
use std::io::Write;
use std::path::PathBuf;

use crate::blockchain::Receipt;
use crate::commands::{fixtures, read_json, CommandError};
use crate::contracts::{CreatorRecord, MonthId, MonthlyReport, ReaderRecord};

#[derive(Debug, Clone, Args)]
pub struct BatchUploadArgs {
    /// Reporting period, e.g. 202502.
    #[arg(long, default_value = fixtures::BATCH_MONTH)]
    pub month: MonthId,

    /// JSON file with `creators` and `readers` arrays; defaults to ten of each.
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct BatchFile {
    #[serde(default)]
    creators: Vec<CreatorEntry>,
    #[serde(default)]
    readers: Vec<ReaderEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct CreatorEntry {
    address: Address,
    published: u64,
    shared: u64,
    value: u64,
    transactions: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct ReaderEntry {
    address: Address,
    charged: u64,
    balance: u64,
}

/// Parallel address and record lists, in upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchData {
    pub creators: (Vec<Address>, Vec<CreatorRecord>),
    pub readers: (Vec<Address>, Vec<ReaderRecord>),
}

impl BatchData {
    pub fn from_pairs(
        creators: Vec<(Address, CreatorRecord)>,
        readers: Vec<(Address, ReaderRecord)>,
    ) -> Self {
        Self {
            creators: creators.into_iter().unzip(),
            readers: readers.into_iter().unzip(),
        }
    }
}

impl BatchUploadArgs {
    pub fn load_data(&self) -> Result<BatchData, CommandError> {
        let Some(path) = &self.data else {
            return Ok(BatchData::from_pairs(
                fixtures::batch_creators(),
                fixtures::batch_readers(),
            ));
        };

        let file: BatchFile = read_json(path)?;
        let creators = file
            .creators
            .into_iter()
            .map(|e| {
                (
                    e.address,
                    CreatorRecord::new(e.published, e.shared, e.value, e.transactions),
                )
            })
            .collect();
        let readers = file
            .readers
            .into_iter()
            .map(|e| (e.address, ReaderRecord::new(e.charged, e.balance)))
            .collect();

        Ok(BatchData::from_pairs(creators, readers))
    }
}

pub async fn run<W: Write>(
    report: &MonthlyReport,
    month: MonthId,
    data: BatchData,
    out: &mut W,
) -> Result<[Receipt; 2], CommandError> {
    let (creator_addresses, creator_records) = data.creators;
    let creator_count = creator_addresses.len();
    let pending = report
        .batch_upload_creator_data(month, creator_addresses, &creator_records)
        .await?;
    let creators = report.confirm(pending).await?;
    writeln!(out, "✅ {} creator records uploaded: {}", creator_count, creators.tx_hash)?;

    let (reader_addresses, reader_records) = data.readers;
    let reader_count = reader_addresses.len();
    let pending = report
        .batch_upload_reader_data(month, reader_addresses, &reader_records)
        .await?;
    let readers = report.confirm(pending).await?;
    writeln!(out, "✅ {} reader records uploaded: {}", reader_count, readers.tx_hash)?;

    Ok([creators, readers])
}
