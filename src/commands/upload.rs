//! `upload`: upload one creator record and one reader record.

use alloy::primitives::Address;
use clap::Args;
use std::io::Write;

use crate::blockchain::Receipt;
use crate::commands::{fixtures, CommandError};
use crate::contracts::{MonthId, MonthlyReport};

#[derive(Debug, Clone, Args)]
pub struct UploadArgs {
    /// Reporting period, e.g. 202405.
    #[arg(long, default_value = fixtures::UPLOAD_MONTH)]
    pub month: MonthId,

    #[arg(long, default_value = fixtures::UPLOAD_CREATOR)]
    pub creator: Address,

    #[arg(long, default_value = fixtures::UPLOAD_READER)]
    pub reader: Address,
}

/// Sends the creator upload, waits for it, then sends the reader upload.
pub async fn run<W: Write>(
    report: &MonthlyReport,
    args: &UploadArgs,
    out: &mut W,
) -> Result<[Receipt; 2], CommandError> {
    let pending = report
        .upload_creator_data(args.month, args.creator, fixtures::upload_creator_record())
        .await?;
    let creator = report.confirm(pending).await?;
    writeln!(out, "✅ Creator data uploaded: {}", creator.tx_hash)?;

    let pending = report
        .upload_reader_data(args.month, args.reader, fixtures::upload_reader_record())
        .await?;
    let reader = report.confirm(pending).await?;
    writeln!(out, "✅ Reader data uploaded: {}", reader.tx_hash)?;

    Ok([creator, reader])
}
