//! `query`: read one creator record and one reader record. Needs no key.

use alloy::primitives::Address;
use clap::Args;
use std::io::Write;

use crate::commands::{fixtures, CommandError};
use crate::contracts::{CreatorRecord, MonthId, MonthlyReport, ReaderRecord};

#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// Reporting period, e.g. 202501.
    #[arg(long, default_value = fixtures::QUERY_MONTH)]
    pub month: MonthId,

    #[arg(long, default_value = fixtures::QUERY_CREATOR)]
    pub creator: Address,

    #[arg(long, default_value = fixtures::QUERY_READER)]
    pub reader: Address,
}

pub async fn run<W: Write>(
    report: &MonthlyReport,
    args: &QueryArgs,
    out: &mut W,
) -> Result<(CreatorRecord, ReaderRecord), CommandError> {
    let creator = report.get_creator_data(args.month, args.creator).await?;
    writeln!(out, "📊 Creator Data:")?;
    writeln!(out, "- totalNFTPublished: {}", creator.published_count)?;
    writeln!(out, "- totalNFTShared: {}", creator.shared_count)?;
    writeln!(out, "- totalNFTValue: {}", creator.total_value)?;
    writeln!(out, "- totalTransactions: {}", creator.transaction_count)?;

    let reader = report.get_reader_data(args.month, args.reader).await?;
    writeln!(out)?;
    writeln!(out, "📚 Reader Data:")?;
    writeln!(out, "- tokensChargedThisMonth: {}", reader.charged_this_month)?;
    writeln!(out, "- currentBalance: {}", reader.current_balance)?;

    Ok((creator, reader))
}
