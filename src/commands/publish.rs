//! `publish`: create a chapter and report the events it emitted.

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::blockchain::Receipt;
use crate::commands::{fixtures, read_json, CommandError};
use crate::contracts::events::format_timestamp;
use crate::contracts::{ChapterEvent, ChapterMetadata, MangaNft};

#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    /// JSON file with the chapter metadata; defaults to One Piece chapter 1.
    #[arg(long)]
    pub metadata: Option<PathBuf>,
}

impl PublishArgs {
    pub fn load_metadata(&self) -> Result<ChapterMetadata, CommandError> {
        match &self.metadata {
            Some(path) => read_json(path),
            None => Ok(fixtures::one_piece_chapter()),
        }
    }
}

pub async fn run<W: Write>(
    nft: &MangaNft,
    metadata: &ChapterMetadata,
    out: &mut W,
) -> Result<(Receipt, Vec<ChapterEvent>), CommandError> {
    writeln!(out, "Calling createChapter...")?;

    let pending = nft.create_chapter(metadata).await?;
    writeln!(out, "Transaction sent, hash: {}", pending.tx_hash)?;

    let receipt = nft.confirm(pending).await?;
    writeln!(
        out,
        "Transaction confirmed in block {} (gas used {})",
        receipt.block_number, receipt.gas_used
    )?;

    let events = nft.chapter_events(&receipt);
    for event in &events {
        write_event(out, event)?;
    }

    Ok((receipt, events))
}

fn write_event<W: Write>(out: &mut W, event: &ChapterEvent) -> std::io::Result<()> {
    match event {
        ChapterEvent::Created {
            token_id,
            creator,
            title,
        } => {
            writeln!(out, "🎉 ChapterCreated event:")?;
            writeln!(out, "  tokenId:      {}", token_id)?;
            writeln!(out, "  creator:      {}", creator)?;
            writeln!(out, "  mangaTitleZh: {}", title.zh)?;
            writeln!(out, "  mangaTitleEn: {}", title.en)?;
            writeln!(out, "  mangaTitleJp: {}", title.jp)
        }
        ChapterEvent::Minted {
            token_id,
            to,
            mint_time,
        } => {
            writeln!(out, "🔔 ChapterMinted event:")?;
            writeln!(out, "  tokenId:  {}", token_id)?;
            writeln!(out, "  to:       {}", to)?;
            writeln!(out, "  mintTime: {}", format_timestamp(*mint_time))
        }
    }
}
