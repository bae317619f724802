//! Events emitted by the manga NFT contract.

use alloy::primitives::{Address, U256};
use alloy::rpc::types::Log;
use chrono::{DateTime, Utc};

use crate::blockchain::events::EventSet;
use crate::contracts::abi::IMangaNft::{ChapterCreated, ChapterMinted};
use crate::contracts::records::LocalizedText;

/// A decoded `ChapterCreated` or `ChapterMinted` log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterEvent {
    Created {
        token_id: U256,
        creator: Address,
        title: LocalizedText,
    },
    Minted {
        token_id: U256,
        to: Address,
        /// Unix timestamp in seconds.
        mint_time: U256,
    },
}

impl ChapterEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ChapterEvent::Created { .. } => "ChapterCreated",
            ChapterEvent::Minted { .. } => "ChapterMinted",
        }
    }

    pub fn token_id(&self) -> U256 {
        match self {
            ChapterEvent::Created { token_id, .. } | ChapterEvent::Minted { token_id, .. } => *token_id,
        }
    }
}

impl EventSet for ChapterEvent {
    fn decode(log: &Log) -> Option<Self> {
        if let Ok(decoded) = log.log_decode::<ChapterCreated>() {
            let event = decoded.inner.data;
            return Some(ChapterEvent::Created {
                token_id: event.tokenId,
                creator: event.creator,
                title: LocalizedText {
                    zh: event.mangaTitleZh,
                    en: event.mangaTitleEn,
                    jp: event.mangaTitleJp,
                },
            });
        }

        if let Ok(decoded) = log.log_decode::<ChapterMinted>() {
            let event = decoded.inner.data;
            return Some(ChapterEvent::Minted {
                token_id: event.tokenId,
                to: event.to,
                mint_time: event.mintTime,
            });
        }

        tracing::trace!(address = %log.address(), "Skipping unrelated log");
        None
    }
}

/// Render an on-chain timestamp as UTC, falling back to the raw value when
/// it is out of range.
pub fn format_timestamp(secs: U256) -> String {
    u64::try_from(secs)
        .ok()
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}
