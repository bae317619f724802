//! Local mirrors of the values stored on-chain.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::contracts::abi::{IMangaNft, IMonthlyReport};

/// Reporting period key, e.g. `202502`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month id '{0}': expected a positive integer")]
pub struct InvalidMonthId(String);

impl MonthId {
    pub fn new(value: u64) -> Result<Self, InvalidMonthId> {
        if value == 0 {
            return Err(InvalidMonthId(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for MonthId {
    type Err = InvalidMonthId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s.trim().parse().map_err(|_| InvalidMonthId(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MonthId> for U256 {
    fn from(month: MonthId) -> Self {
        U256::from(month.0)
    }
}

/// Per-month statistics for a creator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatorRecord {
    pub published_count: U256,
    pub shared_count: U256,
    pub total_value: U256,
    pub transaction_count: U256,
}

impl CreatorRecord {
    pub fn new(published_count: u64, shared_count: u64, total_value: u64, transaction_count: u64) -> Self {
        Self {
            published_count: U256::from(published_count),
            shared_count: U256::from(shared_count),
            total_value: U256::from(total_value),
            transaction_count: U256::from(transaction_count),
        }
    }
}

impl From<CreatorRecord> for IMonthlyReport::CreatorData {
    fn from(record: CreatorRecord) -> Self {
        Self {
            totalNFTPublished: record.published_count,
            totalNFTShared: record.shared_count,
            totalNFTValue: record.total_value,
            totalTransactions: record.transaction_count,
        }
    }
}

impl From<IMonthlyReport::CreatorData> for CreatorRecord {
    fn from(data: IMonthlyReport::CreatorData) -> Self {
        Self {
            published_count: data.totalNFTPublished,
            shared_count: data.totalNFTShared,
            total_value: data.totalNFTValue,
            transaction_count: data.totalTransactions,
        }
    }
}

/// Per-month balance figures for a reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderRecord {
    pub charged_this_month: U256,
    pub current_balance: U256,
}

impl ReaderRecord {
    pub fn new(charged_this_month: u64, current_balance: u64) -> Self {
        Self {
            charged_this_month: U256::from(charged_this_month),
            current_balance: U256::from(current_balance),
        }
    }
}

impl From<ReaderRecord> for IMonthlyReport::ReaderData {
    fn from(record: ReaderRecord) -> Self {
        Self {
            tokensChargedThisMonth: record.charged_this_month,
            currentBalance: record.current_balance,
        }
    }
}

impl From<IMonthlyReport::ReaderData> for ReaderRecord {
    fn from(data: IMonthlyReport::ReaderData) -> Self {
        Self {
            charged_this_month: data.tokensChargedThisMonth,
            current_balance: data.currentBalance,
        }
    }
}

/// A string in each supported locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub zh: String,
    pub en: String,
    pub jp: String,
}

/// Everything `createChapter` needs to publish a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMetadata {
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Copy limit; the contract requires a multiple of 5.
    pub max_copies: u64,
    /// Off-chain content location, usually an IPFS gateway URL.
    pub uri: String,
}

impl From<&ChapterMetadata> for IMangaNft::createChapterCall {
    fn from(metadata: &ChapterMetadata) -> Self {
        Self {
            mangaTitleZh: metadata.title.zh.clone(),
            mangaTitleEn: metadata.title.en.clone(),
            mangaTitleJp: metadata.title.jp.clone(),
            descriptionZh: metadata.description.zh.clone(),
            descriptionEn: metadata.description.en.clone(),
            descriptionJp: metadata.description.jp.clone(),
            maxCopies: U256::from(metadata.max_copies),
            uri_: metadata.uri.clone(),
        }
    }
}
