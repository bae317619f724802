//! Typed bindings for the two deployed contracts.

pub mod abi;
pub mod events;
pub mod manga_nft;
pub mod monthly_report;
pub mod records;

pub use events::ChapterEvent;
pub use manga_nft::MangaNft;
pub use monthly_report::MonthlyReport;
pub use records::{ChapterMetadata, CreatorRecord, LocalizedText, MonthId, ReaderRecord};
