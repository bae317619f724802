//! Client for the manga NFT and monthly report contracts.

pub mod blockchain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod contracts;
pub mod observability;

pub use blockchain::{ChainClient, ChainError, Receipt, Wallet};
pub use config::ClientConfig;
pub use contracts::{MangaNft, MonthlyReport};
