//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key, RPC URL)
//!     → wallet.rs (key loading)
//!     → client.rs (RPC connection with timeouts, read-only calls)
//!     → transaction.rs (build, sign, broadcast, confirm)
//!     → events.rs (receipt log decoding)
//! ```
//!
//! Per call: `Built → Submitted → {Confirmed | Reverted | TimedOut}`.
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod events;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{ChainError, ChainResult, PendingTx, Receipt};
pub use wallet::Wallet;
