//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (loader.rs)
//!     → environment, including a local .env file (loader.rs)
//!     → command-line overrides (cli.rs)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (immutable for the rest of the run)
//! ```
//!
//! # Design Decisions
//! - Signing keys never pass through this module or its files
//! - Validation returns all errors; missing values are reported per command

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, Overrides};
pub use schema::{
    ChainConfig, ClientConfig, ContractKind, ContractsConfig, CREATOR_KEY_ENV, PRIVATE_KEY_ENV,
};
