//! Observability subsystem.
//!
//! Every subsystem emits `tracing` events with structured fields
//! (`function`, `tx_hash`, `block_number`); logging.rs installs the
//! subscriber that writes them out.

pub mod logging;
