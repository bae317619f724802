//! Best-effort decoding of receipt logs.
//!
//! A receipt may carry logs from any contract the transaction touched, so
//! entries that match none of the known events are skipped, never reported
//! as errors.

use alloy::rpc::types::Log;

use crate::blockchain::types::Receipt;

/// A closed set of events that logs can be decoded into.
pub trait EventSet: Sized {
    /// Decode one log, or `None` if it is not a member of the set.
    fn decode(log: &Log) -> Option<Self>;
}

/// Decode every log in `receipt` that belongs to `E`, keeping receipt order.
pub fn decode_logs<E: EventSet>(receipt: &Receipt) -> Vec<E> {
    let decoded: Vec<E> = receipt.logs.iter().filter_map(E::decode).collect();

    tracing::debug!(
        tx_hash = %receipt.tx_hash,
        total = receipt.logs.len(),
        decoded = decoded.len(),
        "Decoded receipt logs"
    );

    decoded
}
