use thiserror::Error;

use crate::cs::hashing::Key;

/// Errors reported by the hash tables and the comparison driver.
///
/// None of these are fatal: a failed insert leaves the table exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("table capacity must be positive")]
    ZeroCapacity,

    /// `insert` on an open addressing table whose every slot is occupied.
    #[error("hash table is full: cannot insert key {key} into {capacity} occupied slots")]
    CapacityExhausted { key: Key, capacity: usize },

    /// The key's probe sequence only visited occupied slots, although the table
    /// itself may still have room.
    #[error("cannot insert key {key}: no available slot found after {probes} probes")]
    ProbeSequenceExhausted { key: Key, probes: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
