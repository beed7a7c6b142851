//! # Hash Table Contract
//!
//! The common interface shared by every collision resolution strategy in this crate.
//! Each table has a fixed capacity `N` chosen at construction; tables never grow, never
//! rehash and never remove keys, so every slot goes from empty to occupied exactly once.
//!
//! The trait is object safe, so a caller can hold one table per strategy as
//! `Box<dyn HashTable>` and drive them all with the same key stream.

use crate::cs::hashing::Key;
use crate::error::Result;

/// Where a successful `insert` put its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Slot (open addressing) or bucket (chaining) that received the key.
    pub index: usize,
    /// Number of slots examined, counting the one the key landed in.
    pub probes: usize,
}

/// Uniform shape of a fixed-capacity integer hash table.
pub trait HashTable {
    /// Human readable name of the strategy, e.g. `"Linear Probing"`.
    fn name(&self) -> &'static str;

    /// Number of slots or buckets, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of keys successfully inserted so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `len / capacity`. Only separate chaining can go above `1.0`.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Stores `key`. On error the table is left untouched.
    fn insert(&mut self, key: Key) -> Result<Placement>;

    /// Whether `key` is reachable along the strategy's own probe or scan order.
    fn search(&self, key: Key) -> bool;

    /// One line per index `0..capacity`, in index order.
    fn display(&self) -> String;
}
