//! # Open Addressing Hash Tables
//!
//! This module provides integer hash tables using *open addressing*: every key lives directly in one
//! slot of a single fixed-size array, and collisions are resolved by probing other slots of the
//! same array.
//!
//! ## Key Features
//! - **Three probing strategies** behind one engine, selected with [`ProbingStrategy`]:
//!   linear (`h + i`), quadratic (`h + i²`) and double hashing (`h + i·h2`), all `mod N`.
//! - **Fixed capacity**: no growth, no rehash, no deletion and therefore no tombstones.
//!   A slot is either `Empty` or `Occupied`, and only ever moves from the first to the second.
//! - **Bounded probing**: `insert` and `search` walk the very same [`ProbeSequence`] of exactly `N`
//!   indices, so every operation terminates after at most `N` probes.
//! - **Reported failures**: a full table reports [`Error::CapacityExhausted`]; a key whose sequence
//!   only meets occupied slots reports [`Error::ProbeSequenceExhausted`].
//!
//! **Note**: quadratic probing does not reach every residue for most `N`, and double hashing only
//! covers the whole table when `N` and `h2(key)` are coprime. Such keys fail to insert even though
//! the table has free slots.
//!
//! ## Example
//! ```rust
//! use hashlab::cs::hashing::{HashTable, OpenAddressingTable};
//!
//! let mut table = OpenAddressingTable::linear(10).unwrap();
//! table.insert(15).unwrap();
//! table.insert(25).unwrap();
//! assert_eq!(table.slot(6), Some(25));
//! assert!(table.search(25));
//! ```

use std::fmt;

use log::{debug, trace, warn};

use crate::cs::hashing::{primary_hash, secondary_hash, HashTable, Key, Placement};
use crate::error::{Error, Result};

/// Capacity used by [`OpenAddressingBuilder`] if none is given.
const DEFAULT_CAPACITY: usize = 10;

/// A slot is either `Empty` or `Occupied(key)`. There is no deleted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Empty,
    Occupied(Key),
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Empty
    }
}

/// The stride pattern used for collision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbingStrategy {
    /// Linear probing: i-th slot = (h + i) mod N
    Linear,
    /// Quadratic probing: i-th slot = (h + i^2) mod N
    Quadratic,
    /// Double hashing: i-th slot = (h + i * h2) mod N, with h2 = 7 - (key mod 7)
    DoubleHash,
}

impl ProbingStrategy {
    /// Index of the `i`-th probe for `key` in a table of `capacity` slots.
    pub fn probe_index(self, key: Key, i: usize, capacity: usize) -> usize {
        let base = primary_hash(key, capacity) as u128;
        let i = i as u128;
        let step = match self {
            ProbingStrategy::Linear => i,
            ProbingStrategy::Quadratic => i * i,
            ProbingStrategy::DoubleHash => i * secondary_hash(key) as u128,
        };
        ((base + step) % capacity as u128) as usize
    }

    /// Display name of the resulting table.
    pub fn name(self) -> &'static str {
        match self {
            ProbingStrategy::Linear => "Linear Probing",
            ProbingStrategy::Quadratic => "Quadratic Probing",
            ProbingStrategy::DoubleHash => "Double Hashing",
        }
    }
}

/// The `N` candidate slots for one key, in probe order.
///
/// Indices can repeat for quadratic probing and double hashing; the sequence still stops after `N`.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    key: Key,
    strategy: ProbingStrategy,
    capacity: usize,
    i: usize,
}

impl ProbeSequence {
    pub fn new(key: Key, strategy: ProbingStrategy, capacity: usize) -> Self {
        ProbeSequence {
            key,
            strategy,
            capacity,
            i: 0,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.i >= self.capacity {
            return None;
        }
        let index = self.strategy.probe_index(self.key, self.i, self.capacity);
        self.i += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.capacity - self.i;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ProbeSequence {}

/// A builder for [`OpenAddressingTable`], to pick capacity and probing strategy.
#[derive(Debug, Clone)]
pub struct OpenAddressingBuilder {
    capacity: usize,
    strategy: ProbingStrategy,
}

impl Default for OpenAddressingBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: ProbingStrategy::Linear,
        }
    }
}

impl OpenAddressingBuilder {
    /// Create a builder with capacity 10 and linear probing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots. Unlike a growable map, this is final.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the collision resolution strategy.
    pub fn with_strategy(mut self, strategy: ProbingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Finalize the table. Fails with [`Error::ZeroCapacity`] if the capacity is zero.
    pub fn build(self) -> Result<OpenAddressingTable> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut slots = Vec::with_capacity(self.capacity);
        slots.resize_with(self.capacity, Default::default);

        Ok(OpenAddressingTable {
            slots,
            len: 0,
            strategy: self.strategy,
        })
    }
}

/// The open addressing table with a chosen probing strategy.
#[derive(Debug, Clone)]
pub struct OpenAddressingTable {
    slots: Vec<Slot>,
    len: usize,
    strategy: ProbingStrategy,
}

impl OpenAddressingTable {
    /// Creates an empty table of `capacity` slots.
    pub fn new(capacity: usize, strategy: ProbingStrategy) -> Result<Self> {
        OpenAddressingBuilder::new()
            .with_capacity(capacity)
            .with_strategy(strategy)
            .build()
    }

    pub fn linear(capacity: usize) -> Result<Self> {
        Self::new(capacity, ProbingStrategy::Linear)
    }

    pub fn quadratic(capacity: usize) -> Result<Self> {
        Self::new(capacity, ProbingStrategy::Quadratic)
    }

    pub fn double_hashing(capacity: usize) -> Result<Self> {
        Self::new(capacity, ProbingStrategy::DoubleHash)
    }

    pub fn strategy(&self) -> ProbingStrategy {
        self.strategy
    }

    /// The slots `insert` and `search` examine for `key`, in order.
    pub fn probe_sequence(&self, key: Key) -> ProbeSequence {
        ProbeSequence::new(key, self.strategy, self.slots.len())
    }

    /// Key stored at `index`, or `None` if the slot is empty or out of range.
    pub fn slot(&self, index: usize) -> Option<Key> {
        match self.slots.get(index) {
            Some(Slot::Occupied(key)) => Some(*key),
            _ => None,
        }
    }

    /// Returns an iterator over all occupied `(index, key)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Key)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Slot::Occupied(key) => Some((i, *key)),
                Slot::Empty => None,
            })
    }
}

impl HashTable for OpenAddressingTable {
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, key: Key) -> Result<Placement> {
        let capacity = self.slots.len();
        if self.len >= capacity {
            warn!("{}: table is full, cannot insert key {}", self.name(), key);
            return Err(Error::CapacityExhausted { key, capacity });
        }

        for (i, index) in self.probe_sequence(key).enumerate() {
            let slot = self.slots[index];
            match slot {
                Slot::Empty => {
                    self.slots[index] = Slot::Occupied(key);
                    self.len += 1;
                    debug!(
                        "{}: key {} placed in slot {} after {} probe(s)",
                        self.name(),
                        key,
                        index,
                        i + 1
                    );
                    return Ok(Placement {
                        index,
                        probes: i + 1,
                    });
                }
                Slot::Occupied(other) => {
                    trace!("{}: slot {} taken by {}", self.name(), index, other);
                }
            }
        }

        warn!(
            "{}: no available slot for key {} after {} probes ({} of {} slots used)",
            self.name(),
            key,
            capacity,
            self.len,
            capacity
        );
        Err(Error::ProbeSequenceExhausted {
            key,
            probes: capacity,
        })
    }

    fn search(&self, key: Key) -> bool {
        for index in self.probe_sequence(key) {
            match self.slots[index] {
                // insert would have stopped here, so the key is not further along
                Slot::Empty => return false,
                Slot::Occupied(k) if k == key => return true,
                Slot::Occupied(_) => {}
            }
        }
        false
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OpenAddressingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Occupied(key) => writeln!(f, "{} --> {}", i, key)?,
                Slot::Empty => writeln!(f, "{} --> NULL", i)?,
            }
        }
        Ok(())
    }
}
