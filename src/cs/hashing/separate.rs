//! # Separate Chaining Hash Table
//!
//! This module implements **separate chaining** (open hashing) over integer keys:
//! - A fixed number of **buckets**, chosen at construction and never resized.
//! - Each bucket is a `Vec` of keys kept in **insertion order**.
//! - **Insert** appends to the key's bucket and never fails, so buckets grow without bound.
//! - **Duplicates** are kept; each copy occupies its own place in the chain.
//! - **Search** scans only the key's own bucket.

use std::fmt;

use log::debug;

use crate::cs::hashing::{primary_hash, HashTable, Key, Placement};
use crate::error::{Error, Result};

/// A bucket is the chain of keys that hash to one index.
type Bucket = Vec<Key>;

/// A separate-chaining table with a fixed bucket count.
#[derive(Debug, Clone)]
pub struct SeparateChaining {
    buckets: Vec<Bucket>,
    /// Every insert counts, duplicates included.
    len: usize,
}

impl SeparateChaining {
    pub const NAME: &'static str = "Separate Chaining";

    /// Creates a table with `capacity` empty buckets.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(SeparateChaining {
            buckets: vec![Bucket::new(); capacity],
            len: 0,
        })
    }

    /// The chain stored at `index`, or `None` if `index` is out of range.
    pub fn bucket(&self, index: usize) -> Option<&[Key]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl HashTable for SeparateChaining {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, key: Key) -> Result<Placement> {
        let index = primary_hash(key, self.buckets.len());
        let bucket = &mut self.buckets[index];
        bucket.push(key);
        self.len += 1;
        debug!(
            "{}: key {} appended to bucket {} (chain length {})",
            self.name(),
            key,
            index,
            self.buckets[index].len()
        );
        Ok(Placement { index, probes: 1 })
    }

    fn search(&self, key: Key) -> bool {
        let index = primary_hash(key, self.buckets.len());
        self.buckets[index].iter().any(|&k| k == key)
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SeparateChaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{} --> ", i)?;
            for key in bucket {
                write!(f, "{} -> ", key)?;
            }
            writeln!(f, "NULL")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(SeparateChaining::new(0).unwrap_err(), Error::ZeroCapacity);
    }

    #[test]
    fn empty_table_finds_nothing() {
        let table = SeparateChaining::new(10).unwrap();
        assert!(table.is_empty());
        for key in -20..20 {
            assert!(!table.search(key));
        }
    }

    #[test]
    fn collisions_never_fail() {
        let mut table = SeparateChaining::new(5).unwrap();
        // Every key hashes to bucket 0.
        for i in 0..50 {
            let placement = table.insert(i * 5).unwrap();
            assert_eq!(placement, Placement { index: 0, probes: 1 });
        }
        assert_eq!(table.len(), 50);
        assert_eq!(table.longest_chain(), 50);
        assert!(table.load_factor() > 1.0);
        for i in 0..50 {
            assert!(table.search(i * 5));
        }
        assert!(!table.search(250));
        assert_eq!(table.bucket(1), Some(&[][..]));
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        let mut table = SeparateChaining::new(10).unwrap();
        for key in [3, 13, 3, 23] {
            table.insert(key).unwrap();
        }
        assert_eq!(table.len(), 4);
        assert_eq!(table.bucket(3), Some(&[3, 13, 3, 23][..]));
        assert!(table.search(3));
        assert!(table.search(13));
        assert!(table.search(23));
        assert_eq!(table.bucket(10), None);
    }

    #[test]
    fn negative_keys_land_in_range() {
        let mut table = SeparateChaining::new(10).unwrap();
        let placement = table.insert(-1).unwrap();
        assert_eq!(placement.index, 9);
        assert!(table.search(-1));
        assert!(!table.search(9));
    }

    #[test]
    fn display_renders_chains() {
        let mut table = SeparateChaining::new(3).unwrap();
        table.insert(1).unwrap();
        table.insert(4).unwrap();
        assert_eq!(table.display(), "0 --> NULL\n1 --> 1 -> 4 -> NULL\n2 --> NULL\n");
        assert_eq!(table.display().lines().count(), 3);
    }
}
