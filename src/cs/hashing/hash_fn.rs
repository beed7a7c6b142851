//! # Hash Functions
//!
//! The two integer hash functions shared by every table in this crate:
//! - **Primary** `h(key) = key mod N`, the home slot or bucket of a key.
//! - **Secondary** `h2(key) = 7 - (key mod 7)`, the stride used by double hashing.
//!
//! Both use Euclidean modulo, so negative keys map into range as well:
//! `h(-1)` with `N = 10` is `9`, and `h2(-1)` is `7 - 6 = 1`.

/// Keys stored in the tables.
pub type Key = i64;

/// Modulus of the secondary hash. A small prime below typical table sizes.
pub const SECONDARY_HASH_PRIME: Key = 7;

/// Home index of `key` in a table of `capacity` slots, always in `[0, capacity)`.
///
/// `capacity` must be non-zero; every table rejects a zero capacity at construction.
pub fn primary_hash(key: Key, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (key as i128).rem_euclid(capacity as i128) as usize
}

/// Double hashing stride for `key`, always in `[1, 7]` and therefore never zero.
pub fn secondary_hash(key: Key) -> usize {
    (SECONDARY_HASH_PRIME - key.rem_euclid(SECONDARY_HASH_PRIME)) as usize
}
