pub mod comparison;
pub mod hash_fn;
pub mod open_addressing;
pub mod separate;
pub mod table;

pub use comparison::{Strategy, TableSet};
pub use hash_fn::{primary_hash, secondary_hash, Key, SECONDARY_HASH_PRIME};
pub use open_addressing::{
    OpenAddressingBuilder, OpenAddressingTable, ProbeSequence, ProbingStrategy,
};
pub use separate::SeparateChaining;
pub use table::{HashTable, Placement};
