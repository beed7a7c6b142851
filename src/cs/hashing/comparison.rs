//! # Side-by-Side Comparison
//!
//! Runs one key stream through several hash tables of the same capacity, so the behavior of
//! each collision resolution strategy can be compared directly.
//!
//! ## Example
//! ```rust
//! use hashlab::cs::hashing::TableSet;
//!
//! let mut tables = TableSet::new(4).unwrap();
//! let failed = tables.insert_many([0, 4, 8, 12]);
//! // quadratic probing and double hashing cannot place every key
//! assert!(failed > 0);
//! for (_, found) in tables.search(0) {
//!     assert!(found);
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::cs::hashing::{
    HashTable, Key, OpenAddressingTable, Placement, ProbingStrategy, SeparateChaining,
};
use crate::error::{Error, Result};

/// One of the four collision resolution strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    SeparateChaining,
    LinearProbing,
    QuadraticProbing,
    DoubleHashing,
}

impl Strategy {
    /// All strategies, in the order they are displayed.
    pub const ALL: [Strategy; 4] = [
        Strategy::SeparateChaining,
        Strategy::LinearProbing,
        Strategy::QuadraticProbing,
        Strategy::DoubleHashing,
    ];

    /// The open addressing scheme behind this strategy, `None` for chaining.
    pub fn probing(self) -> Option<ProbingStrategy> {
        match self {
            Strategy::SeparateChaining => None,
            Strategy::LinearProbing => Some(ProbingStrategy::Linear),
            Strategy::QuadraticProbing => Some(ProbingStrategy::Quadratic),
            Strategy::DoubleHashing => Some(ProbingStrategy::DoubleHash),
        }
    }

    /// Constructs an empty table of this kind.
    pub fn build(self, capacity: usize) -> Result<Box<dyn HashTable>> {
        let table: Box<dyn HashTable> = match self.probing() {
            None => Box::new(SeparateChaining::new(capacity)?),
            Some(probing) => Box::new(OpenAddressingTable::new(capacity, probing)?),
        };
        Ok(table)
    }

    pub fn name(self) -> &'static str {
        match self.probing() {
            None => SeparateChaining::NAME,
            Some(probing) => probing.name(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "chaining" | "separate" => Ok(Strategy::SeparateChaining),
            "linear" => Ok(Strategy::LinearProbing),
            "quadratic" => Ok(Strategy::QuadraticProbing),
            "double" | "double-hashing" => Ok(Strategy::DoubleHashing),
            other => Err(Error::InvalidInput(format!(
                "unknown strategy '{}', expected chaining, linear, quadratic or double",
                other
            ))),
        }
    }
}

/// A group of independently owned tables that all receive the same keys.
pub struct TableSet {
    tables: Vec<Box<dyn HashTable>>,
}

impl TableSet {
    /// One table per strategy, all with `capacity` slots.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_strategies(capacity, &Strategy::ALL)
    }

    /// One table for each of `strategies`, in the given order.
    pub fn with_strategies(capacity: usize, strategies: &[Strategy]) -> Result<Self> {
        let tables = strategies
            .iter()
            .map(|s| s.build(capacity))
            .collect::<Result<Vec<_>>>()?;
        debug!("built {} tables with capacity {}", tables.len(), capacity);
        Ok(TableSet { tables })
    }

    pub fn tables(&self) -> &[Box<dyn HashTable>] {
        &self.tables
    }

    /// Inserts `key` into every table and reports each outcome.
    pub fn insert(&mut self, key: Key) -> Vec<(&'static str, Result<Placement>)> {
        self.tables
            .iter_mut()
            .map(|table| (table.name(), table.insert(key)))
            .collect()
    }

    /// Inserts a stream of keys into every table. Returns how many placements failed in total.
    pub fn insert_many<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter()
            .map(|key| {
                self.insert(key)
                    .iter()
                    .filter(|(_, outcome)| outcome.is_err())
                    .count()
            })
            .sum()
    }

    /// Searches every table for `key`.
    pub fn search(&self, key: Key) -> Vec<(&'static str, bool)> {
        self.tables
            .iter()
            .map(|table| (table.name(), table.search(key)))
            .collect()
    }

    /// Every table's listing under its name.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for table in &self.tables {
            out.push('\n');
            out.push_str(table.name());
            out.push_str(" Table:\n");
            out.push_str(&table.display());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strategy_names() {
        assert_eq!("linear".parse::<Strategy>().unwrap(), Strategy::LinearProbing);
        assert_eq!("Chaining".parse::<Strategy>().unwrap(), Strategy::SeparateChaining);
        assert_eq!("quadratic".parse::<Strategy>().unwrap(), Strategy::QuadraticProbing);
        assert_eq!("double".parse::<Strategy>().unwrap(), Strategy::DoubleHashing);
        assert!(matches!(
            "cuckoo".parse::<Strategy>(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn built_tables_carry_their_names() {
        for strategy in Strategy::ALL {
            let table = strategy.build(5).unwrap();
            assert_eq!(table.name(), strategy.name());
            assert_eq!(table.capacity(), 5);
            assert!(table.is_empty());
        }
        assert!(matches!(
            Strategy::LinearProbing.build(0),
            Err(Error::ZeroCapacity)
        ));
    }

    #[test]
    fn names_follow_the_underlying_tables() {
        assert_eq!(Strategy::SeparateChaining.name(), SeparateChaining::NAME);
        assert_eq!(Strategy::DoubleHashing.probing(), Some(ProbingStrategy::DoubleHash));
        for strategy in Strategy::ALL {
            match strategy.probing() {
                Some(probing) => {
                    let table = OpenAddressingTable::new(3, probing).unwrap();
                    assert_eq!(strategy.name(), table.name());
                    assert_eq!(strategy.to_string(), probing.name());
                }
                None => assert_eq!(strategy, Strategy::SeparateChaining),
            }
        }
    }

    #[test]
    fn zero_capacity_set_fails() {
        assert!(matches!(TableSet::new(0), Err(Error::ZeroCapacity)));
    }

    #[test]
    fn same_key_goes_to_every_table() {
        let mut tables = TableSet::new(10).unwrap();
        let outcomes = tables.insert(42);
        assert_eq!(outcomes.len(), 4);
        for (name, outcome) in &outcomes {
            assert_eq!(outcome.as_ref().unwrap().index, 2, "{}", name);
        }
        for (_, found) in tables.search(42) {
            assert!(found);
        }
        for (_, found) in tables.search(52) {
            assert!(!found);
        }
    }

    #[test]
    fn clustered_keys_show_strategy_differences() {
        let mut tables = TableSet::new(4).unwrap();
        let failed = tables.insert_many([0, 4, 8, 12]);

        let lens: Vec<usize> = tables.tables().iter().map(|t| t.len()).collect();
        // double hashing probes 0, 2, 0, 2 for key 12, both taken
        assert_eq!(lens, vec![4, 4, 2, 3]);
        assert_eq!(failed, 3);

        let results = tables.search(8);
        assert_eq!(
            results,
            vec![
                ("Separate Chaining", true),
                ("Linear Probing", true),
                ("Quadratic Probing", false),
                ("Double Hashing", true),
            ]
        );
    }

    #[test]
    fn full_tables_report_capacity_exhausted() {
        let mut tables = TableSet::new(2).unwrap();
        tables.insert_many([0, 1]);
        let outcomes = tables.insert(2);
        assert!(outcomes[0].1.is_ok());
        for (_, outcome) in &outcomes[1..] {
            assert!(matches!(
                outcome,
                Err(Error::CapacityExhausted { key: 2, capacity: 2 })
            ));
        }
    }

    #[test]
    fn subset_of_strategies() {
        let tables = TableSet::with_strategies(
            3,
            &[Strategy::DoubleHashing, Strategy::LinearProbing],
        )
        .unwrap();
        let names: Vec<_> = tables.tables().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Double Hashing", "Linear Probing"]);
    }

    #[test]
    fn display_lists_every_table() {
        let tables = TableSet::new(3).unwrap();
        let rendered = tables.display();
        for strategy in Strategy::ALL {
            assert!(rendered.contains(&format!("{} Table:", strategy)));
        }
        // four headings, four blank separators, three slots each
        assert_eq!(rendered.lines().count(), 4 * (2 + 3));
    }
}
