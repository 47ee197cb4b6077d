//! # Table - Savings Bond Value Table
//!
//! Holds the decoded rows of a treasury redemption value file and answers
//! point queries against them.
//!
//! ## Lifecycle
//!
//! ```text
//! BondTable::new()          empty table
//!   |
//!   v
//! load() / load_from_file() decode every line, append in file order
//!   |
//!   v
//! value() / lookup()        linear scan, first match wins
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module      | Purpose                                             |
//! |-------------|-----------------------------------------------------|
//! | [`lib.rs`]  | `BondTable` struct, accessors, `TableError`         |
//! | [`load`]    | `load()`, `load_from_file()`                        |
//! | [`query`]   | `value()`, `lookup()`, `BondQuery`                  |
//!
//! ## Example
//!
//! ```rust
//! use table::BondTable;
//!
//! let data = format!("N2030012000{}\n", "002500".repeat(12));
//! let mut table = BondTable::new();
//! table.load(data.as_bytes()).unwrap();
//! assert_eq!(table.value("N", 2030, 1, 2000, 3, 100), 100.0);
//! ```
mod load;
mod query;

pub use query::{BondQuery, BASE_FACE_VALUE};
pub use record::{BondValueRecord, DecodeError};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by table loading and strict lookups.
#[derive(Debug, Error)]
pub enum TableError {
    /// The data file could not be opened.
    #[error("cannot open data file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the stream failed part way through.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A line could not be decoded. `line` is 1-based.
    #[error("line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// A strict lookup was asked for an issue month outside 1..=12.
    #[error("issue month {0} out of range (expected 1-12)")]
    InvalidIssueMonth(i32),
}

/// Ordered, append-only collection of decoded bond value records.
///
/// Records keep the order they appeared in the data file. Duplicate keys are
/// kept as-is; queries return the first one.
#[derive(Debug, Default)]
pub struct BondTable {
    records: Vec<BondValueRecord>,
}

impl BondTable {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in load order.
    pub fn records(&self) -> &[BondValueRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &BondValueRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests;
