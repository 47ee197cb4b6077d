//! Load path: load() and load_from_file().
//!
//! Lines are decoded into a staging buffer and appended to the table only
//! once the whole stream has been read. A decode or read failure leaves the
//! table untouched.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use record::decode_record;
use tracing::{debug, info};

use crate::{BondTable, TableError};

impl BondTable {
    /// Reads `reader` line by line and appends every decoded record.
    ///
    /// Returns the number of records appended.
    ///
    /// # Termination
    ///
    /// - **End of stream** -> `Ok(n)`. A last line without `\n` still counts.
    /// - **Blank line** -> skipped.
    /// - **Decode failure** -> `Err(TableError::Decode { .. })`, nothing appended.
    /// - **I/O error** -> `Err(TableError::Io(..))`, nothing appended.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<usize, TableError> {
        let mut staged = Vec::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let rec = decode_record(&line).map_err(|source| TableError::Decode {
                line: idx + 1,
                source,
            })?;
            staged.push(rec);
        }

        let added = staged.len();
        self.records.append(&mut staged);
        debug!(added, total = self.records.len(), "loaded bond records");
        Ok(added)
    }

    /// Opens `path` and loads it with [`BondTable::load`].
    ///
    /// The file is closed before returning, whatever the outcome.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let added = self.load(file)?;
        info!(path = %path.display(), records = added, "loaded data file");
        Ok(added)
    }
}
