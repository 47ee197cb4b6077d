//! Query path: value() and lookup().
//!
//! Both scan records in load order and stop at the first record whose series,
//! redemption date, and issue year all match. Table values are per $25 of face
//! value and are scaled by `face_value / 25`.

use crate::{BondTable, TableError};

/// Face value the data file's amounts are quoted for.
pub const BASE_FACE_VALUE: f64 = 25.0;

/// Parameters of a single bond valuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondQuery {
    /// On-disk series code (`"N"` for EE bonds).
    pub series: String,
    pub redemption_year: i32,
    pub redemption_month: i32,
    pub issue_year: i32,
    /// 1 = January .. 12 = December.
    pub issue_month: i32,
    pub face_value: i32,
}

fn scale(amount: f64, face_value: i32) -> f64 {
    amount * (face_value as f64 / BASE_FACE_VALUE)
}

impl BondTable {
    /// Current value of a bond, or `0.0` if nothing matches.
    ///
    /// A matching record with no value for `issue_month` (outside 1..=12) is
    /// skipped and the scan continues, so an invalid month always yields `0.0`.
    /// Callers cannot tell "not found" from a bond worth nothing; use
    /// [`BondTable::lookup`] for that.
    pub fn value(
        &self,
        series: &str,
        redemption_year: i32,
        redemption_month: i32,
        issue_year: i32,
        issue_month: i32,
        face_value: i32,
    ) -> f64 {
        self.records
            .iter()
            .filter(|r| r.matches(series, redemption_year, redemption_month, issue_year))
            .find_map(|r| r.issue_value(issue_month))
            .map(|v| scale(v, face_value))
            .unwrap_or(0.0)
    }

    /// Strict form of [`BondTable::value`].
    ///
    /// Rejects an out-of-range issue month up front and reports "no matching
    /// record" as `Ok(None)` instead of `0.0`.
    pub fn lookup(&self, q: &BondQuery) -> Result<Option<f64>, TableError> {
        if record::issue_value_field(q.issue_month).is_none() {
            return Err(TableError::InvalidIssueMonth(q.issue_month));
        }

        Ok(self
            .records
            .iter()
            .find(|r| {
                r.matches(
                    &q.series,
                    q.redemption_year,
                    q.redemption_month,
                    q.issue_year,
                )
            })
            .and_then(|r| r.issue_value(q.issue_month))
            .map(|v| scale(v, q.face_value)))
    }
}
