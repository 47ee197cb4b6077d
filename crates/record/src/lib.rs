//! # Record - Savings Bond Value Record Decoder
//!
//! Decodes one line of the treasury savings-bond redemption value file into a
//! [`BondValueRecord`].
//!
//! ## Line Layout
//!
//! Every record is a fixed-width text line of at least 83 characters. Offsets
//! are 0-based and end-exclusive:
//!
//! ```text
//! [series: 1][redemption_year: 4][redemption_month: 2][issue_year: 4]
//! [jan: 6][feb: 6][mar: 6][apr: 6][may: 6][jun: 6]
//! [jul: 6][aug: 6][sep: 6][oct: 6][nov: 6][dec: 6]
//! ```
//!
//! Each monetary field is the value of a $25 bond: four integer digits followed
//! by two digits of cents, with no decimal point (`001234` is `12.34`). The
//! literal `NO PAY` or six spaces mean the bond has no redemption value for
//! that issue month and decode to `0.0`.
//!
//! ## Example
//!
//! ```rust
//! use record::decode_record;
//!
//! let line = format!("N2030012000{}", "002500".repeat(12));
//! let rec = decode_record(&line).unwrap();
//! assert_eq!(rec.series, "N");
//! assert_eq!(rec.redemption_year, 2030);
//! assert_eq!(rec.issue_value(1), Some(25.0));
//! ```

use std::num::{ParseFloatError, ParseIntError};
use std::ops::Range;

use thiserror::Error;

/// Minimum length of a record line, in characters.
pub const RECORD_LEN: usize = 83;

/// Number of monthly issue-value fields in a record.
pub const MONTHS: usize = 12;

/// Offset of the January issue-value field.
pub const ISSUE_VALUE_OFFSET: usize = 11;

/// Width of every issue-value field.
pub const ISSUE_VALUE_WIDTH: usize = 6;

/// Marker the treasury uses for an issue month with no redemption value.
pub const NO_PAY: &str = "NO PAY";

/// Six spaces: an issue month that is left blank.
pub const BLANK_AMOUNT: &str = "      ";

/// On-disk series code for the bonds users call "EE".
pub const EE_SERIES_CODE: &str = "N";

/// A named fixed-width field within a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Field {
    pub const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Byte range of this field within a line.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width
    }

    /// Returns the field's slice of `line`, or `None` if the line is too short
    /// or the range does not fall on character boundaries.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.range())
    }
}

pub const SERIES: Field = Field::new("series", 0, 1);
pub const REDEMPTION_YEAR: Field = Field::new("redemption_year", 1, 4);
pub const REDEMPTION_MONTH: Field = Field::new("redemption_month", 5, 2);
pub const ISSUE_YEAR: Field = Field::new("issue_year", 7, 4);

const MONTH_NAMES: [&str; MONTHS] = [
    "issue_value_jan",
    "issue_value_feb",
    "issue_value_mar",
    "issue_value_apr",
    "issue_value_may",
    "issue_value_jun",
    "issue_value_jul",
    "issue_value_aug",
    "issue_value_sep",
    "issue_value_oct",
    "issue_value_nov",
    "issue_value_dec",
];

/// Layout of the issue-value field for `month` (1 = January .. 12 = December).
///
/// Returns `None` for any month outside `1..=12`.
pub fn issue_value_field(month: i32) -> Option<Field> {
    month_index(month).map(amount_field)
}

fn amount_field(idx: usize) -> Field {
    Field::new(
        MONTH_NAMES[idx],
        ISSUE_VALUE_OFFSET + idx * ISSUE_VALUE_WIDTH,
        ISSUE_VALUE_WIDTH,
    )
}

/// Zero-based index for a calendar month, `None` outside `1..=12`.
fn month_index(month: i32) -> Option<usize> {
    if (1..=MONTHS as i32).contains(&month) {
        Some((month - 1) as usize)
    } else {
        None
    }
}

/// Errors produced while decoding a record line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line cannot be sliced at the fixed offsets.
    #[error("record too short: {len} bytes, need at least 83")]
    TooShort { len: usize },

    /// A year, month, or other integer field is not a base-10 integer.
    #[error("invalid integer in field {field}: {source}")]
    InvalidInteger {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },

    /// A monetary field is neither a marker nor a decimal amount.
    #[error("invalid amount in field {field}: {source}")]
    InvalidAmount {
        field: &'static str,
        #[source]
        source: ParseFloatError,
    },
}

/// One decoded line of the redemption value file.
#[derive(Debug, Clone, PartialEq)]
pub struct BondValueRecord {
    /// Single-character series code (`I`, `E`, `N`, `S`, ...).
    pub series: String,
    pub redemption_year: i32,
    pub redemption_month: i32,
    pub issue_year: i32,
    /// Value of a $25 bond for each issue month, January first.
    pub issue_values: [f64; MONTHS],
}

impl BondValueRecord {
    /// Value of a $25 bond issued in `month`, or `None` for a month outside `1..=12`.
    pub fn issue_value(&self, month: i32) -> Option<f64> {
        month_index(month).map(|i| self.issue_values[i])
    }

    /// True if the record carries the given series and dates.
    pub fn matches(
        &self,
        series: &str,
        redemption_year: i32,
        redemption_month: i32,
        issue_year: i32,
    ) -> bool {
        self.series == series
            && self.redemption_year == redemption_year
            && self.redemption_month == redemption_month
            && self.issue_year == issue_year
    }

    /// Renders the record back into its 83-character line (no terminator).
    ///
    /// Months that decoded from `NO PAY` or blanks come back as `000000`.
    pub fn encode(&self) -> String {
        let mut line = String::with_capacity(RECORD_LEN);
        line.push_str(&self.series);
        line.push_str(&format!(
            "{:04}{:02}{:04}",
            self.redemption_year, self.redemption_month, self.issue_year
        ));
        for v in &self.issue_values {
            line.push_str(&encode_amount(*v));
        }
        line
    }
}

/// Decodes a single record line.
///
/// Bytes beyond column 83 (including any line terminator) are ignored. The
/// first field that fails to parse aborts the decode.
pub fn decode_record(line: &str) -> Result<BondValueRecord, DecodeError> {
    let too_short = || DecodeError::TooShort { len: line.len() };
    if line.len() < RECORD_LEN {
        return Err(too_short());
    }

    let series = SERIES.slice(line).ok_or_else(too_short)?.to_string();
    let redemption_year = decode_int(line, REDEMPTION_YEAR)?;
    let redemption_month = decode_int(line, REDEMPTION_MONTH)?;
    let issue_year = decode_int(line, ISSUE_YEAR)?;

    let mut issue_values = [0.0; MONTHS];
    for (i, slot) in issue_values.iter_mut().enumerate() {
        let field = amount_field(i);
        let raw = field.slice(line).ok_or_else(too_short)?;
        *slot = decode_amount(raw).map_err(|source| DecodeError::InvalidAmount {
            field: field.name,
            source,
        })?;
    }

    Ok(BondValueRecord {
        series,
        redemption_year,
        redemption_month,
        issue_year,
        issue_values,
    })
}

fn decode_int(line: &str, field: Field) -> Result<i32, DecodeError> {
    let raw = field.slice(line).ok_or(DecodeError::TooShort { len: line.len() })?;
    raw.parse()
        .map_err(|source| DecodeError::InvalidInteger {
            field: field.name,
            source,
        })
}

/// Decodes a 6-character monetary field.
///
/// `NO PAY` and six spaces are `0.0`. Anything else is split after the fourth
/// character and parsed as `IIII.FF`.
pub fn decode_amount(raw: &str) -> Result<f64, ParseFloatError> {
    if raw == NO_PAY || raw == BLANK_AMOUNT {
        return Ok(0.0);
    }
    // A slice that is not 6 ASCII characters cannot be split at 4; hand the
    // whole thing to the float parser so the error comes from there.
    let Some((int_part, frac_part)) = raw.split_at_checked(4) else {
        return raw.parse::<f64>();
    };
    format!("{int_part}.{frac_part}").parse()
}

/// Renders a value as a 6-character monetary field (`12.34` -> `"001234"`).
///
/// Values are rounded to the nearest cent. Negative or oversized values do
/// not fit the layout and produce a wider string.
pub fn encode_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    format!("{:0width$}", cents, width = ISSUE_VALUE_WIDTH)
}

/// Maps a user-facing series name to the code used in the data file.
///
/// `"EE"` becomes `"N"`; every other code passes through unchanged.
pub fn data_file_series(series: &str) -> &str {
    if series == "EE" {
        EE_SERIES_CODE
    } else {
        series
    }
}
