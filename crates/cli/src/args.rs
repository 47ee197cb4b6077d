use clap::Parser;
use std::path::PathBuf;
use table::BondQuery;

/// Value of an unset integer flag.
pub const UNSET: i32 = -1;

/// Looks up the current redemption value of a US savings bond.
#[derive(Debug, Parser)]
#[command(name = "bondvalue", allow_negative_numbers = true)]
pub struct Args {
    /// The path to the treasury data file [env: BONDVALUE_DATA_FILE, default: ./data.txt]
    #[arg(short = 'd', long = "data-file")]
    pub data_file: Option<PathBuf>,

    /// The bond series (I, E, EE, S)
    #[arg(short = 's', long, default_value = "")]
    pub series: String,

    /// The year the bond will be redeemed (YYYY)
    #[arg(short = 'y', long = "redemption-year", alias = "redemtion-year", default_value_t = UNSET)]
    pub redemption_year: i32,

    /// The month the bond will be redeemed (MM)
    #[arg(short = 'm', long = "redemption-month", alias = "redemtion-month", default_value_t = UNSET)]
    pub redemption_month: i32,

    /// The year the bond was issued (YYYY)
    #[arg(short = 'Y', long = "issue-year", default_value_t = UNSET)]
    pub issue_year: i32,

    /// The month the bond was issued (MM)
    #[arg(short = 'M', long = "issue-month", default_value_t = UNSET)]
    pub issue_month: i32,

    /// The face value of the bond
    #[arg(short = 'v', long = "value", default_value_t = UNSET)]
    pub face_value: i32,

    /// Fail on missing parameters, invalid issue month, or no matching record
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    /// Flags that were left at their unset value.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.series.is_empty() {
            missing.push("series");
        }
        let ints = [
            ("redemption-year", self.redemption_year),
            ("redemption-month", self.redemption_month),
            ("issue-year", self.issue_year),
            ("issue-month", self.issue_month),
            ("value", self.face_value),
        ];
        missing.extend(ints.iter().filter(|(_, v)| *v == UNSET).map(|(name, _)| *name));
        missing
    }

    /// Query for the table, with the series translated to its on-disk code.
    pub fn to_query(&self) -> BondQuery {
        BondQuery {
            series: record::data_file_series(&self.series).to_string(),
            redemption_year: self.redemption_year,
            redemption_month: self.redemption_month,
            issue_year: self.issue_year,
            issue_month: self.issue_month,
            face_value: self.face_value,
        }
    }
}
