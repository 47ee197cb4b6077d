//! # bondvalue - Savings Bond Value Lookup
//!
//! Loads a treasury savings-bond redemption value file and prints the current
//! value of one bond to stdout. Logs go to stderr.
//!
//! ## Usage
//!
//! ```text
//! bondvalue -d sb202406.asc -s EE -y 2024 -m 6 -Y 2001 -M 3 -v 100
//! ```
//!
//! ## Flags
//!
//! ```text
//! -d, --data-file         Treasury data file (default: $BONDVALUE_DATA_FILE or ./data.txt)
//! -s, --series            Bond series: I, E, EE, S ("EE" is stored as "N")
//! -y, --redemption-year   Redemption year (YYYY)
//! -m, --redemption-month  Redemption month (MM)
//! -Y, --issue-year        Issue year (YYYY)
//! -M, --issue-month       Issue month (MM)
//! -v, --value             Face value
//!     --strict            Error instead of printing 0 when the lookup fails
//! ```
//!
//! Without `--strict`, missing parameters are only warned about, and a query
//! with no matching record prints `0`.
//!
//! ## Configuration
//!
//! ```text
//! BONDVALUE_DATA_FILE  data file path         (default: "./data.txt")
//! BONDVALUE_LOG        tracing filter         (default: "warn")
//! ```

mod args;

use anyhow::{anyhow, bail, Context, Result};
use args::Args;
use clap::Parser;
use config::{Config, DEFAULT_LOG_FILTER};
use table::{BondQuery, BondTable};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(filter: &str) {
    let filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Computes the bond value; `strict` turns a failed lookup into an error.
fn evaluate(table: &BondTable, q: &BondQuery, strict: bool) -> Result<f64> {
    if strict {
        return table.lookup(q)?.ok_or_else(|| {
            anyhow!(
                "no value for series {} redeemed {:04}-{:02} issued {:04}",
                q.series,
                q.redemption_year,
                q.redemption_month,
                q.issue_year
            )
        });
    }

    Ok(table.value(
        &q.series,
        q.redemption_year,
        q.redemption_month,
        q.issue_year,
        q.issue_month,
        q.face_value,
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::from_env().with_data_file(args.data_file.clone());
    init_logging(&cfg.log_filter);

    let mut table = BondTable::new();
    table
        .load_from_file(&cfg.data_file)
        .with_context(|| format!("failed to read data file {}", cfg.data_file.display()))?;

    let query = args.to_query();
    let missing = args.missing();
    if !missing.is_empty() {
        warn!(?missing, "missing parameters");
        if args.strict {
            bail!("missing parameters: {}", missing.join(", "));
        }
    }

    debug!(?query, records = table.len(), "looking up bond value");
    let value = evaluate(&table, &query, args.strict)?;
    println!("{}", value);

    Ok(())
}
