//! Campsite report: counts campsites and sums powered/unpowered sites per region
//! from a CSV export of the campsite dataset.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

pub mod aggregate;
pub mod error;
pub mod report;
pub mod table;

pub use aggregate::{
    count_by_region, sum_site_types, RegionCounts, SiteTypeTotals, SiteTypes, Summary,
};
pub use error::LoadError;
pub use table::{Record, Table};

/// Input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data.csv";

/// Loads `path`, aggregates it and writes the report to `out`.
///
/// Nothing is written unless loading succeeds.
pub fn run<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let table = Table::load(path)?;
    let summary = Summary::compute(&table);
    report::render(&summary, out).context("failed to write report")?;
    out.flush().context("failed to write report")
}
