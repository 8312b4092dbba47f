use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LoadError, Result};

pub const REGION: &str = "Region";
pub const POWERED: &str = "Number of powered sites";
pub const UNPOWERED: &str = "Number of unpowered sites";

/// Columns that must be present in the header row, in reporting order.
const REQUIRED: [&str; 3] = [REGION, POWERED, UNPOWERED];

/// One campsite row, reduced to the fields the report uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub region: String,
    pub powered: u64,
    pub unpowered: u64,
}

impl Record {
    pub fn new(region: impl Into<String>, powered: u64, unpowered: u64) -> Self {
        Self {
            region: region.into(),
            powered,
            unpowered,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord<'a> {
    #[serde(rename = "Region")]
    region: &'a str,
    #[serde(rename = "Number of powered sites")]
    powered: &'a str,
    #[serde(rename = "Number of unpowered sites")]
    unpowered: &'a str,
}

/// The loaded dataset. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Memory-maps `path` and loads it as CSV.
    ///
    /// Fails with [`LoadError::FileNotFound`] when the file cannot be opened or mapped,
    /// and otherwise behaves like [`Table::from_reader`].
    pub fn load(path: &Path) -> Result<Self> {
        let not_found = |source| LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(not_found)?;
        // SAFETY: the map is read-only and dropped before this function returns.
        let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(not_found)?;
        let table = Self::from_reader(&mmap[..])?;
        debug!(path = %path.display(), rows = table.len(), "loaded campsites table");
        Ok(table)
    }

    /// Parses CSV with a header row. Columns other than the three required ones are ignored.
    ///
    /// A blank count cell counts as zero; any other non-integer token is a
    /// [`LoadError::MalformedValue`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = normalize_headers(rdr.headers()?);
        if let Some(column) = REQUIRED
            .into_iter()
            .find(|column| !headers.iter().any(|h| h == *column))
        {
            return Err(LoadError::MissingColumn { column });
        }

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map_or(0, |p| p.line());
            let raw: RawRecord = row.deserialize(Some(&headers))?;
            records.push(Record {
                region: raw.region.to_owned(),
                powered: parse_count(POWERED, raw.powered, line)?,
                unpowered: parse_count(UNPOWERED, raw.unpowered, line)?,
            });
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Strips a leading byte-order mark and surrounding whitespace from header names.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
            h.trim()
        })
        .collect()
}

fn parse_count(column: &'static str, value: &str, line: u64) -> Result<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| LoadError::MalformedValue {
            column,
            line,
            value: value.to_owned(),
        })
}
