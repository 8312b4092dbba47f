use hashbrown::HashMap;
use tracing::debug;

use crate::table::Table;

/// Powered and unpowered site totals for one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteTypes {
    pub powered: u64,
    pub unpowered: u64,
}

/// Number of campsites per region, ascending by region name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionCounts(Vec<(String, u64)>);

/// Summed site types per region, ascending by region name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteTypeTotals(Vec<(String, SiteTypes)>);

pub fn count_by_region(table: &Table) -> RegionCounts {
    let mut result: HashMap<&str, u64> = HashMap::new();
    for record in table {
        *result.entry(record.region.as_str()).or_default() += 1;
    }
    RegionCounts(sorted(result))
}

pub fn sum_site_types(table: &Table) -> SiteTypeTotals {
    let mut result: HashMap<&str, SiteTypes> = HashMap::new();
    for record in table {
        let entry = result.entry(record.region.as_str()).or_default();
        entry.powered = entry.powered.saturating_add(record.powered);
        entry.unpowered = entry.unpowered.saturating_add(record.unpowered);
    }
    SiteTypeTotals(sorted(result))
}

fn sorted<V>(groups: HashMap<&str, V>) -> Vec<(String, V)> {
    let mut entries = groups
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect::<Vec<_>>();
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    entries
}

impl RegionCounts {
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(region, count)| (region.as_str(), *count))
    }

    pub fn get(&self, region: &str) -> Option<u64> {
        self.iter().find(|(r, _)| *r == region).map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, c)| c).sum()
    }
}

impl SiteTypeTotals {
    pub fn iter(&self) -> impl Iterator<Item = (&str, SiteTypes)> {
        self.0.iter().map(|(region, sites)| (region.as_str(), *sites))
    }

    pub fn get(&self, region: &str) -> Option<SiteTypes> {
        self.iter().find(|(r, _)| *r == region).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Both aggregates, taken from the same table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub counts: RegionCounts,
    pub site_types: SiteTypeTotals,
}

impl Summary {
    pub fn compute(table: &Table) -> Self {
        let (counts, site_types) =
            rayon::join(|| count_by_region(table), || sum_site_types(table));
        debug!(regions = counts.len(), rows = table.len(), "aggregated campsites");
        Self { counts, site_types }
    }
}
