use std::io::{self, Write};

use crate::aggregate::Summary;

const COUNTS_TITLE: &str = "Campsites by region";
const SITE_TYPES_TITLE: &str = "Site types per region";
const GAP: &str = "    ";
/// Region columns are never narrower than this label.
const MIN_REGION_WIDTH: usize = "Region".len();

/// Writes both sections of the report.
pub fn render<W: Write>(summary: &Summary, out: &mut W) -> io::Result<()> {
    heading(out, COUNTS_TITLE)?;
    let width = region_width(summary.counts.iter().map(|(r, _)| r));
    let count_width = digits(summary.counts.iter().map(|(_, c)| c));
    for (region, count) in summary.counts.iter() {
        writeln!(out, "{region:<width$}{GAP}{count:>count_width$}")?;
    }

    writeln!(out)?;

    heading(out, SITE_TYPES_TITLE)?;
    let width = region_width(summary.site_types.iter().map(|(r, _)| r));
    let powered_width = digits(summary.site_types.iter().map(|(_, s)| s.powered));
    let unpowered_width = digits(summary.site_types.iter().map(|(_, s)| s.unpowered));
    for (region, sites) in summary.site_types.iter() {
        writeln!(
            out,
            "{region:<width$}{GAP}{:>powered_width$}{GAP}{:>unpowered_width$}",
            sites.powered, sites.unpowered
        )?;
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

fn region_width<'a>(regions: impl Iterator<Item = &'a str>) -> usize {
    regions
        .map(|r| r.chars().count())
        .fold(MIN_REGION_WIDTH, usize::max)
}

fn digits(values: impl Iterator<Item = u64>) -> usize {
    values.map(|v| v.to_string().len()).max().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Record, Table};

    fn rendered(table: &Table) -> String {
        let mut buf = Vec::new();
        render(&Summary::compute(table), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_both_sections() {
        let table: Table = [
            Record::new("North", 3, 1),
            Record::new("North", 2, 0),
            Record::new("South", 10, 1),
        ]
        .into_iter()
        .collect();
        let expected = "\
Campsites by region
-------------------
North     2
South     1

Site types per region
---------------------
North      5    1
South     10    1
";
        assert_eq!(rendered(&table), expected);
    }

    #[test]
    fn empty_summary_prints_headers_only() {
        let expected = "\
Campsites by region
-------------------

Site types per region
---------------------
";
        assert_eq!(rendered(&Table::default()), expected);
    }

    #[test]
    fn long_region_names_widen_the_column() {
        let table: Table = [Record::new("Manawatū-Whanganui", 1, 2), Record::new("Otago", 3, 4)]
            .into_iter()
            .collect();
        let out = rendered(&table);
        assert!(out.contains("Manawatū-Whanganui    1\n"));
        assert!(out.contains("Otago                 1\n"));
        assert!(out.contains("Otago                 3    4\n"));
    }
}
