// src/import.rs
//
// CSV spreadsheet export → canonical records.
//
// Column layout of the source sheet (by position, header names ignored):
//   0 name, 1 address, 2 website, 3 (unused), 4 latitude, 5 longitude,
//   6 description, 7 phone
//
// A row is dropped, never half-kept, when it is shorter than the header,
// has no name, or has no usable coordinate pair. Row ids are the 1-based
// data-line index, so ids are not contiguous after drops.

use std::collections::BTreeMap;
use std::fs;

use crate::classify::{categorize, derive_tags, hours_for};
use crate::config::options::ImportOptions;
use crate::core::number::{parse_float_prefix, round6, usable_coord};
use crate::core::sanitize::{non_empty, normalize_website};
use crate::csv::Table;
use crate::error::ImportError;
use crate::model::{BusinessRecord, Category, Coordinates};
use crate::progress::Progress;
use crate::store;

const COL_NAME: usize = 0;
const COL_ADDRESS: usize = 1;
const COL_WEBSITE: usize = 2;
const COL_LAT: usize = 4;
const COL_LNG: usize = 5;
const COL_DESCRIPTION: usize = 6;
const COL_PHONE: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DropReason {
    ShortRow,
    MissingName,
    BadCoordinates,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows_seen: usize,
    pub accepted: usize,
    pub dropped: BTreeMap<DropReason, usize>,
    pub by_category: BTreeMap<Category, usize>,
}

impl ImportSummary {
    pub fn dropped_total(&self) -> usize { self.dropped.values().sum() }
}

/// Everything the importer produced from one source text.
#[derive(Clone, Debug, Default)]
pub struct Imported {
    pub records: Vec<BusinessRecord>,
    pub summary: ImportSummary,
}

/// Build one record from an already split row.
pub fn parse_row(
    row_index: usize,
    fields: &[String],
    header_count: usize,
    opts: &ImportOptions,
) -> Result<BusinessRecord, DropReason> {
    if fields.len() < header_count { return Err(DropReason::ShortRow); }

    let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");

    let name = field(COL_NAME);
    if name.is_empty() { return Err(DropReason::MissingName); }

    let lat = round6(parse_float_prefix(field(COL_LAT)));
    let lng = round6(parse_float_prefix(field(COL_LNG)));
    if !usable_coord(lat) || !usable_coord(lng) { return Err(DropReason::BadCoordinates); }

    let description = field(COL_DESCRIPTION);
    let category = categorize(name, description);

    Ok(BusinessRecord {
        id: row_index.to_string(),
        name: s!(name),
        category,
        description: s!(description),
        coordinates: Coordinates::new(lng, lat),
        address: format!("{}{}", field(COL_ADDRESS), opts.locality_suffix),
        hours: s!(hours_for(category)),
        website: normalize_website(field(COL_WEBSITE), &opts.placeholder_website),
        phone: non_empty(field(COL_PHONE)),
        is_chamber_member: true, // the source sheet lists chamber members only
        logo: None,
        tags: derive_tags(name, description, category),
    })
}

/// Convert source text into records. Pure apart from progress callbacks.
pub fn import_text(
    text: &str,
    opts: &ImportOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Imported {
    let table = Table::parse(text, opts.sep);
    let header_count = table.header_count();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(table.lines.len());
    }

    let mut out = Imported::default();
    for (row_index, fields) in table.rows(opts.sep) {
        out.summary.rows_seen += 1;
        let accepted = match parse_row(row_index, &fields, header_count, opts) {
            Ok(record) => {
                *out.summary.by_category.entry(record.category).or_default() += 1;
                out.records.push(record);
                true
            }
            Err(reason) => {
                logd!("Import: row {} dropped ({:?})", row_index, reason);
                *out.summary.dropped.entry(reason).or_default() += 1;
                false
            }
        };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(row_index, accepted);
        }
    }
    out.summary.accepted = out.records.len();

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Found {} businesses", out.summary.accepted));
        p.finish();
    }
    out
}

/// Offline batch step: read `opts.input`, convert, overwrite `opts.output`.
/// An unreadable source aborts before anything is written.
pub fn run(
    opts: &ImportOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ImportSummary, ImportError> {
    logf!("Import: converting {}", opts.input.display());
    let text = fs::read_to_string(&opts.input)
        .map_err(|source| ImportError::ReadSource { path: opts.input.clone(), source })?;

    let imported = import_text(&text, opts, progress);
    store::save_records(&opts.output, &imported.records)?;

    let summary = imported.summary;
    logf!(
        "Import: saved {} business(es) to {} ({} row(s) dropped)",
        summary.accepted,
        opts.output.display(),
        summary.dropped_total()
    );
    for (category, count) in &summary.by_category {
        logf!("Import:   {}: {}", category, count);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> Vec<String> {
        crate::csv::split_line(line, ',')
    }

    #[test]
    fn tiki_bar_row() {
        let opts = ImportOptions::default();
        let row = fields("Tiki Bar,123 Main St,https://www.facebook.com/,,34.0581,-77.8868,Great cocktails and tiki vibes,9105551234");
        let rec = parse_row(1, &row, 8, &opts).unwrap();
        assert_eq!(rec.id, "1");
        assert_eq!(rec.category, Category::Bar);
        assert_eq!(rec.website, None);
        assert_eq!(rec.coordinates, Coordinates::new(-77.8868, 34.0581));
        assert_eq!(rec.address, "123 Main St, Carolina Beach, NC 28428");
        assert_eq!(rec.hours, "Daily: 4pm-2am");
        assert_eq!(rec.phone.as_deref(), Some("9105551234"));
        assert_eq!(rec.tags[0], "bar");
        assert!(rec.is_chamber_member);
    }

    #[test]
    fn drop_reasons() {
        let opts = ImportOptions::default();
        assert_eq!(parse_row(1, &fields("A,b,c"), 8, &opts), Err(DropReason::ShortRow));
        assert_eq!(parse_row(1, &fields(",b,c,,1,2,,"), 8, &opts), Err(DropReason::MissingName));
        assert_eq!(parse_row(1, &fields("A,b,c,,x,2,,"), 8, &opts), Err(DropReason::BadCoordinates));
        assert_eq!(parse_row(1, &fields("A,b,c,,0,2,,"), 8, &opts), Err(DropReason::BadCoordinates));
        assert_eq!(parse_row(1, &fields("A,b,c,,34,,,"), 8, &opts), Err(DropReason::BadCoordinates));
    }

    #[test]
    fn latitude_rounds_to_six_places() {
        let opts = ImportOptions::default();
        let rec = parse_row(1, &fields("A,b,,,34.05812345,-77.1,,"), 8, &opts).unwrap();
        assert_eq!(rec.coordinates.lat, 34.058123);
    }

    #[test]
    fn summary_counts_drops_and_categories() {
        let text = "Name,Address,Url,X,Lat,Lng,Desc,Phone\n\
                    Java Hut,1 A St,,,34.1,-77.9,Coffee,\n\
                    ,2 B St,,,34.1,-77.9,,\n\
                    Pier Grill,3 C St,,,34.1,-77.9,,\n";
        let out = import_text(text, &ImportOptions::default(), None);
        assert_eq!(out.summary.rows_seen, 3);
        assert_eq!(out.summary.accepted, 2);
        assert_eq!(out.summary.dropped.get(&DropReason::MissingName), Some(&1));
        assert_eq!(out.summary.by_category.get(&Category::Coffee), Some(&1));
        assert_eq!(out.summary.by_category.get(&Category::Attraction), Some(&1));
        let ids: Vec<_> = out.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn quoted_comma_in_header_raises_the_bar() {
        let text = "Name,Address,Website,\"Notes, misc\",Lat,Lng,Desc,Phone\n\
                    Tiki Bar,1 A St,,,34.1,-77.9,Cocktails,\n\
                    Pier Grill,2 B St,,,34.1,-77.9,Fish,555,extra\n";
        let out = import_text(text, &ImportOptions::default(), None);
        assert_eq!(out.summary.rows_seen, 2);
        assert_eq!(out.summary.dropped.get(&DropReason::ShortRow), Some(&1));
        let ids: Vec<_> = out.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}
