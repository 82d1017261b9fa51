// tests/import_e2e.rs
//
// CSV file → JSON file, through the public importer entry point.
use std::fs;
use std::path::PathBuf;

use pleasure_map::config::options::ImportOptions;
use pleasure_map::error::ImportError;
use pleasure_map::import;
use pleasure_map::model::{BusinessRecord, Category};
use pleasure_map::store;

const HEADER: &str = "Name,Address,Website,Notes,Latitude,Longitude,Description,Phone";

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pm_import_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn opts_for(dir: &PathBuf, csv: &str) -> ImportOptions {
    let input = dir.join("source.csv");
    fs::write(&input, csv).unwrap();
    ImportOptions { input, output: dir.join("data").join("businesses.json"), ..ImportOptions::default() }
}

#[test]
fn tiki_bar_end_to_end() {
    let dir = tmp_dir("tiki");
    let csv = format!(
        "{HEADER}\nTiki Bar,123 Main St,https://www.facebook.com/,,34.0581,-77.8868,Great cocktails and tiki vibes,9105551234\n"
    );
    let opts = opts_for(&dir, &csv);

    let summary = import::run(&opts, None).unwrap();
    assert_eq!(summary.accepted, 1);

    let text = fs::read_to_string(&opts.output).unwrap();
    assert!(!text.contains("\"website\""));
    assert!(text.contains("\n  {\n    \"id\": \"1\","));

    let records = store::load_records(&opts.output).unwrap();
    let r = &records[0];
    assert_eq!(r.name, "Tiki Bar");
    assert_eq!(r.category, Category::Bar);
    assert_eq!(r.website, None);
    assert_eq!((r.coordinates.lng, r.coordinates.lat), (-77.8868, 34.0581));
    assert_eq!(r.tags.first().map(String::as_str), Some("bar"));
}

#[test]
fn ids_follow_source_rows_across_drops() {
    let dir = tmp_dir("ids");
    let csv = format!(
        "{HEADER}\n\
         Alpha Cafe,1 A St,,,34.1,-77.9,,\n\
         Broken,2 B St,,,not-a-number,-77.9,,\n\
         ,3 C St,,,34.1,-77.9,,\n\
         Short,row\n\
         Delta Grill,5 D St,https://delta.example,,34.2,-77.8,Fresh seafood,\n"
    );
    let opts = opts_for(&dir, &csv);

    let summary = import::run(&opts, None).unwrap();
    assert_eq!(summary.rows_seen, 5);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.dropped_total(), 3);

    let records = store::load_records(&opts.output).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
    assert_eq!(records[1].website.as_deref(), Some("https://delta.example"));
    assert_eq!(records[1].address, "5 D St, Carolina Beach, NC 28428");
}

#[test]
fn rerun_is_idempotent() {
    let dir = tmp_dir("idem");
    let csv = format!(
        "{HEADER}\n\
         \"Fudge, Etc\",\"9 Boardwalk, Unit 2\",,,34.05812345,-77.88681234,Homemade fudge on the boardwalk,\n\
         Kure Pier,1 Pier Rd,,,33.99,-77.90,Family attraction near Kure Beach,\n"
    );
    let opts = opts_for(&dir, &csv);

    import::run(&opts, None).unwrap();
    let first = fs::read(&opts.output).unwrap();
    import::run(&opts, None).unwrap();
    let second = fs::read(&opts.output).unwrap();
    assert_eq!(first, second);

    let records: Vec<BusinessRecord> = store::load_records(&opts.output).unwrap();
    assert_eq!(records[0].name, "Fudge, Etc");
    assert_eq!(records[0].category, Category::Dessert);
    assert_eq!(records[0].coordinates.lat, 34.058123);
    assert_eq!(records[0].hours, "Daily: 11am-10pm");
    assert_eq!(records[1].category, Category::Attraction);
    assert!(records[1].tags.contains(&"kure-beach".to_string()));
}

#[test]
fn unreadable_source_writes_nothing() {
    let dir = tmp_dir("missing");
    let opts = ImportOptions {
        input: dir.join("does_not_exist.csv"),
        output: dir.join("businesses.json"),
        ..ImportOptions::default()
    };

    let err = import::run(&opts, None).unwrap_err();
    assert!(matches!(err, ImportError::ReadSource { .. }));
    assert!(!opts.output.exists());
}
