// tests/admin_session.rs
//
// Session-local editing and export, no UI.
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use pleasure_map::admin::{AdminSession, SaveOutcome, ShopForm};
use pleasure_map::config::options::ExportOptions;
use pleasure_map::error::AdminError;
use pleasure_map::model::{BusinessRecord, Category, Coordinates};
use pleasure_map::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pm_admin_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn shop(id: &str, name: &str) -> BusinessRecord {
    BusinessRecord {
        id: id.into(),
        name: name.into(),
        category: Category::Bar,
        description: "Cold beer".into(),
        coordinates: Coordinates::new(-77.89, 34.05),
        address: "2 Canal Dr".into(),
        hours: "Daily: 4pm-2am".into(),
        website: Some("https://bar.example".into()),
        phone: None,
        is_chamber_member: true,
        logo: None,
        tags: vec!["bar".into()],
    }
}

fn form(name: &str) -> ShopForm {
    ShopForm { name: name.into(), ..ShopForm::default() }
}

#[test]
fn save_requires_name_then_location() {
    let mut s = AdminSession::new(vec![shop("1", "Lazy Pirate")]);

    assert!(matches!(s.save(&form("   ")), Err(AdminError::NameRequired)));
    assert!(matches!(s.save(&form("New Place")), Err(AdminError::LocationRequired)));
    assert_eq!(s.shops().len(), 1);
}

#[test]
fn create_assigns_next_numeric_id_and_selects() {
    let mut s = AdminSession::new(vec![shop("3", "A"), shop("12", "B")]);
    s.place_pin(Coordinates::new(-77.88, 34.04));

    let f = ShopForm {
        name: "Island Coffee".into(),
        description: "Local roaster".into(),
        website: "https://www.facebook.com/".into(),
        ..ShopForm::default()
    };
    let out = s.save(&f).unwrap();
    assert_eq!(out, SaveOutcome::Created("13".into()));
    assert_eq!(s.selected_id(), Some("13"));

    let created = s.selected().unwrap();
    assert_eq!(created.category, Category::Coffee);
    assert_eq!(created.tags, vec!["coffee", "local"]);
    assert_eq!(created.website, None);
    assert_eq!(created.coordinates, Coordinates::new(-77.88, 34.04));
    assert!(!created.is_chamber_member);
}

#[test]
fn create_after_largest_possible_id_still_gets_unique_id() {
    let mut s = AdminSession::new(vec![shop(&u64::MAX.to_string(), "Huge"), shop("1", "One")]);
    s.place_pin(Coordinates::new(-77.88, 34.04));

    let out = s.save(&form("Fresh Spot")).unwrap();
    assert_eq!(out, SaveOutcome::Created("2".into()));
    assert_eq!(s.shops().len(), 3);
}

#[test]
fn update_keeps_classification_and_uses_pin() {
    let mut s = AdminSession::new(vec![shop("1", "Lazy Pirate")]);
    s.select("1").unwrap();
    let mut f = ShopForm::from_record(s.selected().unwrap());
    f.name = "Lazy Pirate Tavern".into();
    f.phone = "910-555-0000".into();

    assert_eq!(s.save(&f).unwrap(), SaveOutcome::Updated("1".into()));
    let r = &s.shops()[0];
    assert_eq!(r.name, "Lazy Pirate Tavern");
    assert_eq!(r.phone.as_deref(), Some("910-555-0000"));
    assert_eq!(r.category, Category::Bar);
    assert_eq!(r.tags, vec!["bar"]);
    assert!(r.is_chamber_member);
}

#[test]
fn place_pin_drops_selection() {
    let mut s = AdminSession::new(vec![shop("1", "A")]);
    s.select("1");
    s.place_pin(Coordinates::new(-77.0, 34.0));
    assert_eq!(s.selected_id(), None);
    assert_eq!(s.pin(), Some(Coordinates::new(-77.0, 34.0)));
}

#[test]
fn move_marker_only_touches_one_shop() {
    let mut s = AdminSession::new(vec![shop("1", "A"), shop("2", "B")]);
    s.select("2");
    let to = Coordinates::new(-77.5, 34.5);
    assert!(s.move_marker("2", to));
    assert!(!s.move_marker("99", to));

    assert_eq!(s.shops()[0].coordinates, Coordinates::new(-77.89, 34.05));
    assert_eq!(s.shops()[1].coordinates, to);
    assert_eq!(s.pin(), Some(to));
}

#[test]
fn delete_and_clear() {
    let mut s = AdminSession::new(vec![shop("1", "A"), shop("2", "B")]);
    assert!(matches!(s.delete_selected(), Err(AdminError::NothingSelected)));

    s.select("1");
    let removed = s.delete_selected().unwrap();
    assert_eq!(removed.id, "1");
    assert_eq!(s.shops().len(), 1);
    assert_eq!(s.pin(), None);

    s.select("2");
    s.clear();
    assert_eq!(s.selected_id(), None);
    assert_eq!(s.pin(), None);
}

#[test]
fn export_writes_dated_file_with_same_shape() {
    let dir = tmp_dir("export");
    let s = AdminSession::new(vec![shop("1", "A"), shop("2", "B")]);
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let path = s.export_dated(&ExportOptions::with_dir(&dir), date).unwrap();
    assert_eq!(path, dir.join("businesses-2025-06-01.json"));

    let back = store::load_records(&path).unwrap();
    assert_eq!(back, s.shops());
}

#[test]
fn export_names_file_after_utc_date() {
    let dir = tmp_dir("export_utc");
    let s = AdminSession::new(vec![shop("1", "A")]);
    let before = Utc::now().date_naive();
    let path = s.export(&ExportOptions::with_dir(&dir)).unwrap();
    let after = Utc::now().date_naive();

    let opts = ExportOptions::with_dir(&dir);
    assert!(path == opts.out_path_for(before) || path == opts.out_path_for(after));
    assert!(path.is_file());
}

#[test]
fn export_refuses_empty_session() {
    let dir = tmp_dir("empty");
    let s = AdminSession::default();
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    assert!(matches!(
        s.export_dated(&ExportOptions::with_dir(&dir), date),
        Err(AdminError::NothingToExport)
    ));
    assert!(!dir.exists());
}
