// src/admin.rs
//
// Developer-only editing surface. Holds a session-local copy of the records;
// nothing is persisted until `export` writes a dated file. A rejected save
// leaves the session and the caller's form untouched.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::classify::{categorize, derive_tags};
use crate::config::consts::PLACEHOLDER_WEBSITE;
use crate::config::options::ExportOptions;
use crate::core::sanitize::{non_empty, normalize_website};
use crate::data::name_cmp;
use crate::error::AdminError;
use crate::file;
use crate::model::{BusinessRecord, Coordinates};

/// The editable fields of one shop, as typed by the operator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopForm {
    pub name: String,
    pub description: String,
    pub address: String,
    pub hours: String,
    pub website: String,
    pub phone: String,
}

impl ShopForm {
    pub fn from_record(r: &BusinessRecord) -> Self {
        Self {
            name: r.name.clone(),
            description: r.description.clone(),
            address: r.address.clone(),
            hours: r.hours.clone(),
            website: r.website.clone().unwrap_or_default(),
            phone: r.phone.clone().unwrap_or_default(),
        }
    }

    fn apply_to(&self, r: &mut BusinessRecord) {
        r.name = self.name.trim().to_string();
        r.description = self.description.trim().to_string();
        r.address = self.address.trim().to_string();
        r.hours = self.hours.trim().to_string();
        r.website = normalize_website(&self.website, PLACEHOLDER_WEBSITE);
        r.phone = non_empty(&self.phone);
    }
}

/// What a successful save did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(String),
    Updated(String),
}

#[derive(Clone, Debug, Default)]
pub struct AdminSession {
    shops: Vec<BusinessRecord>,
    selected: Option<String>,
    /// Location the next save will use: a placed pin or the selected shop's.
    pin: Option<Coordinates>,
}

impl AdminSession {
    pub fn new(shops: Vec<BusinessRecord>) -> Self {
        Self { shops, selected: None, pin: None }
    }

    pub fn shops(&self) -> &[BusinessRecord] { &self.shops }
    pub fn selected_id(&self) -> Option<&str> { self.selected.as_deref() }
    pub fn pin(&self) -> Option<Coordinates> { self.pin }

    pub fn selected(&self) -> Option<&BusinessRecord> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    /// Shops ordered by name, as the side list shows them.
    pub fn sorted(&self) -> Vec<&BusinessRecord> {
        let mut v: Vec<&BusinessRecord> = self.shops.iter().collect();
        v.sort_by(|a, b| name_cmp(&a.name, &b.name));
        v
    }

    fn find(&self, id: &str) -> Option<&BusinessRecord> {
        self.shops.iter().find(|s| s.id == id)
    }

    /// Select a shop; its location becomes the pin.
    pub fn select(&mut self, id: &str) -> Option<&BusinessRecord> {
        let coords = self.find(id)?.coordinates;
        self.selected = Some(s!(id));
        self.pin = Some(coords);
        self.selected()
    }

    /// Place a pin for a new shop. Drops any selection.
    pub fn place_pin(&mut self, at: Coordinates) {
        self.pin = Some(at);
        self.selected = None;
    }

    /// Move an existing shop's marker. Unknown ids are ignored.
    pub fn move_marker(&mut self, id: &str, to: Coordinates) -> bool {
        let Some(shop) = self.shops.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        shop.coordinates = to;
        if self.selected.as_deref() == Some(id) {
            self.pin = Some(to);
        }
        true
    }

    /// Create (nothing selected) or update (a shop selected) from the form.
    pub fn save(&mut self, form: &ShopForm) -> Result<SaveOutcome, AdminError> {
        if form.name.trim().is_empty() { return Err(AdminError::NameRequired); }
        let at = self.pin.ok_or(AdminError::LocationRequired)?;

        if let Some(id) = self.selected.clone() {
            if let Some(shop) = self.shops.iter_mut().find(|s| s.id == id) {
                form.apply_to(shop);
                shop.coordinates = at;
                logf!("Admin: updated shop {} ({})", id, shop.name);
                return Ok(SaveOutcome::Updated(id));
            }
        }

        let id = self.next_id();
        let mut shop = BusinessRecord {
            id: id.clone(),
            name: s!(),
            category: categorize(&form.name, &form.description),
            description: s!(),
            coordinates: at,
            address: s!(),
            hours: s!(),
            website: None,
            phone: None,
            is_chamber_member: false,
            logo: None,
            tags: Vec::new(),
        };
        form.apply_to(&mut shop);
        shop.tags = derive_tags(&shop.name, &shop.description, shop.category);
        logf!("Admin: created shop {} ({})", id, shop.name);

        self.shops.push(shop);
        self.selected = Some(id.clone());
        Ok(SaveOutcome::Created(id))
    }

    /// Remove the selected shop and forget the pin.
    pub fn delete_selected(&mut self) -> Result<BusinessRecord, AdminError> {
        let id = self.selected.take().ok_or(AdminError::NothingSelected)?;
        let pos = self
            .shops
            .iter()
            .position(|s| s.id == id)
            .ok_or(AdminError::NothingSelected)?;
        self.pin = None;
        let removed = self.shops.remove(pos);
        logf!("Admin: deleted shop {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.pin = None;
    }

    /// One past the largest numeric id; non-numeric ids are ignored.
    /// If that would overflow, the smallest unused positive id instead.
    pub fn next_id(&self) -> String {
        let taken: BTreeSet<u64> = self
            .shops
            .iter()
            .filter_map(|s| s.id.parse::<u64>().ok())
            .collect();
        let max = taken.last().copied().unwrap_or(0);
        let next = max
            .checked_add(1)
            .unwrap_or_else(|| (1..).find(|n| !taken.contains(n)).unwrap_or(1));
        next.to_string()
    }

    /// Write the session to `<dir>/businesses-<today>.json`, today in UTC.
    pub fn export(&self, export: &ExportOptions) -> Result<PathBuf, AdminError> {
        self.export_dated(export, Utc::now().date_naive())
    }

    pub fn export_dated(&self, export: &ExportOptions, date: NaiveDate) -> Result<PathBuf, AdminError> {
        if self.shops.is_empty() { return Err(AdminError::NothingToExport); }
        let path = file::write_export(export, &self.shops, date)?;
        logf!("Admin: exported {} shop(s) to {}", self.shops.len(), path.display());
        Ok(path)
    }
}
