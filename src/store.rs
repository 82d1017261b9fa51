// src/store.rs
//
// The canonical store is one pretty-printed JSON array of records. Writes
// replace the whole file; there is no in-place update.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::config::consts::DEFAULT_CATEGORIES_FILE;
use crate::error::StoreError;
use crate::file::ensure_parent;
use crate::model::{default_categories, BusinessRecord, CategoryInfo};

pub fn load_records(path: &Path) -> Result<Vec<BusinessRecord>, StoreError> {
    load_json(path)
}

/// Overwrite `path` with `records` (2-space indented JSON).
pub fn save_records(path: &Path, records: &[BusinessRecord]) -> Result<(), StoreError> {
    let text = to_json(records)?;
    ensure_parent(path)?;
    fs::write(path, text).map_err(|source| StoreError::Write { path: path.to_path_buf(), source })?;
    logd!("Store: wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

pub fn to_json(records: &[BusinessRecord]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Category metadata from `path`, or the built-in table when no path is given.
pub fn load_categories(path: Option<&Path>) -> Result<Vec<CategoryInfo>, StoreError> {
    match path {
        Some(p) => load_json(p),
        None => Ok(default_categories()),
    }
}

/// `categories.json` next to the data file when present, else the built-in table.
pub fn categories_beside(data_path: &Path) -> Result<Vec<CategoryInfo>, StoreError> {
    let path = data_path.with_file_name(DEFAULT_CATEGORIES_FILE);
    if path.is_file() {
        logd!("Store: categories from {}", path.display());
        load_categories(Some(&path))
    } else {
        load_categories(None)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path)
        .map_err(|source| StoreError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text)
        .map_err(|source| StoreError::Parse { path: path.to_path_buf(), source })
}
