// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::config::options::ExportOptions;
use crate::error::StoreError;
use crate::model::BusinessRecord;
use crate::store;

/// Write the dated admin export (`businesses-YYYY-MM-DD.json`) into the
/// export directory. Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    records: &[BusinessRecord],
    date: NaiveDate,
) -> Result<PathBuf, StoreError> {
    ensure_directory(export.dir())?;
    let path = export.out_path_for(date);
    store::save_records(&path, records)?;
    Ok(path)
}

/// Resolve a user-typed output path. A trailing separator or an existing
/// directory means "put `default_filename` in there".
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, StoreError> {
    if user_o.trim().is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o.trim()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(StoreError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| StoreError::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    match path.parent() {
        Some(parent) => ensure_directory(parent),
        None => Ok(()),
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
