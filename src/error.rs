// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Whole-run failures of the importer. Bad rows are never errors; they are
/// dropped and counted in the summary.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read source {path}: {source}")]
    ReadSource { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Reading or writing one of the JSON data files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("cannot serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Rejections from the admin edit surface. The in-progress edit is kept.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Shop name is required")]
    NameRequired,
    #[error("Please select a location on the map")]
    LocationRequired,
    #[error("No shop selected")]
    NothingSelected,
    #[error("No shops to export!")]
    NothingToExport,
    #[error(transparent)]
    Store(#[from] StoreError),
}
