// src/config/options.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub import: ImportOptions,
    pub export: ExportOptions,
    pub display: DisplayConfig,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            import: ImportOptions::default(),
            export: ExportOptions::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Knobs for the CSV → JSON conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sep: char,
    /// Appended verbatim to every source address.
    pub locality_suffix: String,
    /// A website equal to this is stored as absent.
    pub placeholder_website: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DATA_DIR).join(DEFAULT_SOURCE_FILE),
            output: PathBuf::from(DATA_DIR).join(DEFAULT_DATA_FILE),
            sep: FIELD_SEP,
            locality_suffix: s!(LOCALITY_SUFFIX),
            placeholder_website: s!(PLACEHOLDER_WEBSITE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    dir: PathBuf,
    stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            stem: s!(EXPORT_STEM),
        }
    }
}

impl ExportOptions {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), ..Self::default() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn set_dir(&mut self, text: &str) {
        self.dir = PathBuf::from(text.trim());
    }

    /// "businesses-YYYY-MM-DD.json"
    pub fn file_name_for(&self, date: NaiveDate) -> String {
        format!("{}-{}.{}", self.stem, date.format("%Y-%m-%d"), EXPORT_EXT)
    }

    pub fn out_path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(self.file_name_for(date))
    }
}

/// Rendering switches handed to the GUI. Built once by the binary;
/// nothing below the binary reads process environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub map_token: Option<String>,
}

impl DisplayConfig {
    pub fn map_enabled(&self) -> bool {
        self.map_token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_file_name_carries_date() {
        let opts = ExportOptions::with_dir("exports");
        let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        assert_eq!(opts.file_name_for(date), "businesses-2024-05-07.json");
        assert_eq!(opts.out_path_for(date), PathBuf::from("exports").join("businesses-2024-05-07.json"));
    }

    #[test]
    fn blank_map_token_disables_map() {
        assert!(!DisplayConfig::default().map_enabled());
        assert!(!DisplayConfig { map_token: Some(s!("  ")) }.map_enabled());
        assert!(DisplayConfig { map_token: Some(s!("pk.abc")) }.map_enabled());
    }
}
