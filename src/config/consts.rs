// src/config/consts.rs

// Canonical data
pub const DATA_DIR: &str = "data";
pub const DEFAULT_DATA_FILE: &str = "businesses.json";
pub const DEFAULT_SOURCE_FILE: &str = "resto-tour-db.csv";
pub const DEFAULT_CATEGORIES_FILE: &str = "categories.json";

// Import
pub const FIELD_SEP: char = ',';
pub const LOCALITY_SUFFIX: &str = ", Carolina Beach, NC 28428";
pub const PLACEHOLDER_WEBSITE: &str = "https://www.facebook.com/";
pub const MAX_TAGS: usize = 6;
pub const COORD_SCALE: f64 = 1_000_000.0; // 6 decimal places

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_STEM: &str = "businesses";
pub const EXPORT_EXT: &str = "json";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";

// Env var the GUI binary reads once for the map provider key
pub const MAP_TOKEN_ENV: &str = "PLEASURE_MAP_TOKEN";
