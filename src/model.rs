// src/model.rs
//
// Canonical record shapes. Field names serialize exactly as the JSON data
// file expects them (camelCase, absent optionals omitted).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coffee,
    Bar,
    Dessert,
    Attraction,
    Restaurant,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Coffee,
        Category::Bar,
        Category::Dessert,
        Category::Attraction,
        Category::Restaurant,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Bar => "bar",
            Category::Dessert => "dessert",
            Category::Attraction => "attraction",
            Category::Restaurant => "restaurant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// `[longitude, latitude]`, longitude first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lng: f64, lat: f64) -> Self { Self { lng, lat } }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lng, lat]: [f64; 2]) -> Self { Self { lng, lat } }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self { [c.lng, c.lat] }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lng, self.lat)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_chamber_member: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Display metadata for one category. Owned outside the core; only used to
/// resolve a human label and to populate category pickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CategoryInfo {
    fn builtin(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self { id: s!(id), name: s!(name), icon: s!(icon), color: s!(color) }
    }
}

/// Fallback table used when no categories file is supplied.
pub fn default_categories() -> Vec<CategoryInfo> {
    vec![
        CategoryInfo::builtin("coffee", "Coffee & Cafes", "☕", "#92400e"),
        CategoryInfo::builtin("bar", "Bars & Breweries", "🍹", "#7c3aed"),
        CategoryInfo::builtin("dessert", "Desserts & Sweets", "🍦", "#db2777"),
        CategoryInfo::builtin("attraction", "Attractions", "🎡", "#0284c7"),
        CategoryInfo::builtin("restaurant", "Restaurants", "🍽", "#059669"),
    ]
}

/// Human label for `category`, if the metadata knows it.
pub fn category_label(categories: &[CategoryInfo], category: Category) -> Option<&str> {
    categories
        .iter()
        .find(|c| c.id == category.id())
        .map(|c| c.name.as_str())
}
