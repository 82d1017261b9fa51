// src/classify.rs
//! Keyword classification for imported businesses.
//!
//! Three static tables drive everything here:
//! - [`CATEGORY_RULES`] – ordered `(category, keywords)` rows, evaluated top
//!   to bottom; the first row that matches wins and `Restaurant` is the
//!   fallback.
//! - [`TAG_RULES`] – ordered `(tag, keywords)` rows appended after the
//!   category tag.
//! - [`hours_for`] – placeholder opening hours per category.
//!
//! All matching is substring matching on lower-cased text. The tables are
//! data on purpose: changing a keyword changes what visitors see, so any edit
//! should show up as a one-line diff here.

use crate::config::consts::MAX_TAGS;
use crate::core::sanitize::contains_any;
use crate::model::Category;

/// Keywords for one rule, split by the field they are tested against.
#[derive(Debug, Clone, Copy)]
pub struct Keywords {
    pub name: &'static [&'static str],
    pub desc: &'static [&'static str],
}

impl Keywords {
    fn matches(&self, name_lc: &str, desc_lc: &str) -> bool {
        contains_any(name_lc, self.name) || contains_any(desc_lc, self.desc)
    }
}

const fn kw(name: &'static [&'static str], desc: &'static [&'static str]) -> Keywords {
    Keywords { name, desc }
}

pub static CATEGORY_RULES: &[(Category, Keywords)] = &[
    (Category::Coffee, kw(&["coffee", "cafe", "grind"], &["coffee"])),
    (
        Category::Bar,
        kw(
            &["bar", "brewery", "distillery", "beverage"],
            &["beer", "wine", "cocktails", "tiki"],
        ),
    ),
    (
        Category::Dessert,
        kw(&["fudge", "cobbler", "pancake"], &["fudge", "ice cream", "dessert"]),
    ),
    (Category::Attraction, kw(&["pier"], &["pier", "attraction"])),
];

pub static TAG_RULES: &[(&str, Keywords)] = &[
    // food type
    ("seafood", kw(&[], &["seafood"])),
    ("steaks", kw(&[], &["steaks", "steak"])),
    ("italian", kw(&[], &["italian"])),
    ("asian", kw(&[], &["asian", "sushi", "hibachi"])),
    ("mexican", kw(&[], &["taco", "mexican"])),
    ("bbq", kw(&[], &["bbq", "smokehouse"])),
    ("pizza", kw(&[], &["pizza"])),
    ("wings", kw(&[], &["wings"])),
    ("oysters", kw(&[], &["oysters"])),
    // atmosphere
    ("waterfront", kw(&[], &["waterfront", "ocean", "harbor"])),
    ("boardwalk", kw(&[], &["boardwalk"])),
    ("casual", kw(&[], &["casual"])),
    ("fine-dining", kw(&[], &["fine", "polished"])),
    ("family-friendly", kw(&[], &["family"])),
    ("live-music", kw(&[], &["live music"])),
    ("craft", kw(&[], &["craft"])),
    ("local", kw(&[], &["local"])),
    ("fresh", kw(&[], &["fresh"])),
    ("homemade", kw(&[], &["homemade"])),
    // location
    ("carolina-beach", kw(&["cb"], &["carolina beach"])),
    ("kure-beach", kw(&[], &["kure beach"])),
];

/// First matching rule wins; nothing matched → `Restaurant`.
pub fn categorize(name: &str, description: &str) -> Category {
    let name_lc = name.to_lowercase();
    let desc_lc = description.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, kw)| kw.matches(&name_lc, &desc_lc))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Restaurant)
}

/// Category label first, then every matching tag in table order.
/// Deduplicated (first occurrence kept) and capped at [`MAX_TAGS`].
pub fn derive_tags(name: &str, description: &str, category: Category) -> Vec<String> {
    let name_lc = name.to_lowercase();
    let desc_lc = description.to_lowercase();

    let candidates = std::iter::once(category.id()).chain(
        TAG_RULES
            .iter()
            .filter(|(_, kw)| kw.matches(&name_lc, &desc_lc))
            .map(|(tag, _)| *tag),
    );

    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);
    for tag in candidates {
        if tags.len() == MAX_TAGS { break; }
        if !tags.iter().any(|t| t == tag) {
            tags.push(s!(tag));
        }
    }
    tags
}

/// Placeholder opening hours. The source sheet carries no hours.
pub fn hours_for(category: Category) -> &'static str {
    match category {
        Category::Coffee => "Daily: 6am-6pm",
        Category::Bar => "Daily: 4pm-2am",
        Category::Dessert => "Daily: 11am-10pm",
        Category::Attraction => "Daily: 8am-8pm",
        Category::Restaurant => "Daily: 11am-10pm",
    }
}
