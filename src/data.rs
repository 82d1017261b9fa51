// src/data.rs
//
// Canonical records and the filtered views built over them.
//
// - Catalog: read-only holder for the canonical record list plus the
//            category metadata used to resolve labels.
// - DirectoryView: derived (view) data produced from a record slice by
//                  applying Criteria and a SortOrder. Holds indices only.
// - Directory: the view state a frontend keeps (criteria, order, selection)
//              and recomputes synchronously on every change.

use std::cmp::Ordering;

use crate::model::{category_label, BusinessRecord, Category, CategoryInfo};

/// Authoritative record list. Never mutated by the viewing surface.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<BusinessRecord>,
    categories: Vec<CategoryInfo>,
}

impl Catalog {
    pub fn new(records: Vec<BusinessRecord>, categories: Vec<CategoryInfo>) -> Self {
        Self { records, categories }
    }

    pub fn records(&self) -> &[BusinessRecord] { &self.records }
    pub fn categories(&self) -> &[CategoryInfo] { &self.categories }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn get(&self, id: &str) -> Option<&BusinessRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    /// "all" or a category id.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search_text: String,
    pub category: CategoryFilter,
    pub chamber_only: bool,
}

impl Criteria {
    /// All three criteria must hold.
    pub fn matches(&self, record: &BusinessRecord, categories: &[CategoryInfo]) -> bool {
        self.category.matches(record.category)
            && (!self.chamber_only || record.is_chamber_member)
            && text_matches(&self.search_text, record, categories)
    }
}

fn text_matches(search: &str, record: &BusinessRecord, categories: &[CategoryInfo]) -> bool {
    if search.is_empty() { return true; }
    let needle = search.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || category_label(categories, record.category)
            .is_some_and(|label| label.to_lowercase().contains(&needle))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Plain listing by name.
    #[default]
    Alphabetical,
    /// Chamber members first, each group by name.
    MembersFirst,
}

impl SortOrder {
    pub fn compare(self, a: &BusinessRecord, b: &BusinessRecord) -> Ordering {
        match self {
            SortOrder::Alphabetical => name_cmp(&a.name, &b.name),
            SortOrder::MembersFirst => b
                .is_chamber_member
                .cmp(&a.is_chamber_member)
                .then_with(|| name_cmp(&a.name, &b.name)),
        }
    }
}

/// Collation-style name order: case-insensitive first, then lower case
/// before upper case on an otherwise equal pair.
///
/// Compares code points after lowercasing, not a locale collation:
/// accented letters sort after `z` ("Cafz" < "Café").
pub fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Zero-copy filtered view for display.
/// Holds positions into the borrowed record slice, already in display order.
#[derive(Clone, Debug)]
pub struct DirectoryView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a [BusinessRecord],
}

impl<'a> DirectoryView<'a> {
    pub fn build(
        raw: &'a [BusinessRecord],
        categories: &[CategoryInfo],
        criteria: &Criteria,
        order: SortOrder,
    ) -> Self {
        let mut row_ix: Vec<usize> = raw
            .iter()
            .enumerate()
            .filter(|(_, r)| criteria.matches(r, categories))
            .map(|(i, _)| i)
            .collect();
        // stable: equal keys keep source order
        row_ix.sort_by(|&x, &y| order.compare(&raw[x], &raw[y]));
        Self { row_ix, raw }
    }

    pub fn from_catalog(catalog: &'a Catalog, criteria: &Criteria, order: SortOrder) -> Self {
        Self::build(catalog.records(), catalog.categories(), criteria, order)
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single record by view position.
    pub fn get(&self, i: usize) -> Option<&'a BusinessRecord> {
        let raw = self.raw;
        self.row_ix.get(i).and_then(|&ix| raw.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a BusinessRecord> + '_ {
        let raw = self.raw;
        self.row_ix.iter().map(move |&ix| &raw[ix])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.iter().any(|r| r.id == id)
    }

    /// Materialize owned records (for export or re-filtering).
    pub fn to_owned_records(&self) -> Vec<BusinessRecord> {
        self.iter().cloned().collect()
    }
}

/// `filter(records, criteria)` as a plain function over owned results.
pub fn filter(
    records: &[BusinessRecord],
    categories: &[CategoryInfo],
    criteria: &Criteria,
    order: SortOrder,
) -> Vec<BusinessRecord> {
    DirectoryView::build(records, categories, criteria, order).to_owned_records()
}

/// A selection may only point at a visible record.
pub fn reconcile_selection(selected: Option<String>, view: &DirectoryView<'_>) -> Option<String> {
    selected.filter(|id| view.contains_id(id))
}

/// View state of the directory screen. Every mutator recomputes the visible
/// rows and clears a selection that fell out of them.
#[derive(Clone, Debug)]
pub struct Directory {
    catalog: Catalog,
    criteria: Criteria,
    order: SortOrder,
    selected: Option<String>,
    visible: Vec<usize>,
}

impl Directory {
    pub fn new(catalog: Catalog, order: SortOrder) -> Self {
        let mut d = Self {
            catalog,
            criteria: Criteria::default(),
            order,
            selected: None,
            visible: Vec::new(),
        };
        d.recompute();
        d
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn criteria(&self) -> &Criteria { &self.criteria }
    pub fn order(&self) -> SortOrder { self.order }
    pub fn selected(&self) -> Option<&str> { self.selected.as_deref() }

    pub fn selected_record(&self) -> Option<&BusinessRecord> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn visible(&self) -> impl Iterator<Item = &BusinessRecord> + '_ {
        self.visible.iter().map(move |&ix| &self.catalog.records()[ix])
    }

    pub fn visible_len(&self) -> usize { self.visible.len() }

    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
        self.recompute();
    }

    /// Click on a card: selecting the selected one again deselects it.
    /// Ids that are not visible are ignored.
    pub fn toggle_select(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else if self.visible().any(|r| r.id == id) {
            self.selected = Some(s!(id));
        }
    }

    fn recompute(&mut self) {
        let view = DirectoryView::from_catalog(&self.catalog, &self.criteria, self.order);
        let selected = reconcile_selection(self.selected.take(), &view);
        self.visible = view.row_ix;
        self.selected = selected;
    }
}
