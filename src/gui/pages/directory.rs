// src/gui/pages/directory.rs
//
// Search box, category picker, chamber toggle and sort order above a list of
// cards. Every input change recomputes the visible list synchronously; the
// Directory drops the selection if it is no longer visible.

use eframe::egui;

use crate::data::{CategoryFilter, SortOrder};
use crate::gui::{app::App, components::cards};
use crate::model::{category_label, Category};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.state.options.display.map_enabled() {
        ui.label(
            egui::RichText::new("Map view is disabled: no map provider key configured.")
                .small()
                .weak(),
        );
    }

    let mut criteria = app.directory.criteria().clone();
    let mut order = app.directory.order();

    ui.horizontal_wrapped(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut criteria.search_text)
                .hint_text("Search shops, food, categories…")
                .desired_width(260.0),
        );

        let categories = app.directory.catalog().categories();
        let selected_text = match criteria.category {
            CategoryFilter::All => s!("All categories"),
            CategoryFilter::Only(c) => s!(category_label(categories, c).unwrap_or(c.id())),
        };
        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut criteria.category, CategoryFilter::All, "All categories");
                for c in Category::ALL {
                    let label = category_label(categories, c).unwrap_or(c.id());
                    ui.selectable_value(&mut criteria.category, CategoryFilter::Only(c), label);
                }
            });

        ui.checkbox(&mut criteria.chamber_only, "Chamber members only");

        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(sort_label(order))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut order, SortOrder::MembersFirst, sort_label(SortOrder::MembersFirst));
                ui.selectable_value(&mut order, SortOrder::Alphabetical, sort_label(SortOrder::Alphabetical));
            });
    });

    if criteria != *app.directory.criteria() {
        logd!("UI: criteria {:?}", criteria);
        app.state.gui.criteria = criteria.clone();
        app.directory.set_criteria(criteria);
    }
    if order != app.directory.order() {
        app.state.gui.sort = order;
        app.directory.set_order(order);
    }

    ui.separator();
    ui.label(format!("{} shops to visit!", app.directory.visible_len()));

    let mut clicked: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("directory_cards")
        .show(ui, |ui| {
            let categories = app.directory.catalog().categories();
            let selected = app.directory.selected();
            for r in app.directory.visible() {
                let is_selected = selected == Some(r.id.as_str());
                if cards::draw(ui, r, categories, is_selected) {
                    clicked = Some(r.id.clone());
                }
                ui.add_space(4.0);
            }

            if app.directory.visible_len() == 0 {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label("No businesses found matching your criteria.");
                    ui.label(egui::RichText::new("Try adjusting your search or filters.").weak());
                });
            }
        });

    if let Some(id) = clicked {
        app.directory.toggle_select(&id);
    }
}

fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::MembersFirst => "Members first",
        SortOrder::Alphabetical => "A → Z",
    }
}
