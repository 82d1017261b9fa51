// src/gui/components/cards.rs
//
// One business card. Returns true when the card title was clicked; the
// caller decides what a click means (toggle in the directory).

use eframe::egui::{self, RichText};

use crate::model::{category_label, BusinessRecord, CategoryInfo};

pub fn draw(ui: &mut egui::Ui, r: &BusinessRecord, categories: &[CategoryInfo], selected: bool) -> bool {
    let mut clicked = false;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let icon = categories
                .iter()
                .find(|c| c.id == r.category.id())
                .map(|c| c.icon.as_str())
                .unwrap_or("");
            ui.label(icon);
            clicked = ui.selectable_label(selected, RichText::new(&r.name).strong()).clicked();
            if r.is_chamber_member {
                ui.label(RichText::new("★ Chamber member").small());
            }
        });

        let label = category_label(categories, r.category).unwrap_or(r.category.id());
        ui.label(RichText::new(label).italics());
        if !r.description.is_empty() {
            ui.label(r.description.as_str());
        }
        ui.label(format!("{}  ·  {}", r.address, r.hours));

        ui.horizontal_wrapped(|ui| {
            if let Some(phone) = &r.phone {
                ui.label(format!("☎ {phone}"));
            }
            if let Some(url) = &r.website {
                ui.hyperlink_to("Website", url);
            }
            for tag in &r.tags {
                ui.label(RichText::new(format!("#{tag}")).small().weak());
            }
        });
    });

    clicked
}
