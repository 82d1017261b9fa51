// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;

use crate::gui::app::{App, TABS};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.heading("Pleasure Island Map");
        ui.separator();

        let cur = app.state.gui.current_tab;
        for (idx, tab) in TABS.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.current_tab(), tab);
                app.set_current_tab(idx);
            }
        }
    });
}
