// src/gui/pages/admin.rs
//
// Shop list on the left, edit form on the right. There is no map: the
// location is typed as lon/lat and either placed as a new pin or applied to
// the selected shop's marker.

use eframe::egui;

use crate::admin::{SaveOutcome, ShopForm};
use crate::core::number::round6;
use crate::gui::app::App;
use crate::model::Coordinates;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Shop Admin");
        ui.separator();
        ui.label("Export to:");
        ui.text_edit_singleline(&mut app.export_dir_text);
        if ui.button("⬇ Export JSON").clicked() {
            export(app);
        }
    });
    ui.separator();

    ui.columns(2, |cols| {
        draw_list(&mut cols[0], app);
        draw_form(&mut cols[1], app);
    });
}

fn draw_list(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(format!("Shops ({})", app.admin.shops().len()));

    let mut pick: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("admin_shops")
        .show(ui, |ui| {
            let selected = app.admin.selected_id();
            for (i, shop) in app.admin.sorted().into_iter().enumerate() {
                let text = format!(
                    "{}. {}   ({:.4}, {:.4})",
                    i + 1, shop.name, shop.coordinates.lng, shop.coordinates.lat
                );
                if ui.selectable_label(selected == Some(shop.id.as_str()), text).clicked() {
                    pick = Some(shop.id.clone());
                }
            }
        });

    if let Some(id) = pick {
        if let Some(shop) = app.admin.select(&id) {
            app.form = ShopForm::from_record(shop);
        }
        app.sync_pin_text();
    }
}

fn draw_form(ui: &mut egui::Ui, app: &mut App) {
    let editing = app.admin.selected().is_some();
    ui.heading(if editing { "Edit Shop" } else { "Add New Shop" });

    egui::Grid::new("shop_form").num_columns(2).show(ui, |ui| {
        ui.label("Shop Name *");
        ui.text_edit_singleline(&mut app.form.name);
        ui.end_row();

        ui.label("Description");
        ui.text_edit_multiline(&mut app.form.description);
        ui.end_row();

        ui.label("Address");
        ui.text_edit_singleline(&mut app.form.address);
        ui.end_row();

        ui.label("Hours");
        ui.text_edit_singleline(&mut app.form.hours);
        ui.end_row();

        ui.label("Website");
        ui.text_edit_singleline(&mut app.form.website);
        ui.end_row();

        ui.label("Phone");
        ui.text_edit_singleline(&mut app.form.phone);
        ui.end_row();

        ui.label("Longitude");
        ui.text_edit_singleline(&mut app.pin_lng_text);
        ui.end_row();

        ui.label("Latitude");
        ui.text_edit_singleline(&mut app.pin_lat_text);
        ui.end_row();
    });

    ui.horizontal(|ui| {
        if ui.button("📍 Place pin").clicked() {
            match typed_coordinates(app) {
                Some(at) => {
                    app.admin.place_pin(at);
                    app.status(format!("Pin placed at {at}"));
                }
                None => app.status("Longitude/latitude must be numbers"),
            }
        }
        if editing && ui.button("Move marker").clicked() {
            match (typed_coordinates(app), app.admin.selected_id().map(|id| s!(id))) {
                (Some(at), Some(id)) => {
                    app.admin.move_marker(&id, at);
                    app.status(format!("Moved marker to {at}"));
                }
                _ => app.status("Longitude/latitude must be numbers"),
            }
        }
    });

    if let Some(pin) = app.admin.pin() {
        ui.label(egui::RichText::new(format!("📍 {pin}")).monospace());
    }

    ui.horizontal(|ui| {
        let label = if editing { "Update" } else { "Create" };
        if ui.add_enabled(app.admin.pin().is_some(), egui::Button::new(label)).clicked() {
            save(app);
        }
        if ui.button("Clear").clicked() {
            app.admin.clear();
            app.form = ShopForm::default();
            app.sync_pin_text();
        }
    });

    if editing && ui.button("Delete Shop").clicked() {
        match app.admin.delete_selected() {
            Ok(removed) => {
                app.form = ShopForm::default();
                app.sync_pin_text();
                app.status(format!("Deleted {}", removed.name));
            }
            Err(e) => app.status(e.to_string()),
        }
    }
}

fn typed_coordinates(app: &App) -> Option<Coordinates> {
    let lng: f64 = app.pin_lng_text.trim().parse().ok()?;
    let lat: f64 = app.pin_lat_text.trim().parse().ok()?;
    (lng.is_finite() && lat.is_finite()).then(|| Coordinates::new(round6(lng), round6(lat)))
}

fn save(app: &mut App) {
    let name = app.form.name.trim().to_string();
    match app.admin.save(&app.form) {
        Ok(SaveOutcome::Created(_)) => app.status(format!("✓ {name} created successfully!")),
        Ok(SaveOutcome::Updated(_)) => app.status(format!("✓ {name} updated successfully!")),
        // keep the form as typed
        Err(e) => app.status(e.to_string()),
    }
}

fn export(app: &mut App) {
    app.state.options.export.set_dir(&app.export_dir_text);
    match app.admin.export(&app.state.options.export) {
        Ok(path) => app.status(format!("✓ Wrote {}", path.display())),
        Err(e) => {
            loge!("Admin: export failed: {}", e);
            app.status(e.to_string());
        }
    }
}
