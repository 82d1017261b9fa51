// src/gui/app.rs
use std::{error::Error, path::Path};

use eframe::egui;

use crate::{
    admin::{AdminSession, ShopForm},
    config::{options::DisplayConfig, state::AppState},
    data::{Catalog, Directory},
    model::{default_categories, BusinessRecord, CategoryInfo},
    store,
};

use super::{components, pages};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Directory,
    Admin,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Directory => "Business Directory",
            Tab::Admin => "Shop Admin",
        }
    }
}

pub static TABS: &[Tab] = &[Tab::Directory, Tab::Admin];

pub fn run(
    options: eframe::NativeOptions,
    display: DisplayConfig,
    data_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.display = display;
    let app = App::load(state, data_path);

    eframe::run_native(
        "Pleasure Island Map",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // read-only directory over the canonical file
    pub directory: Directory,

    // session-local editable copy; discarded unless exported
    pub admin: AdminSession,
    pub form: ShopForm,
    pub pin_lng_text: String,
    pub pin_lat_text: String,
    pub export_dir_text: String,

    pub status: String,
}

impl App {
    pub fn load(state: AppState, data_path: &Path) -> Self {
        let (records, status) = match store::load_records(data_path) {
            Ok(records) => {
                logf!("Init: loaded {} business(es) from {}", records.len(), data_path.display());
                let msg = format!("Loaded {} shops", records.len());
                (records, msg)
            }
            Err(e) => {
                loge!("Init: {}", e);
                (Vec::new(), e.to_string())
            }
        };
        let categories = store::categories_beside(data_path).unwrap_or_else(|e| {
            loge!("Init: {}", e);
            default_categories()
        });
        Self::new(state, records, categories, status)
    }

    pub fn new(
        state: AppState,
        records: Vec<BusinessRecord>,
        categories: Vec<CategoryInfo>,
        status: String,
    ) -> Self {
        let mut directory = Directory::new(Catalog::new(records.clone(), categories), state.gui.sort);
        directory.set_criteria(state.gui.criteria.clone());

        let export_dir_text = state.options.export.dir().to_string_lossy().into_owned();

        Self {
            state,
            directory,
            admin: AdminSession::new(records),
            form: ShopForm::default(),
            pin_lng_text: s!(),
            pin_lat_text: s!(),
            export_dir_text,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_tab(&self) -> Tab { TABS[self.state.gui.current_tab] }

    #[inline]
    pub fn set_current_tab(&mut self, idx: usize) { self.state.gui.current_tab = idx; }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) { self.status = msg.into(); }

    /// Show the admin pin in the lon/lat text fields.
    pub fn sync_pin_text(&mut self) {
        match self.admin.pin() {
            Some(c) => {
                self.pin_lng_text = format!("{:.6}", c.lng);
                self.pin_lat_text = format!("{:.6}", c.lat);
            }
            None => {
                self.pin_lng_text.clear();
                self.pin_lat_text.clear();
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab() {
            Tab::Directory => pages::directory::draw(ui, self),
            Tab::Admin => pages::admin::draw(ui, self),
        });
    }
}
