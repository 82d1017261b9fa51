// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::ViewportBuilder;
use pleasure_map::{
    config::{
        consts::{DATA_DIR, DEFAULT_DATA_FILE, MAP_TOKEN_ENV},
        options::DisplayConfig,
        state::GuiState,
    },
    gui, log,
};

fn main() {
    log::init();

    // Optional first argument: data file to browse/edit
    let data_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_DIR).join(DEFAULT_DATA_FILE));

    let display = DisplayConfig { map_token: std::env::var(MAP_TOKEN_ENV).ok() };

    let defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([defaults.window_w as f32, defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, display, &data_path) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
