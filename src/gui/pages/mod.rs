// src/gui/pages/mod.rs
pub mod admin;
pub mod directory;
