// src/gui/components/mod.rs
pub mod cards;
pub mod tabs;
