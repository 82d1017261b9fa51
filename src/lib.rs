// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;

pub mod admin;
pub mod classify;
pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod import;
pub mod progress;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
