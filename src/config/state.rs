// src/config/state.rs
use super::options::AppOptions;
use crate::data::{Criteria, SortOrder};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into gui::app::TABS
    pub current_tab: usize,

    /// Directory tab inputs
    pub criteria: Criteria,
    pub sort: SortOrder,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_tab: 0,
            criteria: Criteria::default(),
            sort: SortOrder::MembersFirst,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
