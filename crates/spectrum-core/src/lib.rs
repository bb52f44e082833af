#![forbid(unsafe_code)]

//! AI maturity spectrum model (headless).
//!
//! Design goals:
//! - a read-only level catalog shared by every consumer
//! - explicit, revisioned interaction state; per-level flags are projections, never stored
//! - deterministic, testable assessment and roadmap lookups

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod interaction;
pub mod leads;
pub mod roadmap;
pub mod share;
pub mod store;
pub mod time;

pub use assessment::{
    ASSESSMENT_VERSION, AnswerSheet, AssessmentResult, LevelRange, Questionnaire, SheetStep,
    calculate_result,
};
pub use catalog::{Level, LevelCatalog, LevelId, label_lines};
pub use config::SpectrumConfig;
pub use error::{Error, Result};
pub use interaction::{InteractionState, LevelFlags};
pub use roadmap::{LevelTransition, RoadmapTable};
pub use store::{AssessmentStore, FileStorage, MemoryStorage, Storage};

use std::sync::Arc;

/// Footer navigation readout: `Level 3 / 6`, or `Level - / 6` with nothing selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStatus {
    pub label: String,
    pub can_previous: bool,
    pub can_next: bool,
}

/// Composition root for one diagram: the shared catalog plus the interaction state it owns.
#[derive(Debug, Clone)]
pub struct Spectrum {
    catalog: Arc<LevelCatalog>,
    state: InteractionState,
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::new(Arc::new(LevelCatalog::reference()))
    }
}

impl Spectrum {
    pub fn new(catalog: Arc<LevelCatalog>) -> Self {
        let state = InteractionState::for_catalog(&catalog, None);
        Self { catalog, state }
    }

    /// Starts on a restored assessment level instead of the first level.
    pub fn with_initial_active(catalog: Arc<LevelCatalog>, initial: Option<LevelId>) -> Self {
        let state = InteractionState::for_catalog(&catalog, initial);
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Arc<LevelCatalog> {
        &self.catalog
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InteractionState {
        &mut self.state
    }

    pub fn select(&mut self, id: LevelId) {
        self.state.select_level(id);
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn hover(&mut self, id: LevelId) {
        self.state.hover(id);
    }

    pub fn unhover(&mut self) {
        self.state.unhover();
    }

    pub fn previous(&mut self) {
        self.state.previous(&self.catalog);
    }

    pub fn next(&mut self) {
        self.state.next(&self.catalog);
    }

    pub fn apply_assessment(&mut self, result: &AssessmentResult) {
        self.state.apply_assessment(result);
    }

    pub fn flags(&self, id: LevelId) -> LevelFlags {
        self.state.flags(id)
    }

    /// The active level, when it names a catalog entry.
    pub fn active_level(&self) -> Option<&Level> {
        self.catalog.get(self.state.active_level_id()?)
    }

    pub fn hovered_level(&self) -> Option<&Level> {
        self.catalog.get(self.state.hovered_level_id()?)
    }

    pub fn navigation_status(&self) -> NavigationStatus {
        let id = match self.state.active_level_id() {
            Some(id) => id.to_string(),
            None => "-".to_string(),
        };
        NavigationStatus {
            label: format!("Level {id} / {}", self.catalog.len()),
            can_previous: self.state.can_previous(&self.catalog),
            can_next: self.state.can_next(&self.catalog),
        }
    }

    /// Badge text for the active level's engineering involvement.
    pub fn engineering_badge(&self) -> Option<&str> {
        self.active_level()?.engineering_badge()
    }
}

#[cfg(test)]
mod tests;
