//! Selection and hover state for the spectrum diagram.
//!
//! The active level is owned by the caller (click, previous/next navigation, assessment
//! results). The hovered level is pure pointer feedback. Per-level display flags are a
//! projection over both and are never stored.

use crate::assessment::AssessmentResult;
use crate::catalog::{LevelCatalog, LevelId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFlags {
    pub is_active: bool,
    pub is_hovered: bool,
    pub is_dimmed: bool,
}

impl LevelFlags {
    /// Hovered or active blocks draw guide lines to both axes.
    pub fn is_highlighted(&self) -> bool {
        self.is_active || self.is_hovered
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    rev: u64,
    active_level_id: Option<LevelId>,
    hovered_level_id: Option<LevelId>,
}

impl InteractionState {
    /// Nothing active, nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `initial_active` when given (a restored assessment result), otherwise the
    /// catalog's first level.
    pub fn for_catalog(catalog: &LevelCatalog, initial_active: Option<LevelId>) -> Self {
        Self {
            rev: 0,
            active_level_id: initial_active.or_else(|| catalog.first_id()),
            hovered_level_id: None,
        }
    }

    /// Bumped on every observable change; equal revisions mean equal derived state.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn active_level_id(&self) -> Option<LevelId> {
        self.active_level_id
    }

    pub fn hovered_level_id(&self) -> Option<LevelId> {
        self.hovered_level_id
    }

    /// Callers pass ids sourced from the catalog; unknown ids are stored as-is and simply
    /// match no block.
    pub fn select_level(&mut self, id: LevelId) {
        self.set_active(Some(id));
    }

    pub fn clear_selection(&mut self) {
        self.set_active(None);
    }

    pub fn hover(&mut self, id: LevelId) {
        if self.hovered_level_id == Some(id) {
            return;
        }
        self.hovered_level_id = Some(id);
        self.bump();
    }

    pub fn unhover(&mut self) {
        if self.hovered_level_id.is_none() {
            return;
        }
        self.hovered_level_id = None;
        self.bump();
    }

    /// Moves the selection one level down. No-op at the lowest level or with nothing active.
    pub fn previous(&mut self, catalog: &LevelCatalog) {
        let Some(idx) = self.active_index(catalog) else {
            return;
        };
        if idx == 0 {
            return;
        }
        let id = catalog.levels()[idx - 1].id;
        self.set_active(Some(id));
    }

    /// Moves the selection one level up. No-op at the highest level or with nothing active.
    pub fn next(&mut self, catalog: &LevelCatalog) {
        let Some(idx) = self.active_index(catalog) else {
            return;
        };
        let Some(level) = catalog.levels().get(idx + 1) else {
            return;
        };
        self.set_active(Some(level.id));
    }

    pub fn can_previous(&self, catalog: &LevelCatalog) -> bool {
        self.active_index(catalog).is_some_and(|idx| idx > 0)
    }

    pub fn can_next(&self, catalog: &LevelCatalog) -> bool {
        self.active_index(catalog)
            .is_some_and(|idx| idx + 1 < catalog.len())
    }

    pub fn apply_assessment(&mut self, result: &AssessmentResult) {
        self.select_level(result.primary_level);
    }

    pub fn flags(&self, id: LevelId) -> LevelFlags {
        let is_active = self.active_level_id == Some(id);
        LevelFlags {
            is_active,
            is_hovered: self.hovered_level_id == Some(id),
            is_dimmed: self.active_level_id.is_some() && !is_active,
        }
    }

    fn active_index(&self, catalog: &LevelCatalog) -> Option<usize> {
        catalog.index_of(self.active_level_id?)
    }

    fn set_active(&mut self, id: Option<LevelId>) {
        if self.active_level_id == id {
            return;
        }
        self.active_level_id = id;
        self.bump();
    }

    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}
