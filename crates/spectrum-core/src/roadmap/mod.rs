//! Static transition guidance between adjacent maturity levels.

mod reference;

use crate::catalog::LevelId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Technical,
    Process,
    Organizational,
}

impl ActionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Process => "process",
            Self::Organizational => "organizational",
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub task_evolution: String,
    pub risk_increase: String,
    pub scope_expansion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub description: String,
    pub category: ActionCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelTransition {
    pub from_level: LevelId,
    pub to_level: LevelId,
    pub gap_analysis: GapAnalysis,
    pub action_items: Vec<ActionItem>,
    pub skills_needed: Vec<String>,
    pub tools_to_implement: Vec<String>,
    pub key_milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapTable {
    /// Highest level; nothing transitions out of it.
    pub terminal_level: LevelId,
    pub transitions: Vec<LevelTransition>,
}

impl RoadmapTable {
    pub fn reference() -> Self {
        Self {
            terminal_level: LevelId(6),
            transitions: reference::transitions(),
        }
    }

    /// Guidance for moving up from `current`; `None` at (or beyond) the terminal level.
    pub fn transition_for_level(&self, current: LevelId) -> Option<&LevelTransition> {
        if current >= self.terminal_level {
            return None;
        }
        self.transitions.iter().find(|t| t.from_level == current)
    }

    pub fn is_terminal(&self, level: LevelId) -> bool {
        level >= self.terminal_level
    }
}
