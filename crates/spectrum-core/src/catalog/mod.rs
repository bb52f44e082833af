//! Level catalog: the ordered, read-only set of maturity levels every other component reads.

mod reference;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Level identifier. Ids are positive and define the catalog's total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl LevelId {
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for LevelId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: LevelId,
    pub title: String,
    pub short_title: String,
    #[serde(default)]
    pub task_profile: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub ai_tools: Vec<String>,
    #[serde(default)]
    pub engineering_involvement: Vec<String>,
    #[serde(default)]
    pub key_characteristics: Vec<String>,
    /// CSS color; opaque to layout.
    pub color: String,
}

impl Level {
    /// Heading used by the detail panel: the part of `title` after the em dash, or the whole
    /// title when there is none.
    pub fn display_title(&self) -> &str {
        match self.title.split_once('—') {
            Some((_, rest)) => rest.trim(),
            None => self.title.trim(),
        }
    }

    /// First task-profile entry, shown as the detail panel's subtitle.
    pub fn summary(&self) -> Option<&str> {
        self.task_profile.first().map(String::as_str)
    }

    /// Text of the "engineering involvement" status badge.
    pub fn engineering_badge(&self) -> Option<&str> {
        self.engineering_involvement.first().map(String::as_str)
    }
}

/// Block label lines: first word, then the rest of the short title.
pub fn label_lines(short_title: &str) -> (&str, &str) {
    let t = short_title.trim();
    match t.split_once(' ') {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (t, ""),
    }
}

/// Ordered level collection. Levels are kept sorted by id; ids are unique and non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn new(mut levels: Vec<Level>) -> Result<Self> {
        levels.sort_by_key(|l| l.id);
        if let Some(l) = levels.iter().find(|l| l.id.0 == 0) {
            return Err(Error::InvalidCatalog {
                message: format!("level `{}` has id 0; ids must be positive", l.short_title),
            });
        }
        for pair in levels.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(Error::InvalidCatalog {
                    message: format!("duplicate level id {}", pair[0].id),
                });
            }
        }
        Ok(Self { levels })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The six-level AI maturity spectrum.
    pub fn reference() -> Self {
        Self {
            levels: reference::levels(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let levels: Vec<Level> = serde_json::from_str(text)?;
        Self::new(levels)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.levels.iter()
    }

    pub fn get(&self, id: LevelId) -> Option<&Level> {
        self.index_of(id).map(|idx| &self.levels[idx])
    }

    pub fn contains(&self, id: LevelId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: LevelId) -> Option<usize> {
        self.levels.binary_search_by_key(&id, |l| l.id).ok()
    }

    pub fn first(&self) -> Option<&Level> {
        self.levels.first()
    }

    pub fn last(&self) -> Option<&Level> {
        self.levels.last()
    }

    pub fn first_id(&self) -> Option<LevelId> {
        self.first().map(|l| l.id)
    }

    pub fn max_id(&self) -> Option<LevelId> {
        self.last().map(|l| l.id)
    }
}

impl<'de> Deserialize<'de> for LevelCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let levels = Vec::<Level>::deserialize(deserializer)?;
        Self::new(levels).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a LevelCatalog {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
