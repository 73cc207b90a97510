//! Leaf records and the dataset shapes built from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single competency description at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Short description of what is expected at this level.
    pub title: String,
    /// Optional elaboration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl Record {
    /// Create a record without extra info.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            info: None,
        }
    }

    /// Attach extra info.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// Level key ("1".."4") to record.
pub type Levels = IndexMap<String, Record>;

/// Skill name to levels.
pub type SkillDataset = IndexMap<String, Levels>;

/// Layer to activity to levels.
pub type TaskDataset = IndexMap<String, IndexMap<String, Levels>>;
