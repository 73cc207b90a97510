//! Per-dataset descriptions shared by the query engine.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dataset::{SkillDataset, TaskDataset};
use crate::error::Result;
use crate::validation::{validate_activity, validate_layer, validate_level, validate_skill_name};
use crate::vocabulary::Dimension;

use super::reduce::Reduce;

/// Compile-time description of one competency dataset.
pub trait Catalog {
    /// In-memory shape of the dataset.
    type Data: Reduce + DeserializeOwned + Serialize + Clone + Debug;
    /// Raw, unvalidated filter input.
    type Filter: Debug;

    /// Plural noun used in "no results" reports.
    const NAME: &'static str;
    /// File name inside the data directory.
    const FILE_NAME: &'static str;
    /// Dimensions from outermost to innermost.
    const DIMENSIONS: &'static [Dimension];

    /// Validate every supplied filter value and return one entry per
    /// dimension, outermost first.
    fn selection(filter: &Self::Filter) -> Result<Vec<Option<String>>>;
}

/// Student skills: skill name, then level.
#[derive(Debug, Clone, Copy)]
pub struct SkillCatalog;

/// Filter input for [`SkillCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    pub skill: Option<String>,
    pub level: Option<String>,
}

impl SkillFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }
}

impl Catalog for SkillCatalog {
    type Data = SkillDataset;
    type Filter = SkillFilter;

    const NAME: &'static str = "skills";
    const FILE_NAME: &'static str = "vaardigheden-nl.json";
    const DIMENSIONS: &'static [Dimension] = &[Dimension::Skill, Dimension::Level];

    fn selection(filter: &SkillFilter) -> Result<Vec<Option<String>>> {
        if let Some(skill) = &filter.skill {
            validate_skill_name(skill)?;
        }
        let level = filter.level.as_deref().map(validate_level).transpose()?;

        Ok(vec![filter.skill.clone(), level.map(|l| l.key())])
    }
}

/// HBO-I professional tasks: layer, then activity, then level.
#[derive(Debug, Clone, Copy)]
pub struct TaskCatalog;

/// Filter input for [`TaskCatalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub layer: Option<String>,
    pub activity: Option<String>,
    pub level: Option<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }
}

impl Catalog for TaskCatalog {
    type Data = TaskDataset;
    type Filter = TaskFilter;

    const NAME: &'static str = "professional tasks";
    const FILE_NAME: &'static str = "hboi-nl.json";
    const DIMENSIONS: &'static [Dimension] =
        &[Dimension::Layer, Dimension::Activity, Dimension::Level];

    fn selection(filter: &TaskFilter) -> Result<Vec<Option<String>>> {
        if let Some(layer) = &filter.layer {
            validate_layer(layer)?;
        }
        if let Some(activity) = &filter.activity {
            validate_activity(activity)?;
        }
        let level = filter.level.as_deref().map(validate_level).transpose()?;

        Ok(vec![
            filter.layer.clone(),
            filter.activity.clone(),
            level.map(|l| l.key()),
        ])
    }
}
