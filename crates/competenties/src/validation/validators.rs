//! Filter value validators.
//!
//! All checks are pure and run before any dataset is touched, so a rejected
//! filter never triggers a partial traversal.

use tracing::trace;

use crate::error::{CompetentiesError, Result};
use crate::vocabulary::Dimension;

/// A validated proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Every level, lowest first.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Level(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// The key under which this level is stored in a dataset.
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<u8> for Level {
    type Error = CompetentiesError;

    fn try_from(value: u8) -> Result<Self> {
        Level::new(value).ok_or_else(|| CompetentiesError::InvalidLevel {
            value: value.to_string(),
        })
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Level {
    type Err = CompetentiesError;

    fn from_str(s: &str) -> Result<Self> {
        validate_level(s)
    }
}

/// Check that `value` is exactly one of the members of `dimension`.
pub fn validate_member(dimension: Dimension, value: &str) -> Result<()> {
    if dimension.contains(value) {
        trace!(%dimension, value, "filter value accepted");
        Ok(())
    } else {
        Err(CompetentiesError::InvalidFilterValue {
            dimension,
            value: value.to_string(),
            valid: dimension.values(),
        })
    }
}

pub fn validate_skill_name(name: &str) -> Result<()> {
    validate_member(Dimension::Skill, name)
}

pub fn validate_layer(name: &str) -> Result<()> {
    validate_member(Dimension::Layer, name)
}

pub fn validate_activity(name: &str) -> Result<()> {
    validate_member(Dimension::Activity, name)
}

/// Parse a level filter.
///
/// Only the plain decimal integers 1 through 4 are accepted. Signs, padding
/// and surrounding whitespace are rejected rather than normalized.
pub fn validate_level(value: &str) -> Result<Level> {
    let invalid = || CompetentiesError::InvalidLevel {
        value: value.to_string(),
    };

    if !Dimension::Level.contains(value) {
        return Err(invalid());
    }

    value
        .parse::<u8>()
        .ok()
        .and_then(Level::new)
        .ok_or_else(invalid)
}
