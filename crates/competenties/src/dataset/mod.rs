//! Competency datasets and how they are read.

mod record;
mod source;

pub use record::{Levels, Record, SkillDataset, TaskDataset};
pub use source::{DatasetSource, LoadedDataset, SourceMetadata};
