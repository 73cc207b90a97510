//! Filter composition and reduction over competency datasets.

mod catalog;
mod reduce;

pub use catalog::{Catalog, SkillCatalog, SkillFilter, TaskCatalog, TaskFilter};
pub use reduce::Reduce;
