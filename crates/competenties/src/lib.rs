//! competenties: query engine for the Open-ICT competency framework.
//!
//! Two read-only datasets are supported:
//!
//! - **vaardigheden**: student skills, keyed by skill name and level (1-4)
//! - **HBO-I beroepstaken**: professional tasks, keyed by architecture layer,
//!   activity and level (1-4)
//!
//! A query validates its filters against the fixed vocabulary, loads the
//! dataset and narrows it down to the matching entries, keeping the original
//! nesting wherever a dimension was left unfiltered.
//!
//! # Example
//!
//! ```no_run
//! use competenties::{SkillFilter, SkillQueryEngine};
//!
//! let engine = SkillQueryEngine::new();
//! let result = engine
//!     .query(&SkillFilter::new().skill("Samenwerken").level("3"))
//!     .unwrap();
//!
//! println!("{}", result["Samenwerken"]["3"].title);
//! ```

pub mod dataset;
pub mod error;
pub mod query;
pub mod validation;
pub mod vocabulary;

mod engine;

pub use crate::engine::{
    DATA_DIR_ENV, QueryConfig, QueryEngine, SkillQueryEngine, TaskQueryEngine, default_data_dir,
    skills_in, tasks_in,
};
pub use dataset::{DatasetSource, Levels, LoadedDataset, Record, SkillDataset, SourceMetadata, TaskDataset};
pub use error::{CompetentiesError, Result};
pub use query::{Catalog, Reduce, SkillCatalog, SkillFilter, TaskCatalog, TaskFilter};
pub use validation::Level;
pub use vocabulary::{ACTIVITIES, Dimension, LAYERS, LEVELS, SKILLS};
