//! Query engine and public API.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dataset::{DatasetSource, LoadedDataset};
use crate::error::{CompetentiesError, Result};
use crate::query::{Catalog, Reduce, SkillCatalog, TaskCatalog};

/// Environment variable that overrides the data directory in the CLI.
pub const DATA_DIR_ENV: &str = "COMPETENTIES_DATA_DIR";

/// Configuration for a query engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Directory holding `vaardigheden-nl.json` and `hboi-nl.json`.
    pub data_dir: PathBuf,
}

impl QueryConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// The `data` directory beside the running executable, falling back to
/// `./data` when there is none.
pub fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Runs validate, load and reduce for one dataset.
pub struct QueryEngine<C: Catalog> {
    config: QueryConfig,
    catalog: PhantomData<C>,
}

/// Engine over the flat skill → level dataset.
pub type SkillQueryEngine = QueryEngine<SkillCatalog>;

/// Engine over the layer → activity → level dataset.
pub type TaskQueryEngine = QueryEngine<TaskCatalog>;

impl<C: Catalog> QueryEngine<C> {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(QueryConfig::default())
    }

    pub fn with_config(config: QueryConfig) -> Self {
        Self {
            config,
            catalog: PhantomData,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Location of this engine's dataset file.
    pub fn data_path(&self) -> PathBuf {
        self.config.data_dir.join(C::FILE_NAME)
    }

    /// Read the full dataset.
    pub fn load(&self) -> Result<LoadedDataset<C::Data>> {
        DatasetSource::new(self.data_path()).load()
    }

    /// Validate `filter`, load the dataset and reduce it.
    ///
    /// Validation happens before the file is opened, so an invalid filter is
    /// reported even when the data directory is missing.
    pub fn query(&self, filter: &C::Filter) -> Result<C::Data> {
        let selection = C::selection(filter)?;
        debug!(dataset = C::NAME, ?selection, "filters validated");

        let loaded = self.load()?;
        reduce::<C>(&loaded.data, &selection)
    }

    /// Validate `filter` and reduce an already loaded dataset.
    pub fn filter(&self, data: &C::Data, filter: &C::Filter) -> Result<C::Data> {
        let selection = C::selection(filter)?;
        reduce::<C>(data, &selection)
    }
}

impl<C: Catalog> Default for QueryEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Catalog> std::fmt::Debug for QueryEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("dataset", &C::NAME)
            .field("config", &self.config)
            .finish()
    }
}

fn reduce<C: Catalog>(data: &C::Data, selection: &[Option<String>]) -> Result<C::Data> {
    debug_assert_eq!(selection.len(), <C::Data as Reduce>::DEPTH);

    let reduced = data
        .reduce(selection)
        .filter(|reduced| !reduced.is_empty())
        .ok_or(CompetentiesError::NoResults { dataset: C::NAME })?;
    debug!(dataset = C::NAME, ?selection, "dataset reduced");
    Ok(reduced)
}

/// Convenience for callers that only know a directory.
pub fn skills_in(data_dir: impl AsRef<Path>) -> SkillQueryEngine {
    QueryEngine::with_config(QueryConfig::with_data_dir(data_dir.as_ref()))
}

/// Convenience for callers that only know a directory.
pub fn tasks_in(data_dir: impl AsRef<Path>) -> TaskQueryEngine {
    QueryEngine::with_config(QueryConfig::with_data_dir(data_dir.as_ref()))
}
