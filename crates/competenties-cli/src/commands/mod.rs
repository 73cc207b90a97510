//! CLI command implementations.

pub mod skills;
pub mod tasks;

use competenties::{Catalog, QueryConfig, QueryEngine};
use tracing::debug;

use crate::output;

/// Run one query and print the result document.
fn run_query<C: Catalog>(
    filter: C::Filter,
    config: QueryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = QueryEngine::<C>::with_config(config);
    debug!(dataset = C::NAME, path = %engine.data_path().display(), ?filter, "running query");

    let result = engine.query(&filter)?;
    output::emit_json(&result).map_err(|e| format!("OutputFailed: {e}"))?;

    Ok(())
}
