//! Tasks command - query the HBO-I professional tasks dataset.

use competenties::{QueryConfig, TaskCatalog, TaskFilter};

pub fn run(
    layer: Option<String>,
    activity: Option<String>,
    level: Option<String>,
    config: QueryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = TaskFilter {
        layer,
        activity,
        level,
    };
    super::run_query::<TaskCatalog>(filter, config)
}
