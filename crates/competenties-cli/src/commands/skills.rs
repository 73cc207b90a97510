//! Skills command - query the vaardigheden dataset.

use competenties::{QueryConfig, SkillCatalog, SkillFilter};

pub fn run(
    skill: Option<String>,
    level: Option<String>,
    config: QueryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    super::run_query::<SkillCatalog>(SkillFilter { skill, level }, config)
}
