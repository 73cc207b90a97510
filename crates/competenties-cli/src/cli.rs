//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use competenties::{ACTIVITIES, DATA_DIR_ENV, LAYERS, QueryConfig, SKILLS};

/// Query the Open-ICT competency framework
#[derive(Parser)]
#[command(name = "competenties")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory containing vaardigheden-nl.json and hboi-nl.json
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Engine configuration from the global options.
    pub fn query_config(&self) -> QueryConfig {
        match &self.data_dir {
            Some(dir) => QueryConfig::with_data_dir(dir),
            None => QueryConfig::default(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve student skills (vaardigheden)
    #[command(visible_alias = "vaardigheden", after_help = skills_help())]
    Skills {
        /// Filter by skill name
        #[arg(long)]
        skill: Option<String>,

        /// Filter by level (1-4)
        #[arg(long)]
        level: Option<String>,
    },

    /// Retrieve HBO-I professional tasks (beroepstaken)
    #[command(visible_alias = "hboi", after_help = tasks_help())]
    Tasks {
        /// Filter by architecture layer
        #[arg(long)]
        layer: Option<String>,

        /// Filter by activity
        #[arg(long)]
        activity: Option<String>,

        /// Filter by level (1-4)
        #[arg(long)]
        level: Option<String>,
    },
}

fn bullet_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn skills_help() -> String {
    format!(
        "Valid skills:\n{}\n\n\
         Examples:\n  \
         competenties skills\n  \
         competenties skills --skill \"Samenwerken\"\n  \
         competenties skills --skill \"Samenwerken\" --level 2\n  \
         competenties skills --level 3",
        bullet_list(SKILLS)
    )
}

fn tasks_help() -> String {
    format!(
        "Architecture layers:\n{}\n\n\
         Activities:\n{}\n\n\
         Examples:\n  \
         competenties tasks\n  \
         competenties tasks --layer \"Software\"\n  \
         competenties tasks --activity \"Ontwerpen\"\n  \
         competenties tasks --layer \"Software\" --activity \"Realiseren\"\n  \
         competenties tasks --layer \"Software\" --level 2\n  \
         competenties tasks --level 3",
        bullet_list(LAYERS),
        bullet_list(ACTIVITIES)
    )
}
