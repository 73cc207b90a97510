//! competenties CLI - query the Open-ICT competency framework.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            eprintln!("Error: InvalidArguments: {}", first_line(&e));
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);
    let config = cli.query_config();

    let result = match cli.command {
        Commands::Skills { skill, level } => commands::skills::run(skill, level, config),

        Commands::Tasks {
            layer,
            activity,
            level,
        } => commands::tasks::run(layer, activity, level, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// The headline of a clap error, without its `error: ` prefix or usage block.
fn first_line(e: &clap::Error) -> String {
    if e.kind() == clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand {
        return "a subcommand is required (see --help)".to_string();
    }

    let rendered = e.render().to_string();
    rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "warn,competenties=debug",
        _ => "debug,competenties=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
