//! jccdiff CLI - differential test harness for the jcc C compiler.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "jccdiff=debug"
    } else if cli.silent {
        "jccdiff=error"
    } else {
        "jccdiff=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .init();

    std::process::exit(commands::run_suite(&cli));
}
