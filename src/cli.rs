//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::Parser;

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "jccdiff")]
#[command(about = "Differential test harness for the jcc C compiler")]
#[command(version)]
pub struct Cli {
    /// Test manifest (stage name -> test cases, in document order)
    #[arg(long, default_value = "testdata.json")]
    pub manifest: PathBuf,

    /// Command for the compiler under test
    #[arg(long, default_value = "node ../index.js")]
    pub jcc: String,

    /// Command for the trusted reference toolchain
    #[arg(long, default_value = "gcc")]
    pub cc: String,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}
