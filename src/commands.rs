//! Command implementation.
//!
//! The run outcome is mapped to a process exit code here, exactly once; no
//! other component terminates the process.

use jccdiff::{Manifest, Reporter, SuiteConfig, Tool, suite};
use tracing::info;

use crate::cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};

/// Run the full differential suite described by the manifest.
pub fn run_suite(cli: &Cli) -> i32 {
    let reporter = if cli.silent {
        Reporter::quiet()
    } else {
        Reporter::new()
    };

    let jcc: Tool = match cli.jcc.parse() {
        Ok(tool) => tool,
        Err(e) => {
            reporter.failure(&format!("invalid jcc command: {e}"));
            return EXIT_FAILURE;
        }
    };
    let cc: Tool = match cli.cc.parse() {
        Ok(tool) => tool,
        Err(e) => {
            reporter.failure(&format!("invalid cc command: {e}"));
            return EXIT_FAILURE;
        }
    };

    let manifest = match Manifest::load(&cli.manifest) {
        Ok(m) => m,
        Err(e) => {
            reporter.failure(&e.to_string());
            return EXIT_FAILURE;
        }
    };
    info!(
        manifest = %cli.manifest.display(),
        stages = manifest.stage_count(),
        cases = manifest.case_count(),
        "loaded manifest"
    );

    let config = SuiteConfig::default().with_jcc(jcc).with_cc(cc);
    match suite::run(&manifest, &config, &reporter) {
        Ok(summary) => {
            reporter.summary(&summary);
            EXIT_SUCCESS
        }
        Err(e) => {
            reporter.failure(&e.to_string());
            EXIT_FAILURE
        }
    }
}
