//! Stage orchestration.
//!
//! Drives every stage and test case in manifest order through the pipeline:
//! compile to assembly with jcc, build the reference executable, build an
//! executable from the generated assembly, then compare exit codes. The
//! first failing step aborts the entire run; no result aggregation.
//!
//! Execution is single-threaded and fully synchronous. There is no timeout:
//! a hung tool or test program blocks the run indefinitely.

use tracing::info;

use crate::error::Result;
use crate::manifest::{Manifest, TestCase};
use crate::oracle;
use crate::report::Reporter;
use crate::toolchain::{Step, Tool};

/// Configuration for a differential run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Compiler under test.
    pub jcc: Tool,
    /// Trusted reference toolchain, used both as oracle and as assembler.
    pub cc: Tool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            jcc: Tool::new("node ../index.js"),
            cc: Tool::gcc(),
        }
    }
}

impl SuiteConfig {
    /// Set the compiler under test.
    #[must_use]
    pub fn with_jcc(mut self, jcc: Tool) -> Self {
        self.jcc = jcc;
        self
    }

    /// Set the reference toolchain.
    #[must_use]
    pub fn with_cc(mut self, cc: Tool) -> Self {
        self.cc = cc;
        self
    }
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Stages fully executed.
    pub stages: usize,
    /// Test cases passed.
    pub passed: usize,
}

/// Run one test case through the full pipeline.
fn run_case(config: &SuiteConfig, reporter: &Reporter, case: &TestCase) -> Result<()> {
    let number = case.test_case_number.as_str();

    reporter.step_start(Step::Assemble, number);
    config
        .jcc
        .produce(Step::Assemble, number, &case.input_file, &case.output_file_jcc)?;
    reporter.step_done(Step::Assemble, number);

    config.cc.produce(
        Step::ReferenceBuild,
        number,
        &case.input_file,
        &case.executable_gcc,
    )?;
    config.cc.produce(
        Step::AssemblyBuild,
        number,
        &case.output_file_jcc,
        &case.executable_jcc,
    )?;

    oracle::compare(number, &case.executable_jcc, &case.executable_gcc)?;
    reporter.case_passed(number);
    Ok(())
}

/// Run every stage and test case in manifest order.
///
/// # Errors
/// Propagates the first toolchain failure or oracle mismatch; nothing after
/// the failing step executes.
pub fn run(manifest: &Manifest, config: &SuiteConfig, reporter: &Reporter) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for (stage, cases) in manifest.stages() {
        info!(stage, cases = cases.len(), "running stage");
        reporter.stage_start(stage);
        for case in cases {
            run_case(config, reporter, case)?;
            summary.passed += 1;
        }
        reporter.stage_finish(stage);
        summary.stages += 1;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuiteConfig::default();
        assert_eq!(config.jcc.to_string(), "node ../index.js");
        assert_eq!(config.cc, Tool::gcc());
    }

    #[test]
    fn test_config_builders() {
        let config = SuiteConfig::default()
            .with_jcc(Tool::new("jcc"))
            .with_cc(Tool::new("gcc-13"));
        assert_eq!(config.jcc.to_string(), "jcc");
        assert_eq!(config.cc.to_string(), "gcc-13");
    }

    #[test]
    fn test_empty_manifest_is_a_passing_run() {
        let manifest: Manifest = serde_json::from_str("{}").expect("parse failed");
        let summary = run(&manifest, &SuiteConfig::default(), &Reporter::quiet())
            .expect("empty run must pass");
        assert_eq!(summary, RunSummary::default());
    }
}
