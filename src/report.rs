//! Styled progress output.
//!
//! Purely observational: suppressing this output never changes run
//! semantics or the process exit code.

use console::style;

use crate::suite::RunSummary;
use crate::toolchain::Step;

/// Outcome of a test case, for display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    /// Styled marker for this outcome.
    #[must_use]
    pub fn marker(self) -> String {
        match self {
            Self::Passed => style("✓").green().bold().to_string(),
            Self::Failed => style("✗").red().bold().to_string(),
        }
    }
}

/// Progress reporter for a differential run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    /// Reporter that prints progress to stderr.
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Reporter that suppresses progress; failures are still printed.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { quiet: true }
    }

    /// A stage is starting.
    pub fn stage_start(&self, stage: &str) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{}",
            style(format!("Running suite for stage: {stage}...")).blue().bold()
        );
    }

    /// A stage finished with every test case passing.
    pub fn stage_finish(&self, stage: &str) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{}",
            style(format!("Test suite for stage: {stage} finished...")).blue().bold()
        );
    }

    /// A pipeline step is starting for a test case.
    pub fn step_start(&self, step: Step, case: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{} {step} for testcase: {case}", style("→").cyan());
    }

    /// A pipeline step finished for a test case.
    pub fn step_done(&self, step: Step, case: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{} {step} finished for testcase: {case}", style("→").cyan());
    }

    /// A test case passed its exit-code comparison.
    pub fn case_passed(&self, case: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{} Test case passed: #{case}", Outcome::Passed.marker());
    }

    /// The run failed; always printed, even in quiet mode.
    pub fn failure(&self, message: &str) {
        eprintln!("{} {message}", Outcome::Failed.marker());
    }

    /// Final totals for a fully passing run.
    pub fn summary(&self, summary: &RunSummary) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} {} test cases passed across {} stages",
            Outcome::Passed.marker(),
            summary.passed,
            summary.stages
        );
    }
}
