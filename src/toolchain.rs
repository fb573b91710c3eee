//! External toolchain invocation.
//!
//! Both the compiler under test and the trusted reference toolchain share one
//! invocation contract: `<command> <input> -o <output>`, blocking wait, exit
//! status 0 means success. The reference-build-from-source and
//! build-from-assembly steps are the same capability with different inputs.

use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// An external tool invoked as `<command> <input> -o <output>`.
///
/// Accepts any command string; multi-word commands keep their leading
/// arguments (e.g. "node ../index.js").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tool {
    program: String,
    args: Vec<String>,
}

impl Tool {
    /// Create a tool from a command string, split on whitespace.
    pub fn new(command: impl Into<String>) -> Self {
        let command = command.into();
        let mut parts = command.split_whitespace().map(str::to_owned);
        let program = parts.next().unwrap_or_default();
        let args = parts.collect();
        Self { program, args }
    }

    /// The default reference toolchain.
    #[must_use]
    pub fn gcc() -> Self {
        Self::new("gcc")
    }

    /// Run `<command> <input> -o <output>`, waiting for completion.
    ///
    /// The tool's only observable product is the file it writes at `output`;
    /// nothing beyond the exit status is consumed here.
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned or exits non-zero,
    /// tagged with the pipeline step and the test-case number.
    pub fn produce(&self, step: Step, case: &str, input: &Path, output: &Path) -> Result<()> {
        debug!(tool = %self, input = %input.display(), output = %output.display(), "invoking");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(input)
            .arg("-o")
            .arg(output)
            .status()
            .map_err(|source| Error::Spawn {
                tool: self.to_string(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::Toolchain {
                step,
                case: case.to_string(),
            })
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.split_whitespace().next().is_none() {
            return Err("tool command cannot be empty".to_string());
        }
        Ok(Self::new(s))
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Pipeline step, used for reporting and error tagging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// jcc compiles C source to assembly.
    Assemble,
    /// The reference toolchain builds an executable straight from source.
    ReferenceBuild,
    /// The reference toolchain builds an executable from jcc's assembly.
    AssemblyBuild,
}

impl Step {
    /// Get string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assemble => "compiling to assembly",
            Self::ReferenceBuild => "compiling to executable directly",
            Self::AssemblyBuild => "compiling to executable from generated assembly",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
