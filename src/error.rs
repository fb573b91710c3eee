use std::path::PathBuf;

use thiserror::Error;

use crate::toolchain::Step;

/// Harness errors.
///
/// Every variant is fatal: the first one produced aborts the whole run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },
    #[error("{step} failed for testcase: {case}")]
    Toolchain { step: Step, case: String },
    #[error(
        "test case failed: #{case} (jcc build exited with {jcc}, gcc build exited with {gcc})"
    )]
    Mismatch { case: String, jcc: i32, gcc: i32 },
    #[error("testcase {case}: {path} terminated by signal")]
    Signalled { case: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
