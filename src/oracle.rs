//! Differential execution and exit-code comparison.
//!
//! The two builds of a test case are run with no arguments and judged solely
//! by exit-code equality. No stdout/stderr comparison, no timing.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Run an executable with no arguments and return its exit code.
///
/// A signal-terminated process has no exit code and is reported as a failure
/// for the given case rather than fed into the comparison.
fn exit_code(case: &str, path: &Path) -> Result<i32> {
    let status = Command::new(path).status().map_err(|source| Error::Spawn {
        tool: path.display().to_string(),
        source,
    })?;
    status.code().ok_or_else(|| Error::Signalled {
        case: case.to_string(),
        path: path.to_path_buf(),
    })
}

/// Execute both builds of a test case and compare their exit codes.
///
/// # Errors
/// Returns `Error::Mismatch` with both codes if they differ, or a spawn or
/// signal error if either executable fails to run to completion.
pub fn compare(case: &str, jcc_exe: &Path, gcc_exe: &Path) -> Result<()> {
    let jcc = exit_code(case, jcc_exe)?;
    let gcc = exit_code(case, gcc_exe)?;
    debug!(case, jcc, gcc, "exit codes");
    if jcc == gcc {
        Ok(())
    } else {
        Err(Error::Mismatch {
            case: case.to_string(),
            jcc,
            gcc,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use super::*;

    fn script(dir: &Path, name: &str, code: i32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\nexit {code}\n")).expect("write failed");
        let mut perms = fs::metadata(&path).expect("stat failed").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod failed");
        path
    }

    #[test]
    fn test_equal_exit_codes_pass() {
        let dir = tempfile::tempdir().expect("temp dir failed");
        let a = script(dir.path(), "a", 0);
        let b = script(dir.path(), "b", 0);
        compare("1", &a, &b).expect("equal codes must pass");

        // Equality is what matters, not success of the programs themselves
        let c = script(dir.path(), "c", 42);
        let d = script(dir.path(), "d", 42);
        compare("2", &c, &d).expect("equal non-zero codes must pass");
    }

    #[test]
    fn test_unequal_exit_codes_fail() {
        let dir = tempfile::tempdir().expect("temp dir failed");
        let a = script(dir.path(), "a", 1);
        let b = script(dir.path(), "b", 0);
        let err = compare("3", &a, &b).unwrap_err();
        match err {
            Error::Mismatch { case, jcc, gcc } => {
                assert_eq!(case, "3");
                assert_eq!(jcc, 1);
                assert_eq!(gcc, 0);
            }
            other => panic!("expected mismatch, got {other}"),
        }
    }

    #[test]
    fn test_missing_executable() {
        let dir = tempfile::tempdir().expect("temp dir failed");
        let a = script(dir.path(), "a", 0);
        let missing = dir.path().join("missing");
        assert!(matches!(
            compare("4", &missing, &a).unwrap_err(),
            Error::Spawn { .. }
        ));
    }
}
