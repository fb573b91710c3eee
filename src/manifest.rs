//! Test manifest loading.
//!
//! The manifest is a JSON document mapping stage names to ordered arrays of
//! test cases. Stage order and intra-stage order both come straight from the
//! document and determine run order.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One differential test case, exactly as declared in the manifest.
///
/// All four paths must name distinct filesystem locations; the harness does
/// not validate this.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Reporting identifier, unique within a run.
    pub test_case_number: String,
    /// C source program to compile.
    pub input_file: PathBuf,
    /// Where jcc writes its generated assembly.
    pub output_file_jcc: PathBuf,
    /// Reference executable, built directly from the source.
    pub executable_gcc: PathBuf,
    /// Executable assembled from jcc's output.
    pub executable_jcc: PathBuf,
}

/// Stage name -> ordered test cases, in document order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    stages: IndexMap<String, Vec<TestCase>>,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid
    /// manifest document. There is no partial or defaulted parse.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| Error::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Iterate stages in document order.
    pub fn stages(&self) -> impl Iterator<Item = (&str, &[TestCase])> {
        self.stages
            .iter()
            .map(|(name, cases)| (name.as_str(), cases.as_slice()))
    }

    /// Number of stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Total number of test cases across all stages.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.stages.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "stage2": [
            {
                "testCaseNumber": "1",
                "inputFile": "tests/stage2/valid/return_2.c",
                "outputFileJcc": "out/return_2.s",
                "executableGcc": "out/return_2_gcc",
                "executableJcc": "out/return_2_jcc"
            },
            {
                "testCaseNumber": "2",
                "inputFile": "tests/stage2/valid/negate.c",
                "outputFileJcc": "out/negate.s",
                "executableGcc": "out/negate_gcc",
                "executableJcc": "out/negate_jcc"
            }
        ],
        "stage1": [
            {
                "testCaseNumber": "1",
                "inputFile": "tests/stage1/valid/return_0.c",
                "outputFileJcc": "out/return_0.s",
                "executableGcc": "out/return_0_gcc",
                "executableJcc": "out/return_0_jcc"
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let manifest: Manifest = serde_json::from_str(SAMPLE).expect("parse failed");
        assert_eq!(manifest.stage_count(), 2);
        assert_eq!(manifest.case_count(), 3);

        let (name, cases) = manifest.stages().next().expect("no stages");
        assert_eq!(name, "stage2");
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].test_case_number, "1");
        assert_eq!(cases[0].input_file, PathBuf::from("tests/stage2/valid/return_2.c"));
        assert_eq!(cases[1].executable_jcc, PathBuf::from("out/negate_jcc"));
    }

    #[test]
    fn test_document_order_preserved() {
        // "stage2" appears before "stage1" in the document and must stay first.
        let manifest: Manifest = serde_json::from_str(SAMPLE).expect("parse failed");
        let order: Vec<&str> = manifest.stages().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["stage2", "stage1"]);
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let broken = r#"{"stage1": [{"testCaseNumber": "1", "inputFile": "a.c"}]}"#;
        assert!(serde_json::from_str::<Manifest>(broken).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Manifest::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, Error::ManifestRead { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir failed");
        let path = dir.path().join("testdata.json");
        fs::write(&path, "not json").expect("write failed");
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestParse { .. }));
    }
}
