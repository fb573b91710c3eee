//! jccdiff - differential test harness for the jcc C compiler.
//!
//! Each test case is compiled twice: jcc turns the source into assembly which
//! the reference toolchain assembles into an executable, and the reference
//! toolchain also builds an independent executable straight from the source.
//! Both are run with no arguments and must exit with identical codes.
//!
//! # Example
//!
//! ```ignore
//! use jccdiff::{Manifest, Reporter, SuiteConfig, suite};
//!
//! let manifest = Manifest::load("testdata.json".as_ref())?;
//! let summary = suite::run(&manifest, &SuiteConfig::default(), &Reporter::new())?;
//! ```

pub mod error;
pub mod manifest;
pub mod oracle;
pub mod report;
pub mod suite;
pub mod toolchain;

pub use error::{Error, Result};
pub use manifest::{Manifest, TestCase};
pub use report::{Outcome, Reporter};
pub use suite::{RunSummary, SuiteConfig};
pub use toolchain::{Step, Tool};
