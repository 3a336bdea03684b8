//! NVBench JSON
//!
//! Reader-side file version checking for NVBench JSON result documents.
//!
//! Every result document declares the format version it was written with:
//!
//! ```text
//! {
//!   "meta": {
//!     "version": {
//!       "json": { "major": 1, "minor": 0, "patch": 0, "string": "1.0.0" }
//!     }
//!   },
//!   "benchmarks": [ ... ]
//! }
//! ```
//!
//! [`check_file_version`] compares that declaration against [`FILE_VERSION`]
//! and prints an advisory warning when it is absent or different. Reading
//! continues either way.

pub mod batch;
pub mod check;
pub mod config;
pub mod error;
pub mod loader;
pub mod version;

pub use batch::{check_paths, BatchOptions};
pub use check::{check_file_version, inspect_version, write_version_warning, VersionStatus};
pub use config::CheckerConfig;
pub use error::{Result, ResultError};
pub use loader::{collect_json_files, load_document};
pub use version::{file_version_string, stamp_version, version_metadata, FILE_VERSION};
