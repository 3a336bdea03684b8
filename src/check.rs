//! File version checking for parsed result documents
//!
//! The check is advisory: a missing or mismatched version prints a warning
//! and the caller carries on reading the document.

use std::fmt;
use std::io::{self, Write};

use serde_json::Value;
use tracing::{debug, warn};

use crate::version::file_version_string;

/// JSON pointer to the declared version string
const VERSION_POINTER: &str = "/meta/version/json/string";

/// Outcome of inspecting a document's declared file version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// Declared version matches the reader exactly
    Current,
    /// No version block; written before versioning was added
    Unversioned,
    /// Declared version differs from the reader's
    Mismatch { found: String },
}

impl VersionStatus {
    pub fn is_current(&self) -> bool {
        matches!(self, VersionStatus::Current)
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionStatus::Current => write!(f, "current ({})", file_version_string()),
            VersionStatus::Unversioned => write!(f, "unversioned"),
            VersionStatus::Mismatch { found } => write!(f, "mismatch ({})", found),
        }
    }
}

/// Classify the version declared at `meta.version.json.string`.
///
/// Any missing key (or a non-object node) on that path means the document
/// is unversioned. A declared value that is not a string is reported as a
/// mismatch using its JSON text.
pub fn inspect_version(root: &Value) -> VersionStatus {
    let Some(declared) = root.pointer(VERSION_POINTER) else {
        return VersionStatus::Unversioned;
    };

    let expected = file_version_string();
    match declared.as_str() {
        Some(found) if found == expected => VersionStatus::Current,
        Some(found) => VersionStatus::Mismatch {
            found: found.to_string(),
        },
        None => VersionStatus::Mismatch {
            found: declared.to_string(),
        },
    }
}

/// Write the version warning for `filename` (if any) to `out`.
///
/// Nothing is written for a current document.
pub fn write_version_warning<W: Write>(
    out: &mut W,
    filename: &str,
    root: &Value,
) -> io::Result<VersionStatus> {
    let status = inspect_version(root);
    let expected = file_version_string();

    match &status {
        VersionStatus::Current => {
            debug!(filename, version = %expected, "file version matches reader");
        }
        VersionStatus::Unversioned => {
            debug!(filename, "document has no version block");
            writeln!(out, "WARNING:")?;
            writeln!(out, "  {} is written in an older, unversioned format. ", filename)?;
            writeln!(out, "  It may not read correctly.")?;
            writeln!(out, "  Reader expects JSON file version {}.", expected)?;
        }
        VersionStatus::Mismatch { found } => {
            debug!(filename, found = %found, expected = %expected, "file version mismatch");
            writeln!(out, "WARNING:")?;
            writeln!(
                out,
                "  {} was written using a different NVBench JSON file version.",
                filename
            )?;
            writeln!(out, "  It may not read correctly.")?;
            writeln!(out, "  (file version: {} reader version: {})", found, expected)?;
        }
    }

    Ok(status)
}

/// Check a parsed document's file version, printing a warning to stdout on
/// absence or mismatch.
pub fn check_file_version(filename: &str, root: &Value) {
    let mut out = io::stdout().lock();
    if let Err(e) = write_version_warning(&mut out, filename, root) {
        warn!(filename, error = %e, "failed to write version warning");
    }
}
