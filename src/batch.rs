//! Checking many result documents in one pass

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::check::write_version_warning;
use crate::config::CheckerConfig;
use crate::loader::{collect_json_files, load_document};

/// Options for a batch check
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// File extensions treated as result documents
    pub extensions: Vec<String>,
    /// Count unversioned or mismatched documents as failures
    pub fail_on_mismatch: bool,
    /// Skip the `ok:` line for current documents
    pub quiet: bool,
}

impl BatchOptions {
    pub fn from_config(config: &CheckerConfig) -> Self {
        Self {
            recursive: config.scan.recursive,
            extensions: config.scan.extensions.clone(),
            fail_on_mismatch: config.check.fail_on_mismatch,
            quiet: false,
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::from_config(&CheckerConfig::default())
    }
}

/// Check every document under `paths`.
///
/// Version warnings and `ok:` lines go to `out`; paths or files that cannot
/// be read are reported to `err` and skipped. Returns whether every input
/// loaded and, under `fail_on_mismatch`, every document was current.
pub fn check_paths<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    paths: &[PathBuf],
    options: &BatchOptions,
) -> io::Result<bool> {
    let mut all_ok = true;
    let mut checked = 0usize;

    for path in paths {
        let files = match collect_json_files(path, options.recursive, &options.extensions) {
            Ok(files) => files,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                all_ok = false;
                continue;
            }
        };

        for file in &files {
            checked += 1;
            if !check_one(out, err, file, options)? {
                all_ok = false;
            }
        }
    }

    if checked == 0 {
        warn!("no result documents found");
    }

    Ok(all_ok)
}

fn check_one<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    file: &Path,
    options: &BatchOptions,
) -> io::Result<bool> {
    let name = file.display().to_string();

    let root = match load_document(file) {
        Ok(root) => root,
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
            return Ok(false);
        }
    };

    let status = write_version_warning(out, &name, &root)?;
    if status.is_current() {
        if !options.quiet {
            writeln!(out, "ok: {}", name)?;
        }
        Ok(true)
    } else {
        Ok(!options.fail_on_mismatch)
    }
}
