//! NVBench JSON file version
//!
//! Result documents carry their format version at `meta.version.json`:
//!
//! ```json
//! { "meta": { "version": { "json": {
//!     "major": 1, "minor": 0, "patch": 0, "string": "1.0.0"
//! } } } }
//! ```

use semver::Version;
use serde_json::{json, Map, Value};

/// The file version this reader understands
pub const FILE_VERSION: Version = Version::new(1, 0, 0);

/// Get the reader's file version string (e.g., "1.0.0")
pub fn file_version_string() -> String {
    FILE_VERSION.to_string()
}

/// Build the `meta.version.json` block describing [`FILE_VERSION`]
pub fn version_metadata() -> Value {
    json!({
        "major": FILE_VERSION.major,
        "minor": FILE_VERSION.minor,
        "patch": FILE_VERSION.patch,
        "string": file_version_string(),
    })
}

/// Write the current version block into `root` at `meta.version.json`.
///
/// Missing or non-object nodes along the path are replaced with objects;
/// sibling keys of existing objects are left alone.
pub fn stamp_version(root: &mut Value) {
    ensure_object(root);
    let meta = &mut root["meta"];
    ensure_object(meta);
    let version = &mut meta["version"];
    ensure_object(version);
    version["json"] = version_metadata();
}

fn ensure_object(node: &mut Value) {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
}
