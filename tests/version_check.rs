//! End-to-end checks over result documents written to disk.

use std::fs;
use std::path::Path;

use nvbench_json::{
    check_paths, collect_json_files, inspect_version, load_document, stamp_version,
    write_version_warning, BatchOptions, VersionStatus,
};
use serde_json::json;
use tempfile::TempDir;

fn write_json(path: &Path, value: &serde_json::Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

#[test]
fn test_directory_of_mixed_documents() {
    let dir = TempDir::new().unwrap();

    let mut current = json!({ "benchmarks": [{ "name": "copy" }] });
    stamp_version(&mut current);
    write_json(&dir.path().join("current.json"), &current);
    write_json(&dir.path().join("legacy.json"), &json!({ "benchmarks": [] }));
    write_json(
        &dir.path().join("newer.json"),
        &json!({ "meta": { "version": { "json": { "string": "2.0.0" } } } }),
    );

    let files = collect_json_files(dir.path(), false, &["json".to_string()]).unwrap();
    let statuses: Vec<_> = files
        .iter()
        .map(|f| inspect_version(&load_document(f).unwrap()))
        .collect();

    assert_eq!(
        statuses,
        vec![
            VersionStatus::Current,
            VersionStatus::Unversioned,
            VersionStatus::Mismatch { found: "2.0.0".to_string() },
        ]
    );
}

#[test]
fn test_warning_uses_display_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run 1.json");
    write_json(&path, &json!({}));

    let root = load_document(&path).unwrap();
    let name = path.display().to_string();
    let mut out = Vec::new();
    write_version_warning(&mut out, &name, &root).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        format!(
            concat!(
                "WARNING:\n",
                "  {} is written in an older, unversioned format. \n",
                "  It may not read correctly.\n",
                "  Reader expects JSON file version 1.0.0.\n",
            ),
            name
        )
    );
}

#[test]
fn test_stamped_document_survives_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stamped.json");

    let mut root = json!({ "meta": { "argv": ["bench"] } });
    stamp_version(&mut root);
    write_json(&path, &root);

    let mut out = Vec::new();
    let root = load_document(&path).unwrap();
    let status = write_version_warning(&mut out, "stamped.json", &root).unwrap();
    assert!(status.is_current());
    assert!(out.is_empty());
}

fn run_batch(paths: &[std::path::PathBuf], options: &BatchOptions) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let all_ok = check_paths(&mut out, &mut err, paths, options).unwrap();
    (
        all_ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn stamped() -> serde_json::Value {
    let mut root = json!({ "benchmarks": [] });
    stamp_version(&mut root);
    root
}

#[test]
fn test_batch_continues_past_missing_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist.json");
    let older = dir.path().join("older.json");
    write_json(
        &older,
        &json!({ "meta": { "version": { "json": { "string": "0.9.0" } } } }),
    );

    let (all_ok, out, err) = run_batch(&[missing, older.clone()], &BatchOptions::default());

    assert!(!all_ok);
    assert!(err.contains("Path not found"));
    assert!(out.contains(&format!("{} was written using a different", older.display())));
    assert!(out.contains("(file version: 0.9.0 reader version: 1.0.0)"));
}

#[test]
fn test_batch_continues_past_bad_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a_broken.json"), "{ not json").unwrap();
    write_json(&dir.path().join("b_good.json"), &stamped());

    let (all_ok, out, err) = run_batch(&[dir.path().to_path_buf()], &BatchOptions::default());

    assert!(!all_ok);
    assert!(err.contains("a_broken.json"));
    assert!(out.contains(&format!("ok: {}", dir.path().join("b_good.json").display())));
}

#[test]
fn test_batch_fail_on_mismatch() {
    let dir = TempDir::new().unwrap();
    write_json(&dir.path().join("current.json"), &stamped());
    write_json(&dir.path().join("legacy.json"), &json!({}));
    let paths = [dir.path().to_path_buf()];

    let lenient = BatchOptions::default();
    let (all_ok, out, err) = run_batch(&paths, &lenient);
    assert!(all_ok);
    assert!(out.contains("unversioned format"));
    assert!(err.is_empty());

    let strict = BatchOptions {
        fail_on_mismatch: true,
        ..BatchOptions::default()
    };
    let (all_ok, _, _) = run_batch(&paths, &strict);
    assert!(!all_ok);
}

#[test]
fn test_batch_fail_on_mismatch_passes_current_documents() {
    let dir = TempDir::new().unwrap();
    write_json(&dir.path().join("current.json"), &stamped());

    let strict = BatchOptions {
        fail_on_mismatch: true,
        ..BatchOptions::default()
    };
    let (all_ok, out, _) = run_batch(&[dir.path().to_path_buf()], &strict);
    assert!(all_ok);
    assert!(out.starts_with("ok: "));
}

#[test]
fn test_batch_quiet_suppresses_ok_lines() {
    let dir = TempDir::new().unwrap();
    write_json(&dir.path().join("current.json"), &stamped());
    write_json(&dir.path().join("legacy.json"), &json!({}));

    let quiet = BatchOptions {
        quiet: true,
        ..BatchOptions::default()
    };
    let (all_ok, out, _) = run_batch(&[dir.path().to_path_buf()], &quiet);
    assert!(all_ok);
    assert!(!out.contains("ok:"));
    assert!(out.starts_with("WARNING:\n"));
}
