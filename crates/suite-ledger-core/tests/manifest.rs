// crates/suite-ledger-core/tests/manifest.rs
// ============================================================================
// Module: Manifest Tests
// Description: Parsing, validation, and group planning for tests.json.
// Purpose: Ensure malformed manifests fail closed and groups plan once.
// Dependencies: suite-ledger-core, tempfile
// ============================================================================
//! ## Overview
//! Covers the on-disk manifest shape and the derived rule and plan views.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;

use suite_ledger_core::ManifestError;
use suite_ledger_core::SkipRule;
use suite_ledger_core::TestManifest;
use tempfile::TempDir;

type TestResult = Result<(), String>;

const MANIFEST: &str = r#"[
  { "group": "fs", "prefix": "test/parallel/test-fs-",
    "ignoredTests": ["test-fs-watch.js"],
    "skippedTests": [{ "test": "stream.js" }] },
  { "group": "timers", "prefix": "test/pummel/test-timers" },
  { "group": "fs", "prefix": "test/sequential/test-fs-",
    "skippedTests": [{ "test": "stream.js" }, { "test": "slow.js" }] }
]"#;

#[test]
fn parses_camel_case_records_in_order() -> TestResult {
    let manifest = TestManifest::from_json_str(MANIFEST).map_err(|err| err.to_string())?;
    let rules = manifest.group_rules();
    if rules.len() != 3 {
        return Err(format!("expected 3 rules, got {}", rules.len()));
    }
    if !rules[0].ignores("test-fs-watch.js") {
        return Err("ignoredTests not carried into the rule".to_string());
    }
    if rules[1].prefix != "test/pummel/test-timers" {
        return Err(format!("unexpected prefix {}", rules[1].prefix));
    }
    Ok(())
}

#[test]
fn duplicate_groups_plan_once_with_merged_skip_rules() {
    let manifest = TestManifest::from_json_str(MANIFEST).unwrap();
    let plans = manifest.group_plans();

    let names: Vec<&str> = plans.iter().map(|plan| plan.group.as_str()).collect();
    assert_eq!(names, ["fs", "timers"]);
    assert_eq!(plans[0].skipped_tests, [SkipRule::new("stream.js"), SkipRule::new("slow.js")]);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TestManifest::from_json_str(r#"[{ "group": "fs", "prefix": "x", "tags": [] }]"#)
        .unwrap_err();
    assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn group_must_be_a_single_directory_name() {
    for group in ["", "..", "a/b", "  "] {
        let input = format!(r#"[{{ "group": "{group}", "prefix": "test/" }}]"#);
        let err = TestManifest::from_json_str(&input).unwrap_err();
        assert!(matches!(err, ManifestError::Invalid(_)), "group {group:?} accepted");
    }
}

#[test]
fn empty_prefix_and_empty_entries_are_rejected() {
    let cases = [
        r#"[{ "group": "fs", "prefix": "" }]"#,
        r#"[{ "group": "fs", "prefix": "t", "ignoredTests": [""] }]"#,
        r#"[{ "group": "fs", "prefix": "t", "skippedTests": [{ "test": "" }] }]"#,
    ];
    for input in cases {
        let err = TestManifest::from_json_str(input).unwrap_err();
        assert!(matches!(err, ManifestError::Invalid(_)), "accepted {input}");
    }
}

#[test]
fn load_reads_manifest_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tests.json");
    fs::write(&path, MANIFEST).unwrap();

    let manifest = TestManifest::load(&path).unwrap();
    assert_eq!(manifest.records().len(), 3);
}

#[test]
fn load_reports_missing_manifest_as_io() {
    let temp = TempDir::new().unwrap();
    let err = TestManifest::load(&temp.path().join("tests.json")).unwrap_err();
    assert!(matches!(err, ManifestError::Io(_)));
}
