//! Config defaults and loading tests for suite-ledger-config.
// crates/suite-ledger-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults and Loading Tests
// Description: Validate defaults, path resolution, and file loading.
// Purpose: Ensure an absent config reproduces the conventional layout.
// =============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use suite_ledger_config::ConfigError;
use suite_ledger_config::ConfigSource;
use suite_ledger_config::SuiteLedgerConfig;
use suite_ledger_config::config_toml_example;
use suite_ledger_core::LogFormat;
use suite_ledger_core::TextRewrite;
use tempfile::TempDir;

mod common;

type TestResult = Result<(), String>;

#[test]
fn empty_config_uses_node_layout() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    let layout = config.resolve_layout();
    let expected = [
        (&layout.test_root, "/work/test"),
        (&layout.corpus_root, "/work/test/node"),
        (&layout.scan_root, "/work/test/node/test"),
        (&layout.manifest_path, "/work/test/tests.json"),
        (&layout.summary_path, "/work/test/summary.json"),
    ];
    for (actual, wanted) in expected {
        if actual != Path::new(wanted) {
            return Err(format!("expected {wanted}, got {}", actual.display()));
        }
    }
    Ok(())
}

#[test]
fn defaults_name_the_node_toolchain() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.formatter.command != ["bunx", "prettier", "--stdin", "--parser=babel"] {
        return Err(format!("unexpected formatter {:?}", config.formatter.command));
    }
    if config.runtime.command != ["bun", "test"] {
        return Err(format!("unexpected runtime {:?}", config.runtime.command));
    }
    if config.rewrites != [TextRewrite::assert_ok()] {
        return Err("default rewrite should be assert( -> assert.ok(".to_string());
    }
    if config.bootstrap_command().is_none() {
        return Err("bootstrap should be enabled by default".to_string());
    }
    if config.log.format != LogFormat::Text {
        return Err("log format should default to text".to_string());
    }
    if config.runtime_working_dir() != Path::new("/work/test") {
        return Err("runtime should run from the test root".to_string());
    }
    Ok(())
}

#[test]
fn example_matches_defaults() -> TestResult {
    let example =
        common::config_from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    let defaults = common::minimal_config().map_err(|err| err.to_string())?;
    if example != defaults {
        return Err("config example drifted from defaults".to_string());
    }
    Ok(())
}

#[test]
fn sections_override_individually() -> TestResult {
    let config = common::config_from_toml(
        r#"
rewrites = []

[layout]
root = "suites/node"

[bootstrap]
enabled = false

[runtime]
command = ["node", "--test"]
working_dir = "."

[log]
format = "json"
"#,
    )
    .map_err(|err| err.to_string())?;
    if config.resolve_layout().corpus_root != Path::new("/work/suites/node/node") {
        return Err("layout.root override not applied".to_string());
    }
    if config.bootstrap_command().is_some() {
        return Err("bootstrap should be disabled".to_string());
    }
    if config.runtime_working_dir() != Path::new("/work/.") {
        return Err("runtime.working_dir override not applied".to_string());
    }
    if !config.rewrites.is_empty() || config.log.format != LogFormat::Json {
        return Err("rewrites or log overrides not applied".to_string());
    }
    Ok(())
}

#[test]
fn missing_default_file_yields_defaults() -> TestResult {
    let temp = TempDir::new().map_err(|err| err.to_string())?;
    let source = ConfigSource {
        path: temp.path().join("suite-ledger.toml"),
        required: false,
    };
    let config = SuiteLedgerConfig::load_from(&source).map_err(|err| err.to_string())?;
    if config.resolve_layout().test_root != temp.path().join("test") {
        return Err("defaults should resolve against the config directory".to_string());
    }
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() -> TestResult {
    let temp = TempDir::new().map_err(|err| err.to_string())?;
    let source = ConfigSource::required(&temp.path().join("absent.toml"));
    match SuiteLedgerConfig::load_from(&source) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {other:?}")),
    }
}

#[test]
fn explicit_file_resolves_paths_against_its_directory() -> TestResult {
    let temp = TempDir::new().map_err(|err| err.to_string())?;
    let dir = temp.path().join("ci");
    fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
    let path = dir.join("ledger.toml");
    fs::write(&path, "[layout]\nroot = \"node-suite\"\n").map_err(|err| err.to_string())?;

    let config = SuiteLedgerConfig::load(Some(path.as_path())).map_err(|err| err.to_string())?;
    let expected: PathBuf = dir.join("node-suite").join("summary.json");
    if config.resolve_layout().summary_path != expected {
        return Err(format!("unexpected summary path {:?}", config.resolve_layout().summary_path));
    }
    Ok(())
}

#[test]
fn oversized_file_is_rejected() -> TestResult {
    let temp = TempDir::new().map_err(|err| err.to_string())?;
    let path = temp.path().join("suite-ledger.toml");
    let padding = format!("# {}\n", "x".repeat(1024 * 1024));
    fs::write(&path, padding).map_err(|err| err.to_string())?;
    common::assert_invalid(SuiteLedgerConfig::load(Some(path.as_path())), "size limit")
}
