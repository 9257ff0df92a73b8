// crates/suite-ledger-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and entry-point helpers.
// Purpose: Pin the command surface and locale resolution.
// Dependencies: suite-ledger-cli main helpers
// ============================================================================

//! ## Overview
//! Parses representative command lines with clap and exercises the helpers
//! that do not touch the filesystem.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use clap::CommandFactory;
use clap::Parser;

use super::Cli;
use super::Commands;
use super::ConfigCommand;
use super::LangArg;
use super::Locale;
use super::command_line;
use super::resolve_locale;

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn run_accepts_bail_and_skip() {
    let cli = Cli::try_parse_from(["suite-ledger", "run", "--bail", "--skip=25"]).unwrap();
    let Some(Commands::Run(run)) = cli.command else {
        panic!("expected run command");
    };
    assert!(run.bail);
    assert_eq!(run.skip, 25);
    assert!(run.config.is_none());
}

#[test]
fn run_defaults_to_no_bail_and_no_skip() {
    let cli = Cli::try_parse_from(["suite-ledger", "run"]).unwrap();
    let Some(Commands::Run(run)) = cli.command else {
        panic!("expected run command");
    };
    assert!(!run.bail);
    assert_eq!(run.skip, 0);
}

#[test]
fn negative_skip_is_rejected() {
    assert!(Cli::try_parse_from(["suite-ledger", "run", "--skip=-1"]).is_err());
}

#[test]
fn import_accepts_config_path() {
    let cli =
        Cli::try_parse_from(["suite-ledger", "import", "--config", "ci/ledger.toml"]).unwrap();
    let Some(Commands::Import(import)) = cli.command else {
        panic!("expected import command");
    };
    assert_eq!(import.config.as_deref(), Some(Path::new("ci/ledger.toml")));
}

#[test]
fn config_example_parses() {
    let cli = Cli::try_parse_from(["suite-ledger", "config", "example"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommand::Example,
        })
    ));
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

#[test]
fn flag_locale_overrides_environment() {
    let locale = resolve_locale(Some(LangArg::Ca), Some("en")).unwrap();
    assert_eq!(locale, Locale::Ca);
}

#[test]
fn environment_locale_tolerates_region_tags() {
    assert_eq!(resolve_locale(None, Some("ca_ES.UTF-8")).unwrap(), Locale::Ca);
    assert_eq!(resolve_locale(None, None).unwrap(), Locale::En);
}

#[test]
fn unknown_environment_locale_is_rejected() {
    let err = resolve_locale(None, Some("xx")).unwrap_err();
    assert!(err.to_string().contains("SUITE_LEDGER_LANG"));
}

#[test]
fn empty_command_is_reported_with_its_field() {
    let err = command_line("runtime.command", &[]).unwrap_err();
    assert!(err.to_string().contains("runtime.command"));
}
