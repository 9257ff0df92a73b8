//! Config validation tests for suite-ledger-config.
// crates/suite-ledger-config/tests/config_validation.rs
// =============================================================================
// Module: Config Validation Tests
// Description: Reject malformed commands, paths, extensions, and labels.
// Purpose: Ensure invalid configuration fails closed before any work starts.
// =============================================================================

mod common;

type TestResult = Result<(), String>;

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    common::assert_invalid(common::config_from_toml("[layout]\ngroups = \"x\"\n"), "unknown field")?;
    common::assert_invalid(common::config_from_toml("verbose = true\n"), "unknown field")
}

#[test]
fn commands_must_name_a_program() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[formatter]\ncommand = []\n"),
        "formatter.command must name a program",
    )?;
    common::assert_invalid(
        common::config_from_toml("[runtime]\ncommand = [\" \"]\n"),
        "runtime.command program must be non-empty",
    )?;
    common::assert_invalid(
        common::config_from_toml("[bootstrap]\ncommand = []\n"),
        "bootstrap.command must name a program",
    )
}

#[test]
fn disabled_bootstrap_may_omit_command() -> TestResult {
    common::config_from_toml("[bootstrap]\nenabled = false\ncommand = []\n")
        .map(|_| ())
        .map_err(|err| err.to_string())
}

#[test]
fn corpus_paths_must_stay_nested() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[layout]\ncorpus = \"../node\"\n"),
        "layout.corpus must be a relative path",
    )?;
    common::assert_invalid(
        common::config_from_toml("[layout]\ncorpus_tests = \"/abs\"\n"),
        "layout.corpus_tests must be a relative path",
    )?;
    common::assert_invalid(
        common::config_from_toml("[layout]\nsummary = \"  \"\n"),
        "layout.summary must be non-empty",
    )
}

#[test]
fn extensions_must_be_bare() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[scan]\nextensions = []\n"),
        "scan.extensions must be non-empty",
    )?;
    common::assert_invalid(
        common::config_from_toml("[scan]\nextensions = [\".js\"]\n"),
        "must be a bare extension",
    )
}

#[test]
fn rewrites_need_a_search_string() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[[rewrites]]\nfrom = \"\"\nto = \"x\"\n"),
        "rewrites[0].from must be non-empty",
    )
}

#[test]
fn markdown_env_must_be_a_variable_name() -> TestResult {
    common::assert_invalid(
        common::config_from_toml("[report]\nmarkdown_env = \"STEP SUMMARY\"\n"),
        "report.markdown_env",
    )?;
    common::assert_invalid(
        common::config_from_toml("[report]\ntitle = \"\"\n"),
        "report.title must be non-empty",
    )
}

#[test]
fn log_format_is_closed() -> TestResult {
    common::assert_invalid(common::config_from_toml("[log]\nformat = \"xml\"\n"), "unknown variant")
}

#[test]
fn validate_checks_a_shared_config() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.runtime.command.clear();
    let shared = &config;
    common::assert_invalid(shared.validate(), "runtime.command must name a program")?;
    if shared.base_dir != std::path::Path::new("/work") {
        return Err(format!("base_dir changed: {}", shared.base_dir.display()));
    }
    Ok(())
}
