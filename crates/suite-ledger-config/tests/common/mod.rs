// crates/suite-ledger-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for suite-ledger-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::path::Path;

use suite_ledger_config::ConfigError;
use suite_ledger_config::SuiteLedgerConfig;

/// Parses and validates a TOML string rooted at `/work`.
pub fn config_from_toml(toml_str: &str) -> Result<SuiteLedgerConfig, ConfigError> {
    SuiteLedgerConfig::from_toml_str(toml_str, Path::new("/work"))
}

/// Returns a config with all defaults applied.
pub fn minimal_config() -> Result<SuiteLedgerConfig, ConfigError> {
    config_from_toml("")
}

/// Checks that `result` failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
