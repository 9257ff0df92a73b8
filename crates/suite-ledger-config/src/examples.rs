// crates/suite-ledger-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and `config example`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The example spells out every default, so loading it yields the same
//! configuration as having no config file at all.

/// Returns a canonical example `suite-ledger.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[layout]
root = "test"
corpus = "node"
corpus_tests = "test"
manifest = "tests.json"
summary = "summary.json"

[scan]
extensions = ["js", "mjs", "cjs"]

[bootstrap]
enabled = true
command = ["git", "submodule", "update", "--init", "--recursive", "--progress", "--depth=1", "--checkout", "test/node"]
# working_dir = "."

[formatter]
command = ["bunx", "prettier", "--stdin", "--parser=babel"]

[[rewrites]]
from = "assert("
to = "assert.ok("

[runtime]
command = ["bun", "test"]
# working_dir = "test"

[report]
title = "Node.js Tests"
suite_label = "Node.js tests"
markdown_env = "GITHUB_STEP_SUMMARY"

[log]
format = "text"
"#,
    )
}
