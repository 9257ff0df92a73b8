// crates/suite-ledger-process/src/runtime.rs
// ============================================================================
// Module: Command Runtime
// Description: Test runtime that executes one test file per process.
// Purpose: Run materialized tests with live output.
// Dependencies: suite-ledger-core
// ============================================================================

//! ## Overview
//! The runtime appends the test path to its command line and waits for the
//! child. Stdio is inherited so the test output streams to the console. The
//! path is made absolute first, since the runtime may run from a different
//! working directory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::process::Stdio;

use suite_ledger_core::RuntimeError;
use suite_ledger_core::RuntimeExit;
use suite_ledger_core::TestRuntime;

use crate::command::CommandLine;

// ============================================================================
// SECTION: Runtime
// ============================================================================

/// Test runtime backed by a subprocess per test.
#[derive(Debug, Clone)]
pub struct CommandRuntime {
    /// Runtime command line; the test path is appended.
    command: CommandLine,
}

impl CommandRuntime {
    /// Creates a runtime for `command`.
    #[must_use]
    pub const fn new(command: CommandLine) -> Self {
        Self {
            command,
        }
    }
}

impl TestRuntime for CommandRuntime {
    fn run_test(&self, path: &Path) -> Result<RuntimeExit, RuntimeError> {
        let path = std::path::absolute(path).map_err(|err| RuntimeError::Spawn(err.to_string()))?;
        let status = self
            .command
            .command()
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| RuntimeError::Spawn(format!("{}: {err}", self.command.program())))?;
        Ok(RuntimeExit {
            code: status.code(),
        })
    }
}
