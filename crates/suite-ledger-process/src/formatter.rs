// crates/suite-ledger-process/src/formatter.rs
// ============================================================================
// Module: Command Formatter
// Description: Source formatter reached over stdin/stdout.
// Purpose: Pipe test sources through an external code formatter.
// Dependencies: suite-ledger-core
// ============================================================================

//! ## Overview
//! The formatter receives the full source on stdin and must print the
//! formatted source on stdout. A non-zero exit is a failure and carries the
//! formatter's stderr. Stdin is fed from a scoped thread so a formatter that
//! streams output before consuming all input cannot deadlock the pipe.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::Stdio;
use std::thread;

use suite_ledger_core::FormatError;
use suite_ledger_core::Formatter;

use crate::command::CommandLine;

// ============================================================================
// SECTION: Formatter
// ============================================================================

/// Formatter backed by a subprocess.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    /// Formatter command line.
    command: CommandLine,
}

impl CommandFormatter {
    /// Creates a formatter for `command`.
    #[must_use]
    pub const fn new(command: CommandLine) -> Self {
        Self {
            command,
        }
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = self
            .command
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| FormatError::Spawn(format!("{}: {err}", self.command.program())))?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| FormatError::Spawn("formatter stdin unavailable".to_string()))?;

        let (output, fed) = thread::scope(|scope| {
            let feeder = scope.spawn(move || {
                let written = stdin.write_all(source.as_bytes());
                drop(stdin);
                written
            });
            (child.wait_with_output(), feeder.join())
        });
        let output = output.map_err(|err| FormatError::Spawn(err.to_string()))?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if let Ok(Err(err)) = fed {
            return Err(FormatError::Spawn(format!("failed to feed formatter stdin: {err}")));
        }
        String::from_utf8(output.stdout).map_err(|_| FormatError::InvalidOutput)
    }
}
