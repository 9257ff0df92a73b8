// crates/suite-ledger-process/src/command.rs
// ============================================================================
// Module: Command Lines
// Description: Program plus fixed arguments for an external tool.
// Purpose: Build std::process::Command values from configured argv lists.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A command line is parsed from a non-empty argv list. The first element is
//! the program; the rest are passed before any per-call arguments.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Command line construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandLineError {
    /// The argv list was empty.
    #[error("command must name a program")]
    Empty,
    /// The program was blank.
    #[error("command program must be non-empty")]
    BlankProgram,
}

// ============================================================================
// SECTION: Command Line
// ============================================================================

/// External program with fixed leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program to execute.
    program: String,
    /// Arguments passed before per-call arguments.
    args: Vec<String>,
    /// Working directory, when not inherited.
    working_dir: Option<PathBuf>,
}

impl CommandLine {
    /// Parses an argv list.
    ///
    /// # Errors
    ///
    /// Returns [`CommandLineError`] when the list or its program is empty.
    pub fn from_argv(argv: &[String]) -> Result<Self, CommandLineError> {
        let (program, args) = argv.split_first().ok_or(CommandLineError::Empty)?;
        if program.trim().is_empty() {
            return Err(CommandLineError::BlankProgram);
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            working_dir: None,
        })
    }

    /// Runs the command from `dir`.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Returns the program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds a [`Command`] with the fixed arguments applied.
    pub(crate) fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
