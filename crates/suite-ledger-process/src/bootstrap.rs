// crates/suite-ledger-process/src/bootstrap.rs
// ============================================================================
// Module: Command Bootstrap
// Description: Corpus checkout through an external fetch command.
// Purpose: Make sure the external corpus exists before the import scans it.
// Dependencies: suite-ledger-core
// ============================================================================

//! ## Overview
//! When the corpus root already exists the bootstrap does nothing. Otherwise
//! it runs the configured fetch command (typically a shallow submodule
//! update) with inherited stdio and re-checks the corpus root afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::process::Stdio;

use suite_ledger_core::BootstrapError;
use suite_ledger_core::BootstrapOutcome;
use suite_ledger_core::CorpusBootstrap;

use crate::command::CommandLine;

// ============================================================================
// SECTION: Bootstrap
// ============================================================================

/// Corpus bootstrap backed by an optional fetch command.
#[derive(Debug, Clone, Default)]
pub struct CommandBootstrap {
    /// Fetch command; `None` means the corpus must already exist.
    command: Option<CommandLine>,
}

impl CommandBootstrap {
    /// Creates a bootstrap that runs `command` when the corpus is missing.
    #[must_use]
    pub const fn new(command: Option<CommandLine>) -> Self {
        Self {
            command,
        }
    }
}

impl CorpusBootstrap for CommandBootstrap {
    fn ensure(&self, corpus_root: &Path) -> Result<BootstrapOutcome, BootstrapError> {
        let display = corpus_root.display().to_string();
        if corpus_root.is_dir() {
            return Ok(BootstrapOutcome::AlreadyPresent);
        }
        let Some(command) = &self.command else {
            return Err(BootstrapError::NotConfigured(display));
        };

        let status = command
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| BootstrapError::Spawn(format!("{command}: {err}")))?;
        if !status.success() {
            return Err(BootstrapError::Failed(format!("{command}: {status}")));
        }
        if !corpus_root.is_dir() {
            return Err(BootstrapError::StillMissing(display));
        }
        Ok(BootstrapOutcome::Fetched)
    }
}
