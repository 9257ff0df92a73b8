// crates/suite-ledger-core/src/interfaces/mod.rs
// ============================================================================
// Module: Suite Ledger Interfaces
// Description: Narrow service contracts for external collaborators.
// Purpose: Decouple the pipeline from the formatter, runtime, and checkout.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The pipeline never spawns processes directly. Formatting, test execution,
//! corpus bootstrap, and progress logging are reached through the traits in
//! this module so each can be replaced by a fake in tests. All calls are
//! synchronous and blocking; none carries a timeout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Formatter
// ============================================================================

/// Source formatter errors. Any formatter error aborts the import run.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter could not be started or fed.
    #[error("formatter spawn failed: {0}")]
    Spawn(String),
    /// The formatter exited unsuccessfully.
    #[error("formatter exited with {status}: {stderr}")]
    Failed {
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },
    /// The formatter produced output that is not UTF-8.
    #[error("formatter output is not utf-8")]
    InvalidOutput,
}

/// Source-text formatter with a fixed language profile.
pub trait Formatter {
    /// Formats `source` and returns the normalized text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when the formatter cannot run or rejects the input.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

// ============================================================================
// SECTION: Test Runtime
// ============================================================================

/// Exit information from one test-runtime invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeExit {
    /// Process exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl RuntimeExit {
    /// Returns an exit with the given code.
    #[must_use]
    pub const fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
        }
    }

    /// Returns true for a zero exit code.
    #[must_use]
    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Test runtime errors (spawn failures). Callers fold these into `fail`.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The runtime could not be started.
    #[error("test runtime spawn failed: {0}")]
    Spawn(String),
}

/// External runtime that executes a single test file.
pub trait TestRuntime {
    /// Runs the test at `path` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`] when the runtime cannot be started.
    fn run_test(&self, path: &Path) -> Result<RuntimeExit, RuntimeError>;
}

// ============================================================================
// SECTION: Corpus Bootstrap
// ============================================================================

/// Result of a bootstrap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// The corpus was already present; nothing ran.
    AlreadyPresent,
    /// The corpus was fetched.
    Fetched,
}

/// Corpus bootstrap errors. Always fatal; never retried.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The corpus is missing and no bootstrap is configured.
    #[error("corpus root {0} is missing and no bootstrap command is configured")]
    NotConfigured(String),
    /// The bootstrap command could not be started.
    #[error("corpus bootstrap spawn failed: {0}")]
    Spawn(String),
    /// The bootstrap command exited unsuccessfully.
    #[error("corpus bootstrap exited with {0}")]
    Failed(String),
    /// The bootstrap command succeeded but the corpus is still missing.
    #[error("corpus root {0} is still missing after bootstrap")]
    StillMissing(String),
}

/// Idempotent corpus checkout.
pub trait CorpusBootstrap {
    /// Ensures the corpus exists at `corpus_root`, fetching it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError`] when the corpus cannot be made available.
    fn ensure(&self, corpus_root: &Path) -> Result<BootstrapOutcome, BootstrapError>;
}

// ============================================================================
// SECTION: Progress Sink
// ============================================================================

/// Why a materialized test was not executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The filename matched one of the group's skip rules.
    SkipRule,
    /// The file sits before the resume offset.
    ResumeOffset,
}

/// Pipeline progress event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// Corpus bootstrap check finished.
    CorpusReady {
        /// Bootstrap outcome.
        outcome: BootstrapOutcome,
    },
    /// A corpus file was transformed into a group.
    TestAdded {
        /// Group-relative destination (`group/file`).
        destination: String,
    },
    /// A corpus file matched no rule.
    EntryIgnored {
        /// Corpus-relative path.
        path: String,
    },
    /// A materialized test was skipped.
    TestSkipped {
        /// Group-relative path.
        path: String,
        /// Skip reason.
        reason: SkipReason,
    },
    /// A test runtime invocation is about to start.
    TestStarted {
        /// Group-relative path.
        path: String,
    },
    /// A test passed.
    TestPassed {
        /// Group-relative path.
        path: String,
    },
    /// A test failed.
    TestFailed {
        /// Group-relative path.
        path: String,
        /// Exit code, when the process exited normally.
        code: Option<i32>,
        /// Spawn error, when the runtime could not start.
        error: Option<String>,
    },
    /// The run loop stopped early under bail.
    LoopAborted {
        /// Group-relative path of the failing test.
        path: String,
    },
}

/// Progress sink errors.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The sink could not record the event.
    #[error("progress log write failed: {0}")]
    WriteFailed(String),
}

/// Receiver of pipeline progress events.
pub trait ProgressSink {
    /// Records a single event.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError`] when the event cannot be written.
    fn record(&self, event: &LedgerEvent) -> Result<(), ProgressError>;
}
