// crates/suite-ledger-core/src/lib.rs
// ============================================================================
// Module: Suite Ledger Core Library
// Description: Public API surface for the Suite Ledger core.
// Purpose: Expose core types, interfaces, and phase runtimes.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Suite Ledger imports an external test corpus into a project's own group
//! layout and later runs the grouped tests, keeping a summary of how much of
//! the external suite passes. The import and run phases are separate process
//! invocations that share only the materialized tree and the summary file.
//! External tools (formatter, test runtime, corpus checkout) are reached
//! through the traits in [`interfaces`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::BootstrapError;
pub use interfaces::BootstrapOutcome;
pub use interfaces::CorpusBootstrap;
pub use interfaces::FormatError;
pub use interfaces::Formatter;
pub use interfaces::LedgerEvent;
pub use interfaces::ProgressError;
pub use interfaces::ProgressSink;
pub use interfaces::RuntimeError;
pub use interfaces::RuntimeExit;
pub use interfaces::SkipReason;
pub use interfaces::TestRuntime;
pub use runtime::EventLog;
pub use runtime::ImportError;
pub use runtime::ImportPipeline;
pub use runtime::LogFormat;
pub use runtime::RunOptions;
pub use runtime::RunPhaseError;
pub use runtime::RunPhaseOutcome;
pub use runtime::SummaryError;
pub use runtime::SummaryStore;
pub use runtime::TextRewrite;
pub use runtime::run_phase;
