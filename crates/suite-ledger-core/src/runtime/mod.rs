// crates/suite-ledger-core/src/runtime/mod.rs
// ============================================================================
// Module: Suite Ledger Runtime
// Description: Import and run phase machinery.
// Purpose: Expose the scanner, classifier, transformer, and run loop.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime implements both phases on top of the core data model and the
//! service interfaces. It performs filesystem I/O directly and reaches every
//! external process through a trait.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod classifier;
pub mod execution;
pub mod import;
pub mod log;
pub mod naming;
pub mod report;
pub mod run_phase;
pub mod scanner;
pub mod selector;
pub mod store;
pub mod transform;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use classifier::classify;
pub use execution::ExecutionLoop;
pub use execution::LoopState;
pub use execution::RunCounters;
pub use execution::RunReport;
pub use execution::TestOutcome;
pub use import::ImportCounters;
pub use import::ImportError;
pub use import::ImportPipeline;
pub use log::EventLog;
pub use log::LogFormat;
pub use naming::classified_test;
pub use naming::destination_filename;
pub use report::ReportError;
pub use report::ReportWriter;
pub use report::markdown_report;
pub use run_phase::RunOptions;
pub use run_phase::RunPhaseError;
pub use run_phase::RunPhaseOutcome;
pub use run_phase::run_phase;
pub use scanner::CorpusScanner;
pub use scanner::DEFAULT_SCRIPT_EXTENSIONS;
pub use scanner::ScanError;
pub use selector::SelectError;
pub use selector::SelectedTest;
pub use selector::TestSelector;
pub use store::SummaryError;
pub use store::SummaryStore;
pub use transform::TextRewrite;
pub use transform::TransformError;
pub use transform::Transformer;
pub use transform::apply_rewrites;
