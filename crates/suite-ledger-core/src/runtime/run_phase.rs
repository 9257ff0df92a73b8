// crates/suite-ledger-core/src/runtime/run_phase.rs
// ============================================================================
// Module: Suite Ledger Run Phase
// Description: Selector, execution loop, and report writer composed.
// Purpose: Execute materialized tests and publish the merged summary.
// Dependencies: crate::{core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The run phase checks that an import summary exists before anything is
//! spawned, builds the queue, runs it, and merges the counters into the
//! summary once the loop completes. An aborted loop leaves the summary as
//! the import phase wrote it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use thiserror::Error;

use crate::core::Layout;
use crate::core::Summary;
use crate::core::TestManifest;
use crate::interfaces::ProgressError;
use crate::interfaces::ProgressSink;
use crate::interfaces::TestRuntime;
use crate::runtime::execution::ExecutionLoop;
use crate::runtime::execution::LoopState;
use crate::runtime::execution::RunCounters;
use crate::runtime::report::ReportError;
use crate::runtime::report::ReportWriter;
use crate::runtime::selector::SelectError;
use crate::runtime::selector::TestSelector;
use crate::runtime::store::SummaryError;
use crate::runtime::store::SummaryStore;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Run phase options taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Stop at the first failure.
    pub bail: bool,
    /// Treat the first `skip` listed files as already handled.
    pub skip: usize,
}

/// Run phase result.
#[derive(Debug, Clone, PartialEq)]
pub enum RunPhaseOutcome {
    /// Every test was processed and the summary was merged.
    Completed {
        /// Merged summary as written.
        summary: Summary,
        /// Counters of what ran.
        counters: RunCounters,
    },
    /// Bail stopped the loop; the summary was not touched.
    Aborted {
        /// Imported summary as loaded.
        summary: Summary,
        /// Counters of what ran before the abort.
        counters: RunCounters,
    },
}

/// Run phase errors.
#[derive(Debug, Error)]
pub enum RunPhaseError {
    /// The import summary is missing or unreadable.
    #[error(transparent)]
    Summary(#[from] SummaryError),
    /// The run queue could not be built.
    #[error(transparent)]
    Select(#[from] SelectError),
    /// Progress logging failed.
    #[error(transparent)]
    Progress(#[from] ProgressError),
    /// The report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

// ============================================================================
// SECTION: Run Phase
// ============================================================================

/// Runs every materialized test and merges the results.
///
/// # Errors
///
/// Returns [`RunPhaseError`] when no import summary exists, a group cannot be
/// listed, logging fails, or the report cannot be written.
pub fn run_phase<R, S>(
    layout: &Layout,
    manifest: &TestManifest,
    options: RunOptions,
    runtime: &R,
    sink: &S,
    report_title: &str,
    markdown: Option<&Path>,
) -> Result<RunPhaseOutcome, RunPhaseError>
where
    R: TestRuntime + ?Sized,
    S: ProgressSink + ?Sized,
{
    let store = SummaryStore::new(&layout.summary_path);
    let imported = store.load()?;

    let groups = manifest.group_plans();
    let queue =
        TestSelector::new(&layout.test_root, &groups).with_resume_offset(options.skip).select()?;

    let mut execution = ExecutionLoop::new(runtime, sink, options.bail);
    let report = execution.run(&queue)?;
    if report.state == LoopState::Aborted {
        return Ok(RunPhaseOutcome::Aborted {
            summary: imported,
            counters: report.counters,
        });
    }

    let summary =
        ReportWriter::new(&store, report_title).with_markdown(markdown).write(&report.counters)?;
    Ok(RunPhaseOutcome::Completed {
        summary,
        counters: report.counters,
    })
}
