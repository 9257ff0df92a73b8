// crates/suite-ledger-core/src/runtime/import.rs
// ============================================================================
// Module: Suite Ledger Import Pipeline
// Description: Scan, classify, transform, and persist the import summary.
// Purpose: Materialize the grouped corpus and record import counters.
// Dependencies: crate::{core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The import phase is strictly sequential:
//!
//! 1. ensure the corpus exists (bootstrap once if absent),
//! 2. scan candidate files,
//! 3. classify each against the ordered rules,
//! 4. transform and write each match,
//! 5. overwrite the summary with `{total, ignored, added}`.
//!
//! Any error aborts the run immediately. Files written before the failure
//! stay on disk and the summary is not rewritten, so a failed import leaves
//! the tree ahead of the summary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Classification;
use crate::core::GroupRule;
use crate::core::Layout;
use crate::core::Summary;
use crate::interfaces::BootstrapError;
use crate::interfaces::CorpusBootstrap;
use crate::interfaces::Formatter;
use crate::interfaces::LedgerEvent;
use crate::interfaces::ProgressError;
use crate::interfaces::ProgressSink;
use crate::runtime::classifier::classify;
use crate::runtime::naming::classified_test;
use crate::runtime::scanner::CorpusScanner;
use crate::runtime::scanner::ScanError;
use crate::runtime::store::SummaryError;
use crate::runtime::store::SummaryStore;
use crate::runtime::transform::TextRewrite;
use crate::runtime::transform::TransformError;
use crate::runtime::transform::Transformer;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Import phase errors. Every variant is fatal.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Corpus bootstrap failed.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    /// Corpus scan failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// A file could not be transformed.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// The summary could not be written.
    #[error(transparent)]
    Summary(#[from] SummaryError),
    /// Progress logging failed.
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

// ============================================================================
// SECTION: Counters
// ============================================================================

/// Import counters; `total` is derived so it always equals `ignored + added`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportCounters {
    /// Entries matching no rule.
    pub ignored: u64,
    /// Entries written into a group.
    pub added: u64,
}

impl ImportCounters {
    /// Returns the number of scanned entries.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.ignored + self.added
    }

    /// Converts the counters into an import-phase summary.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::imported(self.ignored, self.added)
    }
}

// ============================================================================
// SECTION: Pipeline
// ============================================================================

/// Sequential import orchestrator.
pub struct ImportPipeline<'a> {
    /// Resolved filesystem layout.
    layout: &'a Layout,
    /// Ordered group rules.
    rules: &'a [GroupRule],
    /// Accepted script extensions.
    extensions: &'a [String],
    /// Literal rewrites applied before formatting.
    rewrites: &'a [TextRewrite],
}

impl<'a> ImportPipeline<'a> {
    /// Creates a pipeline over the given layout and rules.
    #[must_use]
    pub const fn new(
        layout: &'a Layout,
        rules: &'a [GroupRule],
        extensions: &'a [String],
        rewrites: &'a [TextRewrite],
    ) -> Self {
        Self {
            layout,
            rules,
            extensions,
            rewrites,
        }
    }

    /// Runs the import phase and persists the summary.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] on the first fatal failure; the summary is only
    /// written after every entry has been processed.
    pub fn run<B, F, S>(&self, bootstrap: &B, formatter: &F, sink: &S) -> Result<Summary, ImportError>
    where
        B: CorpusBootstrap + ?Sized,
        F: Formatter + ?Sized,
        S: ProgressSink + ?Sized,
    {
        let outcome = bootstrap.ensure(&self.layout.corpus_root)?;
        sink.record(&LedgerEvent::CorpusReady {
            outcome,
        })?;

        let scanner = CorpusScanner::new(&self.layout.corpus_root, &self.layout.scan_root)
            .with_extensions(self.extensions.to_vec());
        let transformer = Transformer::new(formatter, self.rewrites, &self.layout.test_root);

        let mut counters = ImportCounters::default();
        for entry in scanner.scan()? {
            let Classification::Matched(rule) = classify(&entry, self.rules) else {
                counters.ignored += 1;
                sink.record(&LedgerEvent::EntryIgnored {
                    path: entry.relative_path,
                })?;
                continue;
            };
            let test = classified_test(rule, &entry);
            transformer.transform(&test)?;
            counters.added += 1;
            sink.record(&LedgerEvent::TestAdded {
                destination: test.destination(),
            })?;
        }

        let summary = counters.summary();
        SummaryStore::new(&self.layout.summary_path).write(&summary)?;
        Ok(summary)
    }
}
