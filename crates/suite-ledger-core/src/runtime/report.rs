// crates/suite-ledger-core/src/runtime/report.rs
// ============================================================================
// Module: Suite Ledger Report Writer
// Description: Merge run counters into the summary and emit CI markdown.
// Purpose: Publish how much of the external suite passes.
// Dependencies: crate::{core, runtime::store}, thiserror
// ============================================================================

//! ## Overview
//! The report writer reloads the import-phase summary, merges `pass`, `fail`,
//! and `percent`, and rewrites the file. `percent` uses the imported `total`
//! as its denominator, never the number of tests that ran. When a markdown
//! destination is injected, a fixed table is appended to it; no destination
//! means no markdown.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::core::Summary;
use crate::runtime::execution::RunCounters;
use crate::runtime::store::SummaryError;
use crate::runtime::store::SummaryStore;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Report writer errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The summary could not be loaded or written.
    #[error(transparent)]
    Summary(#[from] SummaryError),
    /// The markdown destination could not be appended.
    #[error("failed to append markdown report to {path}: {error}")]
    Markdown {
        /// Markdown destination.
        path: String,
        /// Underlying error.
        error: String,
    },
}

// ============================================================================
// SECTION: Writer
// ============================================================================

/// Merges run results into the persisted summary.
#[derive(Debug, Clone)]
pub struct ReportWriter<'a> {
    /// Summary store shared with the import phase.
    store: &'a SummaryStore,
    /// Optional markdown destination (typically the CI step summary).
    markdown: Option<&'a Path>,
    /// Markdown heading.
    title: &'a str,
}

impl<'a> ReportWriter<'a> {
    /// Creates a writer with no markdown destination.
    #[must_use]
    pub const fn new(store: &'a SummaryStore, title: &'a str) -> Self {
        Self {
            store,
            markdown: None,
            title,
        }
    }

    /// Sets the markdown destination.
    #[must_use]
    pub const fn with_markdown(mut self, markdown: Option<&'a Path>) -> Self {
        self.markdown = markdown;
        self
    }

    /// Loads, merges, and rewrites the summary, then appends markdown.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when the summary is missing or any write fails.
    pub fn write(&self, counters: &RunCounters) -> Result<Summary, ReportError> {
        let mut summary = self.store.load()?;
        summary.merge_run(counters.pass, counters.fail);
        self.store.write(&summary)?;
        if let Some(path) = self.markdown {
            append_markdown(path, &markdown_report(self.title, &summary))?;
        }
        Ok(summary)
    }
}

// ============================================================================
// SECTION: Markdown
// ============================================================================

/// Renders the CI markdown table for a merged summary.
#[must_use]
pub fn markdown_report(title: &str, summary: &Summary) -> String {
    let pass = summary.pass.unwrap_or_default();
    let fail = summary.fail.unwrap_or_default();
    let percent = summary.percent.unwrap_or_default();
    format!(
        "## {title}\n\n| Total tests | Passed tests | Failed tests | Percentage \
         |\n|-------|--------|--------|---------|\n| {total} | {pass} | {fail} | {percent}% |\n",
        total = summary.total,
    )
}

/// Appends `markdown` to `path`, creating the file if needed.
fn append_markdown(path: &Path, markdown: &str) -> Result<(), ReportError> {
    let error = |err: std::io::Error| ReportError::Markdown {
        path: path.display().to_string(),
        error: err.to_string(),
    };
    let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(error)?;
    file.write_all(markdown.as_bytes()).map_err(error)
}
