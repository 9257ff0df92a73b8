// crates/suite-ledger-core/src/core/layout.rs
// ============================================================================
// Module: Suite Ledger Layout
// Description: Resolved filesystem locations shared by both phases.
// Purpose: Keep path derivation in one place.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`Layout`] names every location the pipeline touches. Group directories
//! live directly under the test root; the manifest and summary usually do too.

use std::path::PathBuf;

/// Resolved filesystem locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Project test root; group directories are created here.
    pub test_root: PathBuf,
    /// Corpus checkout root; corpus-relative paths are relative to it.
    pub corpus_root: PathBuf,
    /// Directory scanned for candidate files (inside the corpus root).
    pub scan_root: PathBuf,
    /// Test manifest path.
    pub manifest_path: PathBuf,
    /// Summary file path.
    pub summary_path: PathBuf,
}

impl Layout {
    /// Returns the destination directory for `group`.
    #[must_use]
    pub fn group_dir(&self, group: &str) -> PathBuf {
        self.test_root.join(group)
    }
}
