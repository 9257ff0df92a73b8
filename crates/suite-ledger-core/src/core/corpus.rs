// crates/suite-ledger-core/src/core/corpus.rs
// ============================================================================
// Module: Suite Ledger Corpus Entries
// Description: Scanned corpus files and their classification outcomes.
// Purpose: Carry corpus files from scanning through classification.
// Dependencies: crate::core::rules
// ============================================================================

//! ## Overview
//! A [`CorpusEntry`] is one scanned file. Classifying it against the ordered
//! rules yields a [`Classification`]; a match becomes a [`ClassifiedTest`]
//! once its destination name is derived.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use crate::core::rules::GroupRule;

// ============================================================================
// SECTION: Corpus Entry
// ============================================================================

/// One scanned corpus file.
///
/// # Invariants
/// - `relative_path` is relative to the corpus root with `/` separators.
/// - `filename` is the final segment of `relative_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// Corpus-relative path using `/` separators.
    pub relative_path: String,
    /// Bare filename.
    pub filename: String,
    /// Absolute (or root-joined) path on disk.
    pub source_path: PathBuf,
}

impl CorpusEntry {
    /// Creates an entry from a corpus-relative path and its on-disk location.
    #[must_use]
    pub fn new(relative_path: impl Into<String>, source_path: PathBuf) -> Self {
        let relative_path = relative_path.into();
        let filename = relative_path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            relative_path,
            filename,
            source_path,
        }
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Outcome of matching a corpus entry against the ordered group rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// First rule whose prefix matched and whose ignore list excluded the file.
    Matched(&'a GroupRule),
    /// No rule accepted the entry.
    Ignored,
}

/// A corpus entry bound to a group and a destination filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTest {
    /// Destination group.
    pub group: String,
    /// Source file on disk.
    pub source_path: PathBuf,
    /// Filename inside the group directory.
    pub destination_filename: String,
}

impl ClassifiedTest {
    /// Returns the group-relative destination, e.g. `fs/read.js`.
    #[must_use]
    pub fn destination(&self) -> String {
        format!("{}/{}", self.group, self.destination_filename)
    }
}
