// crates/suite-ledger-core/src/runtime/scanner.rs
// ============================================================================
// Module: Suite Ledger Corpus Scanner
// Description: Recursive enumeration of script files in the corpus.
// Purpose: Produce corpus entries in a deterministic order.
// Dependencies: crate::core::corpus, thiserror
// ============================================================================

//! ## Overview
//! The scanner walks the scan root recursively and yields every regular file
//! whose extension is on the allow list. Directory entries are sorted before
//! descent so two scans of the same tree produce the same sequence.
//! Symlinks are never followed and never yielded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::CorpusEntry;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Script extensions accepted when none are configured.
pub const DEFAULT_SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Corpus scan errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Filesystem failure while walking the corpus.
    #[error("corpus scan io error at {path}: {error}")]
    Io {
        /// Path being read.
        path: String,
        /// Underlying error.
        error: String,
    },
    /// The scan root is not below the corpus root.
    #[error("scan root {0} is outside the corpus root")]
    OutsideCorpus(String),
    /// A path segment is not valid UTF-8.
    #[error("corpus path is not utf-8: {0}")]
    NonUtf8Path(String),
}

// ============================================================================
// SECTION: Scanner
// ============================================================================

/// Recursive script-file enumerator.
#[derive(Debug, Clone)]
pub struct CorpusScanner {
    /// Root that corpus-relative paths are computed against.
    corpus_root: PathBuf,
    /// Directory to walk.
    scan_root: PathBuf,
    /// Accepted extensions, without dots.
    extensions: Vec<String>,
}

impl CorpusScanner {
    /// Creates a scanner with the default script extensions.
    #[must_use]
    pub fn new(corpus_root: impl Into<PathBuf>, scan_root: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            scan_root: scan_root.into(),
            extensions: DEFAULT_SCRIPT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }

    /// Replaces the accepted extensions.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Returns true when `filename` has an accepted extension.
    #[must_use]
    pub fn accepts(&self, filename: &str) -> bool {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Walks the scan root and returns every accepted file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] when the tree cannot be read.
    pub fn scan(&self) -> Result<Vec<CorpusEntry>, ScanError> {
        if !self.scan_root.starts_with(&self.corpus_root) {
            return Err(ScanError::OutsideCorpus(self.scan_root.display().to_string()));
        }
        let mut entries = Vec::new();
        self.walk(&self.scan_root, &mut entries)?;
        Ok(entries)
    }

    /// Visits `dir` in sorted order, descending into subdirectories.
    fn walk(&self, dir: &Path, out: &mut Vec<CorpusEntry>) -> Result<(), ScanError> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir).map_err(|err| io_error(dir, &err))? {
            let entry = entry.map_err(|err| io_error(dir, &err))?;
            let file_type = entry.file_type().map_err(|err| io_error(&entry.path(), &err))?;
            children.push((entry.path(), file_type));
        }
        children.sort_by(|(left, _), (right, _)| left.cmp(right));

        for (path, file_type) in children {
            if file_type.is_dir() {
                self.walk(&path, out)?;
                continue;
            }
            if !file_type.is_file() {
                continue;
            }
            let relative = self.relative_path(&path)?;
            let entry = CorpusEntry::new(relative, path);
            if self.accepts(&entry.filename) {
                out.push(entry);
            }
        }
        Ok(())
    }

    /// Returns `path` relative to the corpus root, joined with `/`.
    fn relative_path(&self, path: &Path) -> Result<String, ScanError> {
        let relative = path
            .strip_prefix(&self.corpus_root)
            .map_err(|_| ScanError::OutsideCorpus(path.display().to_string()))?;
        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| ScanError::NonUtf8Path(path.display().to_string()))?;
            segments.push(segment);
        }
        Ok(segments.join("/"))
    }
}

/// Wraps an I/O error with the path being read.
fn io_error(path: &Path, error: &std::io::Error) -> ScanError {
    ScanError::Io {
        path: path.display().to_string(),
        error: error.to_string(),
    }
}
