// crates/suite-ledger-core/src/runtime/transform.rs
// ============================================================================
// Module: Suite Ledger Transformer
// Description: Rewrite, format, and materialize one classified test.
// Purpose: Turn a corpus file into a group test file under the test root.
// Dependencies: crate::{core, interfaces}, serde, thiserror
// ============================================================================

//! ## Overview
//! Each classified test is read, passed through the literal rewrites, handed
//! to the [`Formatter`], and written to `<test root>/<group>/<name>`. A
//! formatter failure aborts the caller before anything is written for that
//! file. Writes create missing directories on demand and overwrite existing
//! files.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::ClassifiedTest;
use crate::interfaces::FormatError;
use crate::interfaces::Formatter;

// ============================================================================
// SECTION: Rewrites
// ============================================================================

/// Literal text replacement applied to every source before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextRewrite {
    /// Literal text to replace.
    pub from: String,
    /// Replacement text.
    pub to: String,
}

impl TextRewrite {
    /// Creates a rewrite.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Rewrites bare `assert(` calls to `assert.ok(`.
    ///
    /// Module mocking in the downstream runtime does not preserve the callable
    /// default export of `assert`, only its members.
    #[must_use]
    pub fn assert_ok() -> Self {
        Self::new("assert(", "assert.ok(")
    }

    /// Applies the rewrite to every occurrence in `source`.
    #[must_use]
    pub fn apply(&self, source: &str) -> String {
        if self.from.is_empty() {
            return source.to_string();
        }
        source.replace(&self.from, &self.to)
    }
}

/// Applies `rewrites` in order.
#[must_use]
pub fn apply_rewrites(source: &str, rewrites: &[TextRewrite]) -> String {
    rewrites.iter().fold(source.to_string(), |text, rewrite| rewrite.apply(&text))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Transformation errors. All are fatal to the import run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The source file could not be read.
    #[error("failed to read {path}: {error}")]
    Read {
        /// Source path.
        path: String,
        /// Underlying error.
        error: String,
    },
    /// The formatter rejected the source.
    #[error("failed to format {path}: {source}")]
    Format {
        /// Source path.
        path: String,
        /// Formatter error.
        #[source]
        source: FormatError,
    },
    /// The destination could not be written.
    #[error("failed to write {path}: {error}")]
    Write {
        /// Destination path.
        path: String,
        /// Underlying error.
        error: String,
    },
}

// ============================================================================
// SECTION: Transformer
// ============================================================================

/// Materializes classified tests under a test root.
pub struct Transformer<'a, F: Formatter + ?Sized> {
    /// Formatter applied after rewrites.
    formatter: &'a F,
    /// Literal rewrites, applied in order.
    rewrites: &'a [TextRewrite],
    /// Root under which group directories live.
    test_root: PathBuf,
}

impl<'a, F: Formatter + ?Sized> Transformer<'a, F> {
    /// Creates a transformer writing below `test_root`.
    pub fn new(formatter: &'a F, rewrites: &'a [TextRewrite], test_root: impl Into<PathBuf>) -> Self {
        Self {
            formatter,
            rewrites,
            test_root: test_root.into(),
        }
    }

    /// Returns the on-disk destination for a classified test.
    #[must_use]
    pub fn destination_path(&self, test: &ClassifiedTest) -> PathBuf {
        self.test_root.join(&test.group).join(&test.destination_filename)
    }

    /// Reads, rewrites, formats, and writes one test; returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError`] on read, format, or write failure.
    pub fn transform(&self, test: &ClassifiedTest) -> Result<PathBuf, TransformError> {
        let source = fs::read_to_string(&test.source_path).map_err(|err| TransformError::Read {
            path: test.source_path.display().to_string(),
            error: err.to_string(),
        })?;
        let rewritten = apply_rewrites(&source, self.rewrites);
        let formatted =
            self.formatter.format(&rewritten).map_err(|source| TransformError::Format {
                path: test.source_path.display().to_string(),
                source,
            })?;
        let destination = self.destination_path(test);
        write_creating_parent(&destination, formatted.as_bytes()).map_err(|err| {
            TransformError::Write {
                path: destination.display().to_string(),
                error: err.to_string(),
            }
        })?;
        Ok(destination)
    }
}

/// Writes `bytes` to `path`; on "not found" creates the parent directories and
/// retries exactly once.
///
/// # Errors
///
/// Returns the underlying I/O error for any other failure.
pub fn write_creating_parent(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    match fs::write(path, bytes) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, bytes)
        }
        Err(err) => Err(err),
    }
}
