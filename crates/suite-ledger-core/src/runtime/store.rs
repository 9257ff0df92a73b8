// crates/suite-ledger-core/src/runtime/store.rs
// ============================================================================
// Module: Suite Ledger Summary Store
// Description: JSON file persistence for the phase summary.
// Purpose: Hand state from the import process to the run process.
// Dependencies: crate::core::summary, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The summary file is the only state shared between the two phases. Import
//! overwrites it; run loads it, merges its own counters, and rewrites it.
//! There is no locking: phases must not run concurrently.
//!
//! ## Invariants
//! - Loading fails loudly when the file is missing or has no `total`, so the
//!   run phase cannot proceed without a prior import.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::core::Summary;
use crate::runtime::transform::write_creating_parent;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum summary file size in bytes.
pub const MAX_SUMMARY_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Summary persistence errors.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// No summary exists; the import phase has not run.
    #[error("summary {0} not found; run the import phase first")]
    MissingImport(String),
    /// The summary exists but carries no import-phase `total`.
    #[error("summary {0} has no import total; run the import phase first")]
    MissingTotal(String),
    /// Filesystem failure.
    #[error("summary io error at {path}: {error}")]
    Io {
        /// Summary path.
        path: String,
        /// Underlying error.
        error: String,
    },
    /// The summary is not valid JSON of the expected shape.
    #[error("summary {path} is malformed: {error}")]
    Malformed {
        /// Summary path.
        path: String,
        /// Parse error.
        error: String,
    },
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// File-backed summary store.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    /// Summary file path.
    path: PathBuf,
}

impl SummaryStore {
    /// Creates a store for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Loads the summary written by a previous import.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError`] when the summary is missing, lacks `total`, or
    /// cannot be parsed.
    pub fn load(&self) -> Result<Summary, SummaryError> {
        let display = self.path.display().to_string();
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(SummaryError::MissingImport(display));
            }
            Err(err) => {
                return Err(SummaryError::Io {
                    path: display,
                    error: err.to_string(),
                });
            }
        };
        if bytes.len() > MAX_SUMMARY_BYTES {
            return Err(SummaryError::Malformed {
                path: display,
                error: "summary exceeds size limit".to_string(),
            });
        }
        let value: Value = serde_json::from_slice(&bytes).map_err(|err| SummaryError::Malformed {
            path: display.clone(),
            error: err.to_string(),
        })?;
        if value.get("total").is_none_or(Value::is_null) {
            return Err(SummaryError::MissingTotal(display));
        }
        serde_json::from_value(value).map_err(|err| SummaryError::Malformed {
            path: display,
            error: err.to_string(),
        })
    }

    /// Writes `summary`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError`] when serialization or the write fails.
    pub fn write(&self, summary: &Summary) -> Result<(), SummaryError> {
        let display = self.path.display().to_string();
        let text = serde_json::to_string_pretty(summary).map_err(|err| SummaryError::Malformed {
            path: display.clone(),
            error: err.to_string(),
        })?;
        write_creating_parent(&self.path, text.as_bytes()).map_err(|err| SummaryError::Io {
            path: display,
            error: err.to_string(),
        })
    }
}

