// crates/suite-ledger-core/src/runtime/selector.rs
// ============================================================================
// Module: Suite Ledger Test Selector
// Description: Lists materialized tests and applies skip rules and offsets.
// Purpose: Produce the ordered run queue for the execution loop.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! Groups are visited in declaration order and each group directory is listed
//! in lexicographic filename order, independent of filesystem enumeration
//! order. A single position counter runs across all groups; every listed
//! file advances it, including files already skipped by a rule, so a resume
//! offset of `N` always covers the first `N` listed files.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::GroupPlan;
use crate::interfaces::SkipReason;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One materialized test in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTest {
    /// Group name.
    pub group: String,
    /// Filename inside the group directory.
    pub filename: String,
    /// Full path passed to the runtime.
    pub path: PathBuf,
    /// Set when the test must not be executed.
    pub skip: Option<SkipReason>,
}

impl SelectedTest {
    /// Returns the group-relative path, e.g. `fs/read.js`.
    #[must_use]
    pub fn display_path(&self) -> String {
        format!("{}/{}", self.group, self.filename)
    }
}

/// Test selector errors.
#[derive(Debug, Error)]
pub enum SelectError {
    /// A group directory could not be listed.
    #[error("failed to list {path}: {error}")]
    Io {
        /// Directory path.
        path: String,
        /// Underlying error.
        error: String,
    },
    /// A materialized filename is not valid UTF-8.
    #[error("test filename is not utf-8 in {0}")]
    NonUtf8Name(String),
}

// ============================================================================
// SECTION: Selector
// ============================================================================

/// Builds the run queue from materialized group directories.
#[derive(Debug, Clone)]
pub struct TestSelector<'a> {
    /// Root holding the group directories.
    test_root: &'a Path,
    /// Groups in declaration order with their skip rules.
    groups: &'a [GroupPlan],
    /// Number of leading files treated as already handled.
    resume_offset: usize,
}

impl<'a> TestSelector<'a> {
    /// Creates a selector with no resume offset.
    #[must_use]
    pub const fn new(test_root: &'a Path, groups: &'a [GroupPlan]) -> Self {
        Self {
            test_root,
            groups,
            resume_offset: 0,
        }
    }

    /// Treats the first `offset` listed files as already handled.
    #[must_use]
    pub const fn with_resume_offset(mut self, offset: usize) -> Self {
        self.resume_offset = offset;
        self
    }

    /// Lists every group and returns the ordered queue.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError`] when a group directory cannot be listed.
    pub fn select(&self) -> Result<Vec<SelectedTest>, SelectError> {
        let mut queue = Vec::new();
        let mut position = 0_usize;
        for plan in self.groups {
            let dir = self.test_root.join(&plan.group);
            for filename in list_files(&dir)? {
                position += 1;
                let skip = if plan.skipped_tests.iter().any(|rule| rule.matches(&filename)) {
                    Some(SkipReason::SkipRule)
                } else if position <= self.resume_offset {
                    Some(SkipReason::ResumeOffset)
                } else {
                    None
                };
                queue.push(SelectedTest {
                    group: plan.group.clone(),
                    path: dir.join(&filename),
                    filename,
                    skip,
                });
            }
        }
        Ok(queue)
    }
}

/// Returns the regular files in `dir` sorted by name; a missing directory is
/// an empty group.
fn list_files(dir: &Path) -> Result<Vec<String>, SelectError> {
    let io_error = |err: std::io::Error| SelectError::Io {
        path: dir.display().to_string(),
        error: err.to_string(),
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(io_error(err)),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(io_error)?;
        if !entry.file_type().map_err(io_error)?.is_file() {
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| SelectError::NonUtf8Name(dir.display().to_string()))?;
        names.push(name);
    }
    names.sort();
    Ok(names)
}
