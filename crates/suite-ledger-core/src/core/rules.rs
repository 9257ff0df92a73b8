// crates/suite-ledger-core/src/core/rules.rs
// ============================================================================
// Module: Suite Ledger Group Rules
// Description: Ordered group rules, skip rules, and the test manifest.
// Purpose: Define how corpus files map to groups and which files are skipped.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The test manifest is an ordered JSON array of records. Import uses each
//! record as a [`GroupRule`] (prefix + ignore list); run uses the records'
//! [`SkipRule`]s. Declaration order is significant: it is the only
//! tie-break for classification and fixes the group execution order.
//!
//! ## Invariants
//! - Group names are single path segments (never `.`, `..`, or separated).
//! - Prefixes, ignored names, and skip patterns are non-empty.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum manifest file size in bytes.
pub const MAX_MANIFEST_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Rule Types
// ============================================================================

/// Import-phase classification rule.
///
/// # Invariants
/// - `ignored_tests` holds bare filenames, compared for exact equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRule {
    /// Destination group name.
    pub group: String,
    /// Corpus-relative path prefix.
    pub prefix: String,
    /// Filenames excluded from this rule.
    pub ignored_tests: BTreeSet<String>,
}

impl GroupRule {
    /// Creates a rule with an empty ignore list.
    #[must_use]
    pub fn new(group: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            prefix: prefix.into(),
            ignored_tests: BTreeSet::new(),
        }
    }

    /// Adds an ignored filename to the rule.
    #[must_use]
    pub fn ignoring(mut self, filename: impl Into<String>) -> Self {
        self.ignored_tests.insert(filename.into());
        self
    }

    /// Returns true when `filename` is on this rule's ignore list.
    #[must_use]
    pub fn ignores(&self, filename: &str) -> bool {
        self.ignored_tests.contains(filename)
    }

    /// Returns the prefix's trailing path segment.
    #[must_use]
    pub fn trailing_segment(&self) -> &str {
        self.prefix.rsplit('/').next().unwrap_or(self.prefix.as_str())
    }
}

/// Run-phase exclusion of a materialized file, matched as a filename suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkipRule {
    /// Filename suffix to skip.
    pub test: String,
}

impl SkipRule {
    /// Creates a skip rule for the given suffix.
    #[must_use]
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
        }
    }

    /// Returns true when `filename` ends with this rule's pattern.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        filename.ends_with(&self.test)
    }
}

// ============================================================================
// SECTION: Manifest
// ============================================================================

/// A single manifest record as declared on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestRecord {
    /// Destination group name.
    pub group: String,
    /// Corpus-relative path prefix.
    pub prefix: String,
    /// Filenames excluded at import time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored_tests: Vec<String>,
    /// Filename suffixes excluded at run time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_tests: Vec<SkipRule>,
}

/// Group directory listed by the run phase with its merged skip rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
    /// Group name (and directory under the test root).
    pub group: String,
    /// Union of skip rules declared for this group.
    pub skipped_tests: Vec<SkipRule>,
}

/// Ordered test manifest shared by the import and run phases.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestManifest {
    /// Records in declaration order.
    records: Vec<ManifestRecord>,
}

impl TestManifest {
    /// Builds a manifest from records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Invalid`] when a record is malformed.
    pub fn new(records: Vec<ManifestRecord>) -> Result<Self, ManifestError> {
        for (index, record) in records.iter().enumerate() {
            validate_record(index, record)?;
        }
        Ok(Self {
            records,
        })
    }

    /// Parses and validates a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when parsing or validation fails.
    pub fn from_json_str(input: &str) -> Result<Self, ManifestError> {
        let records: Vec<ManifestRecord> =
            serde_json::from_str(input).map_err(|err| ManifestError::Parse(err.to_string()))?;
        Self::new(records)
    }

    /// Loads a manifest from disk with a hard size limit.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when reading, parsing, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let bytes = fs::read(path)
            .map_err(|err| ManifestError::Io(format!("{}: {err}", path.display())))?;
        if bytes.len() > MAX_MANIFEST_BYTES {
            return Err(ManifestError::Invalid("manifest exceeds size limit".to_string()));
        }
        let text = std::str::from_utf8(&bytes)
            .map_err(|_| ManifestError::Invalid("manifest must be utf-8".to_string()))?;
        Self::from_json_str(text)
    }

    /// Returns the records in declaration order.
    #[must_use]
    pub fn records(&self) -> &[ManifestRecord] {
        &self.records
    }

    /// Returns the import-phase group rules in declaration order.
    #[must_use]
    pub fn group_rules(&self) -> Vec<GroupRule> {
        self.records
            .iter()
            .map(|record| GroupRule {
                group: record.group.clone(),
                prefix: record.prefix.clone(),
                ignored_tests: record.ignored_tests.iter().cloned().collect(),
            })
            .collect()
    }

    /// Returns each distinct group once, at its first declaration, with the
    /// skip rules of every record naming it.
    #[must_use]
    pub fn group_plans(&self) -> Vec<GroupPlan> {
        let mut plans: Vec<GroupPlan> = Vec::new();
        for record in &self.records {
            if let Some(plan) = plans.iter_mut().find(|plan| plan.group == record.group) {
                for rule in &record.skipped_tests {
                    if !plan.skipped_tests.contains(rule) {
                        plan.skipped_tests.push(rule.clone());
                    }
                }
                continue;
            }
            plans.push(GroupPlan {
                group: record.group.clone(),
                skipped_tests: record.skipped_tests.clone(),
            });
        }
        plans
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Manifest loading and validation errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// I/O failure while reading the manifest.
    #[error("manifest io error: {0}")]
    Io(String),
    /// JSON parse failure.
    #[error("manifest parse error: {0}")]
    Parse(String),
    /// Structurally valid but semantically invalid manifest.
    #[error("invalid manifest: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a single manifest record.
fn validate_record(index: usize, record: &ManifestRecord) -> Result<(), ManifestError> {
    let group = record.group.as_str();
    if group.trim().is_empty() {
        return Err(ManifestError::Invalid(format!("record {index}: group must be non-empty")));
    }
    if group == "." || group == ".." || group.contains('/') || group.contains('\\') {
        return Err(ManifestError::Invalid(format!(
            "record {index}: group {group} must be a single directory name"
        )));
    }
    if record.prefix.is_empty() {
        return Err(ManifestError::Invalid(format!("record {index}: prefix must be non-empty")));
    }
    if record.ignored_tests.iter().any(String::is_empty) {
        return Err(ManifestError::Invalid(format!(
            "record {index}: ignoredTests entries must be non-empty"
        )));
    }
    if record.skipped_tests.iter().any(|rule| rule.test.is_empty()) {
        return Err(ManifestError::Invalid(format!(
            "record {index}: skippedTests entries must be non-empty"
        )));
    }
    Ok(())
}
