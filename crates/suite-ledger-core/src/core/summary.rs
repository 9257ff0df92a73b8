// crates/suite-ledger-core/src/core/summary.rs
// ============================================================================
// Module: Suite Ledger Summary
// Description: Durable aggregate of import and run counters.
// Purpose: Carry state across the import and run process boundary.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The import phase creates a [`Summary`] with `total`, `ignored`, and
//! `added`. The run phase later merges `pass`, `fail`, and `percent` into the
//! same object. Each phase owns its own fields and never recomputes the other
//! phase's fields; unknown fields found on disk are carried through untouched.
//!
//! ## Invariants
//! - `total == ignored + added` for summaries produced by the import phase.
//! - `percent` is always computed against the imported `total`.
//! - Whole percentages serialize as integers (`100`, not `100.0`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Persisted import/run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Every scanned candidate file, classified or not.
    pub total: u64,
    /// Files that matched no rule.
    #[serde(default)]
    pub ignored: u64,
    /// Files transformed and written into a group.
    #[serde(default)]
    pub added: u64,
    /// Tests that passed in the last completed run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<u64>,
    /// Tests that failed in the last completed run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail: Option<u64>,
    /// `pass / total * 100`, rounded to two decimals.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_percent"
    )]
    pub percent: Option<f64>,
    /// Fields written by other tools; preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Summary {
    /// Creates an import-phase summary.
    #[must_use]
    pub fn imported(ignored: u64, added: u64) -> Self {
        Self {
            total: ignored + added,
            ignored,
            added,
            pass: None,
            fail: None,
            percent: None,
            extra: Map::new(),
        }
    }

    /// Returns the added percentage of the import, rounded to two decimals.
    #[must_use]
    pub fn added_percent(&self) -> f64 {
        percent_of(self.added, self.total)
    }

    /// Merges run-phase counters, leaving import-phase fields untouched.
    pub fn merge_run(&mut self, pass: u64, fail: u64) {
        self.pass = Some(pass);
        self.fail = Some(fail);
        self.percent = Some(percent_of(pass, self.total));
    }
}

// ============================================================================
// SECTION: Percentages
// ============================================================================

/// Returns `part / whole * 100` rounded to two decimals; zero when `whole` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "Counters stay far below 2^52.")]
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let ratio = part as f64 / whole as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}

/// Writes a whole percentage as an integer and anything else as a float.
#[allow(
    clippy::ref_option,
    clippy::trivially_copy_pass_by_ref,
    reason = "serde passes field references to serialize_with."
)]
fn serialize_percent<S: Serializer>(percent: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match percent {
        Some(value) => match value.to_string().parse::<u64>() {
            Ok(whole) => serializer.serialize_u64(whole),
            Err(_) => serializer.serialize_f64(*value),
        },
        None => serializer.serialize_none(),
    }
}
