// crates/suite-ledger-core/src/runtime/naming.rs
// ============================================================================
// Module: Suite Ledger Destination Naming
// Description: Two-branch destination filename derivation.
// Purpose: Rename corpus files into their group directory.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Let `S` be the rule prefix's trailing path segment.
//!
//! - When `S` equals the file stem, the rule names exactly one file and the
//!   destination is `<group>.<ext>` (`test-timers.js` → `timers.js`).
//! - Otherwise `S` and the joining character that follows it are stripped
//!   from the filename (`test-fs-read.js` under `test-fs` → `read.js`). A
//!   prefix that already ends in a joining character strips nothing more.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use crate::core::ClassifiedTest;
use crate::core::CorpusEntry;
use crate::core::GroupRule;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Characters that join a shared prefix segment to the rest of a filename.
const JOINERS: &[char] = &['-', '_', '.'];

// ============================================================================
// SECTION: Naming
// ============================================================================

/// Derives the destination filename for `filename` matched by `rule`.
#[must_use]
pub fn destination_filename(rule: &GroupRule, filename: &str) -> String {
    let path = Path::new(filename);
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or(filename);
    let segment = rule.trailing_segment();

    if stem == segment {
        return match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{}.{ext}", rule.group),
            None => rule.group.clone(),
        };
    }

    let Some(rest) = filename.strip_prefix(segment) else {
        return filename.to_string();
    };
    let rest = if segment.ends_with(JOINERS) {
        rest
    } else {
        let mut chars = rest.chars();
        chars.next();
        chars.as_str()
    };
    if rest.is_empty() { filename.to_string() } else { rest.to_string() }
}

/// Binds a matched corpus entry to its group and destination filename.
#[must_use]
pub fn classified_test(rule: &GroupRule, entry: &CorpusEntry) -> ClassifiedTest {
    ClassifiedTest {
        group: rule.group.clone(),
        source_path: entry.source_path.clone(),
        destination_filename: destination_filename(rule, &entry.filename),
    }
}
