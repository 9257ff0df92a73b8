// crates/suite-ledger-core/src/runtime/classifier.rs
// ============================================================================
// Module: Suite Ledger Group Classifier
// Description: First-match classification against ordered group rules.
// Purpose: Decide which group, if any, a corpus file belongs to.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Rules are scanned in declaration order and the first acceptable rule wins.
//! There is no "most specific prefix" search: when two prefixes overlap, the
//! earlier declaration takes the file.

use crate::core::Classification;
use crate::core::CorpusEntry;
use crate::core::GroupRule;

/// Returns the first rule whose prefix matches the entry's path and whose
/// ignore list does not contain the entry's filename.
#[must_use]
pub fn classify<'a>(entry: &CorpusEntry, rules: &'a [GroupRule]) -> Classification<'a> {
    rules
        .iter()
        .find(|rule| entry.relative_path.starts_with(&rule.prefix) && !rule.ignores(&entry.filename))
        .map_or(Classification::Ignored, Classification::Matched)
}
