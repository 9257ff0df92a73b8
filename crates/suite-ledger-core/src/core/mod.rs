// crates/suite-ledger-core/src/core/mod.rs
// ============================================================================
// Module: Suite Ledger Core Types
// Description: Data model shared by the import and run phases.
// Purpose: Group rules, corpus entries, layout, and the persisted summary.
// Dependencies: crate::core::{corpus, layout, rules, summary}
// ============================================================================

//! ## Overview
//! Core types are plain data. They carry no I/O beyond manifest loading and
//! are reused by both phases.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod corpus;
pub mod layout;
pub mod rules;
pub mod summary;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use corpus::ClassifiedTest;
pub use corpus::Classification;
pub use corpus::CorpusEntry;
pub use layout::Layout;
pub use rules::GroupPlan;
pub use rules::GroupRule;
pub use rules::ManifestError;
pub use rules::ManifestRecord;
pub use rules::SkipRule;
pub use rules::TestManifest;
pub use summary::Summary;
pub use summary::percent_of;
