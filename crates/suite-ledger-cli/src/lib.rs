// crates/suite-ledger-cli/src/lib.rs
// ============================================================================
// Module: Suite Ledger CLI Library
// Description: Shared helpers for the Suite Ledger command-line interface.
// Purpose: Provide reusable components (i18n) for the CLI binary and tests.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! This library module houses the message catalog used by the binary entry
//! point (`src/main.rs`) so every console line is rendered consistently.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
