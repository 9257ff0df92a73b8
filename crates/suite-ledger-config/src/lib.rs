// crates/suite-ledger-config/src/lib.rs
// ============================================================================
// Module: Suite Ledger Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for suite-ledger.toml semantics.
// Dependencies: suite-ledger-core, serde, toml
// ============================================================================

//! ## Overview
//! `suite-ledger-config` defines the configuration model for Suite Ledger:
//! filesystem layout, external tool commands, rewrites, report labels, and
//! log format. It provides strict, fail-closed validation and a canonical
//! example file.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
