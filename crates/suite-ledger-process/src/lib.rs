// crates/suite-ledger-process/src/lib.rs
// ============================================================================
// Module: Suite Ledger Process Services
// Description: Subprocess-backed implementations of the core service traits.
// Purpose: Reach the formatter, test runtime, and corpus checkout via argv.
// Dependencies: suite-ledger-core, thiserror
// ============================================================================

//! ## Overview
//! Every external tool is described by a [`CommandLine`]: a program plus
//! fixed leading arguments. No shell is involved; arguments are passed
//! verbatim. The formatter captures stdout, while the runtime and the
//! bootstrap inherit the parent's stdio so their output streams live.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bootstrap;
pub mod command;
pub mod formatter;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bootstrap::CommandBootstrap;
pub use command::CommandLine;
pub use command::CommandLineError;
pub use formatter::CommandFormatter;
pub use runtime::CommandRuntime;
