// crates/suite-ledger-core/src/runtime/log.rs
// ============================================================================
// Module: Suite Ledger Event Log
// Description: Writer-backed progress sink with text and JSON formats.
// Purpose: Report pipeline progress without a global logger.
// Dependencies: crate::interfaces, serde, serde_json
// ============================================================================

//! ## Overview
//! `EventLog` writes one record per [`LedgerEvent`]. The text format is meant
//! for people following a CI log (`+ fs/read.js`); the JSON format writes one
//! tagged object per line for machines. Ignored entries are only visible in
//! the JSON format.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use serde::Deserialize;
use serde::Serialize;

use crate::interfaces::LedgerEvent;
use crate::interfaces::ProgressError;
use crate::interfaces::ProgressSink;
use crate::interfaces::SkipReason;

// ============================================================================
// SECTION: Format
// ============================================================================

/// Event log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

// ============================================================================
// SECTION: Event Log
// ============================================================================

/// Writer-backed progress sink.
pub struct EventLog<W: Write + Send> {
    /// Output writer.
    writer: Mutex<W>,
    /// Record format.
    format: LogFormat,
}

impl<W: Write + Send> EventLog<W> {
    /// Creates an event log in the given format.
    pub const fn new(writer: W, format: LogFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    /// Consumes the log and returns its writer.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError`] when the writer mutex is poisoned.
    pub fn into_inner(self) -> Result<W, ProgressError> {
        self.writer
            .into_inner()
            .map_err(|_| ProgressError::WriteFailed("log writer mutex poisoned".to_string()))
    }
}

impl<W: Write + Send> ProgressSink for EventLog<W> {
    fn record(&self, event: &LedgerEvent) -> Result<(), ProgressError> {
        let line = match self.format {
            LogFormat::Text => match text_line(event) {
                Some(line) => line,
                None => return Ok(()),
            },
            LogFormat::Json => serde_json::to_string(event)
                .map_err(|err| ProgressError::WriteFailed(err.to_string()))?,
        };
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| ProgressError::WriteFailed("log writer mutex poisoned".to_string()))?;
        writeln!(guard, "{line}").map_err(|err| ProgressError::WriteFailed(err.to_string()))?;
        guard.flush().map_err(|err| ProgressError::WriteFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}

/// Renders the text form of an event; `None` for events not shown as text.
fn text_line(event: &LedgerEvent) -> Option<String> {
    match event {
        LedgerEvent::CorpusReady {
            ..
        }
        | LedgerEvent::EntryIgnored {
            ..
        } => None,
        LedgerEvent::TestAdded {
            destination,
        } => Some(format!("+ {destination}")),
        LedgerEvent::TestSkipped {
            path,
            reason,
        } => {
            let reason = match reason {
                SkipReason::SkipRule => "skip rule",
                SkipReason::ResumeOffset => "resume offset",
            };
            Some(format!("~ {path} ({reason})"))
        }
        LedgerEvent::TestStarted {
            path,
        } => Some(format!("\n> {path}")),
        LedgerEvent::TestPassed {
            path,
        } => Some(format!("ok {path}")),
        LedgerEvent::TestFailed {
            path,
            code,
            error,
        } => Some(match (code, error) {
            (_, Some(error)) => format!("FAIL {path} ({error})"),
            (Some(code), None) => format!("FAIL {path} (exit {code})"),
            (None, None) => format!("FAIL {path} (terminated)"),
        }),
        LedgerEvent::LoopAborted {
            path,
        } => Some(format!("bail: stopping after {path}")),
    }
}
