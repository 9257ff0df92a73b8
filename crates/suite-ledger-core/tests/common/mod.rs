// crates/suite-ledger-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Fakes for the formatter, runtime, bootstrap, and progress sink.
// Purpose: Drive both phases without spawning processes.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use suite_ledger_core::BootstrapError;
use suite_ledger_core::BootstrapOutcome;
use suite_ledger_core::CorpusBootstrap;
use suite_ledger_core::FormatError;
use suite_ledger_core::Formatter;
use suite_ledger_core::Layout;
use suite_ledger_core::LedgerEvent;
use suite_ledger_core::ProgressError;
use suite_ledger_core::ProgressSink;
use suite_ledger_core::RuntimeError;
use suite_ledger_core::RuntimeExit;
use suite_ledger_core::TestRuntime;

/// Marker prepended by [`FakeFormatter`].
pub const FORMATTED_MARKER: &str = "// formatted\n";

/// Formatter that prepends a marker, or fails when the source contains a token.
#[derive(Default)]
pub struct FakeFormatter {
    pub fail_on: Option<String>,
    pub calls: Mutex<u32>,
}

impl FakeFormatter {
    pub fn failing_on(token: &str) -> Self {
        Self {
            fail_on: Some(token.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

impl Formatter for FakeFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        *self.calls.lock().unwrap() += 1;
        if let Some(token) = &self.fail_on {
            if source.contains(token.as_str()) {
                return Err(FormatError::Failed {
                    status: "exit status: 2".to_string(),
                    stderr: "SyntaxError: unexpected token".to_string(),
                });
            }
        }
        Ok(format!("{FORMATTED_MARKER}{source}"))
    }
}

/// Bootstrap that reports the corpus as present.
pub struct PresentCorpus;

impl CorpusBootstrap for PresentCorpus {
    fn ensure(&self, _corpus_root: &Path) -> Result<BootstrapOutcome, BootstrapError> {
        Ok(BootstrapOutcome::AlreadyPresent)
    }
}

/// Bootstrap that always fails.
pub struct BrokenCheckout;

impl CorpusBootstrap for BrokenCheckout {
    fn ensure(&self, _corpus_root: &Path) -> Result<BootstrapOutcome, BootstrapError> {
        Err(BootstrapError::Failed("exit status: 128".to_string()))
    }
}

/// Runtime that records every spawn and fails selected filenames.
#[derive(Default)]
pub struct ScriptedRuntime {
    pub failing: BTreeSet<String>,
    pub unspawnable: BTreeSet<String>,
    pub spawned: Mutex<Vec<PathBuf>>,
}

impl ScriptedRuntime {
    pub fn failing(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|name| (*name).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn spawned_names(&self) -> Vec<String> {
        self.spawned
            .lock()
            .unwrap()
            .iter()
            .map(|path| {
                let group = path.parent().unwrap().file_name().unwrap().to_string_lossy();
                let name = path.file_name().unwrap().to_string_lossy();
                format!("{group}/{name}")
            })
            .collect()
    }
}

impl TestRuntime for ScriptedRuntime {
    fn run_test(&self, path: &Path) -> Result<RuntimeExit, RuntimeError> {
        self.spawned.lock().unwrap().push(path.to_path_buf());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        if self.unspawnable.contains(&name) {
            return Err(RuntimeError::Spawn("No such file or directory".to_string()));
        }
        if self.failing.contains(&name) {
            return Ok(RuntimeExit::with_code(1));
        }
        Ok(RuntimeExit::with_code(0))
    }
}

/// Sink that keeps every event in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<LedgerEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn record(&self, event: &LedgerEvent) -> Result<(), ProgressError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Writes `contents` to `root/relative`, creating parents.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// Builds a layout with the default directory names below `test_root`.
pub fn test_layout(test_root: &Path) -> Layout {
    let corpus_root = test_root.join("node");
    Layout {
        test_root: test_root.to_path_buf(),
        scan_root: corpus_root.join("test"),
        corpus_root,
        manifest_path: test_root.join("tests.json"),
        summary_path: test_root.join("summary.json"),
    }
}
