// crates/suite-ledger-core/src/runtime/execution.rs
// ============================================================================
// Module: Suite Ledger Execution Loop
// Description: Sequential test execution with bail-on-first-failure.
// Purpose: Run each selected test once and count passes and failures.
// Dependencies: crate::{interfaces, runtime::selector}
// ============================================================================

//! ## Overview
//! The loop moves `Idle → Running → {Completed | Aborted}`. Each queued test
//! is `Skipped`, `Passed`, or `Failed`. Skipped tests never reach the runtime
//! and never touch the counters. A spawn error counts as a failure. With bail
//! enabled, the first failure aborts the loop; bail is only checked between
//! tests, so a running test is never interrupted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::interfaces::LedgerEvent;
use crate::interfaces::ProgressError;
use crate::interfaces::ProgressSink;
use crate::interfaces::TestRuntime;
use crate::runtime::selector::SelectedTest;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Execution loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Not started.
    Idle,
    /// Executing the queue.
    Running,
    /// Every queued test was processed.
    Completed,
    /// Stopped early by bail.
    Aborted,
}

/// Per-test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    /// Not executed.
    Skipped,
    /// Exited with status zero.
    Passed,
    /// Exited non-zero, was killed, or failed to spawn.
    Failed,
}

/// Counters accumulated by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunCounters {
    /// Passed tests.
    pub pass: u64,
    /// Failed tests.
    pub fail: u64,
    /// Skipped tests (informational; not persisted).
    pub skipped: u64,
}

/// Final loop report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Terminal state: `Completed` or `Aborted`.
    pub state: LoopState,
    /// Counters for exactly the tests that ran.
    pub counters: RunCounters,
}

// ============================================================================
// SECTION: Loop
// ============================================================================

/// Sequential test executor.
pub struct ExecutionLoop<'a, R: TestRuntime + ?Sized, S: ProgressSink + ?Sized> {
    /// Runtime used to execute each test.
    runtime: &'a R,
    /// Progress sink.
    sink: &'a S,
    /// Stop at the first failure.
    bail: bool,
    /// Current state.
    state: LoopState,
}

impl<'a, R: TestRuntime + ?Sized, S: ProgressSink + ?Sized> ExecutionLoop<'a, R, S> {
    /// Creates an idle loop.
    pub const fn new(runtime: &'a R, sink: &'a S, bail: bool) -> Self {
        Self {
            runtime,
            sink,
            bail,
            state: LoopState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Executes `queue` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError`] when progress cannot be recorded. Test
    /// failures are never errors.
    pub fn run(&mut self, queue: &[SelectedTest]) -> Result<RunReport, ProgressError> {
        self.state = LoopState::Running;
        let mut counters = RunCounters::default();
        for test in queue {
            match self.execute(test)? {
                TestOutcome::Skipped => counters.skipped += 1,
                TestOutcome::Passed => counters.pass += 1,
                TestOutcome::Failed => {
                    counters.fail += 1;
                    if self.bail {
                        self.state = LoopState::Aborted;
                        self.sink.record(&LedgerEvent::LoopAborted {
                            path: test.display_path(),
                        })?;
                        return Ok(RunReport {
                            state: self.state,
                            counters,
                        });
                    }
                }
            }
        }
        self.state = LoopState::Completed;
        Ok(RunReport {
            state: self.state,
            counters,
        })
    }

    /// Runs or skips a single test.
    fn execute(&self, test: &SelectedTest) -> Result<TestOutcome, ProgressError> {
        let path = test.display_path();
        if let Some(reason) = test.skip {
            self.sink.record(&LedgerEvent::TestSkipped {
                path,
                reason,
            })?;
            return Ok(TestOutcome::Skipped);
        }

        self.sink.record(&LedgerEvent::TestStarted {
            path: path.clone(),
        })?;
        match self.runtime.run_test(&test.path) {
            Ok(exit) if exit.success() => {
                self.sink.record(&LedgerEvent::TestPassed {
                    path,
                })?;
                Ok(TestOutcome::Passed)
            }
            Ok(exit) => {
                self.sink.record(&LedgerEvent::TestFailed {
                    path,
                    code: exit.code,
                    error: None,
                })?;
                Ok(TestOutcome::Failed)
            }
            Err(err) => {
                self.sink.record(&LedgerEvent::TestFailed {
                    path,
                    code: None,
                    error: Some(err.to_string()),
                })?;
                Ok(TestOutcome::Failed)
            }
        }
    }
}
