//! Command interpreter
//!
//! Owns one session's symbol tables and turns raw lines into state changes
//! or answers. `process_command` is the logging boundary: every line emits
//! exactly one start event and one end (or end_error) event.

use std::io::Write;
use std::time::Instant;

use merchant_core_types::SessionId;

use crate::apply::apply;
use crate::commands::Command;
use crate::errors::{ExErrorKind, Result};
use crate::input::LineSource;
use crate::ops::{SymbolTables, TablesSnapshot};
use crate::{log_op_end, log_op_error, log_op_start};

/// Printed by the batch loop in place of any classified input error
pub const FALLBACK_MESSAGE: &str = "I have no idea what you are talking about";

/// Outcome of one `process_input` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines pulled from the source, including the one that failed
    pub lines_read: usize,
    /// Answers written to the sink
    pub answers: usize,
    /// Kind of the error that stopped the run, if any
    pub aborted_with: Option<ExErrorKind>,
}

impl RunSummary {
    pub fn aborted(&self) -> bool {
        self.aborted_with.is_some()
    }
}

/// Interpreter for one independent conversation
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    session_id: SessionId,
    tables: SymbolTables,
}

impl CommandInterpreter {
    /// Create an interpreter with empty tables and a fresh session id
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter under an existing session id
    pub fn with_session_id(session_id: SessionId) -> Self {
        Self {
            session_id,
            tables: SymbolTables::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn tables(&self) -> &SymbolTables {
        &self.tables
    }

    /// Sorted, serializable copy of the current tables
    pub fn snapshot(&self) -> TablesSnapshot {
        self.tables.snapshot()
    }

    /// Process one line
    ///
    /// Returns `Ok(None)` for an accepted instruction and `Ok(Some(answer))`
    /// for an answered question. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns the classified error for malformed input; the tables are
    /// unchanged in that case.
    pub fn process_command(&mut self, line: &str) -> Result<Option<String>> {
        let start = Instant::now();
        let line = line.trim();
        log_op_start!("process_command", &self.session_id);

        let result = Command::parse(line).and_then(|cmd| {
            tracing::debug!(
                session_id = self.session_id.as_str(),
                command = cmd.name(),
                "classified line"
            );
            apply(&mut self.tables, cmd)
        });

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(answer) => {
                log_op_end!(
                    "process_command",
                    &self.session_id,
                    duration_ms = duration_ms,
                    answered = answer.is_some()
                );
            }
            Err(err) => {
                log_op_error!(
                    "process_command",
                    &self.session_id,
                    err,
                    duration_ms = duration_ms
                );
            }
        }

        result
    }

    /// Run every line of a source, writing answers to `out`
    ///
    /// Stops at the first classified input error, writing
    /// [`FALLBACK_MESSAGE`] instead of the answer. Lines already processed
    /// keep their effects.
    ///
    /// # Errors
    ///
    /// Returns `Io` only when the source or the sink fails.
    pub fn process_input<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<RunSummary>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let start = Instant::now();
        let mut summary = RunSummary::default();
        log_op_start!("process_input", &self.session_id);

        while source.fetch_next()? {
            summary.lines_read += 1;
            let line = source.current_line().unwrap_or_default().to_string();

            match self.process_command(&line) {
                Ok(Some(answer)) => {
                    writeln!(out, "{}", answer)?;
                    summary.answers += 1;
                }
                Ok(None) => {}
                Err(err) if err.kind().is_input_error() => {
                    writeln!(out, "{}", FALLBACK_MESSAGE)?;
                    summary.aborted_with = Some(err.kind());
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        out.flush()?;

        log_op_end!(
            "process_input",
            &self.session_id,
            duration_ms = start.elapsed().as_millis() as u64,
            lines_read = summary.lines_read as u64,
            answers = summary.answers as u64
        );
        Ok(summary)
    }
}
