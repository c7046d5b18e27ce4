//! The command loop.
//!
//! A [`Session`] owns the [`LineStore`] and its collaborators and processes one input line
//! at a time: the line is recognized as a [`Command`], run against the buffer, and any
//! recoverable failure is shown as `?` before the next line is read. Commands `a`, `i`
//! and `c` enter append-mode, which keeps reading raw lines into the buffer until a lone
//! `.` arrives.

use crate::{
    error::{CapacityExceededSnafu, RangeSnafu},
    io::{FileLoader, FileWriter, InputSource, OutputSink, Report},
    store::DEFAULT_CAPACITY,
    Command, Line, LineStore, Result,
};
use snafu::{ensure, OptionExt};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of buffer lines.
    pub capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit(Exit),
}

pub struct Session<I, O, F> {
    store: LineStore,
    input: I,
    output: O,
    files: F,
}

impl<I, O, F> Session<I, O, F>
where
    I: InputSource,
    O: OutputSink,
    F: FileLoader + FileWriter,
{
    pub fn new(config: SessionConfig, input: I, output: O, files: F) -> Self {
        Self::with_store(LineStore::with_capacity(config.capacity), input, output, files)
    }

    pub fn with_store(store: LineStore, input: I, output: O, files: F) -> Self {
        Self {
            store,
            input,
            output,
            files,
        }
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Process input until `q` or end of input.
    ///
    /// Only a failing output sink ends the loop with an error.
    pub fn run(&mut self) -> Result<Exit> {
        loop {
            if let Step::Exit(exit) = self.step()? {
                tracing::debug!(?exit, "session ended");
                return Ok(exit);
            }
        }
    }

    /// Read and process one input line, including any append-mode block it opens.
    pub fn step(&mut self) -> Result<Step> {
        match self.next_input() {
            Some(line) => self.execute_line(&line),
            None => Ok(Step::Exit(Exit::EndOfInput)),
        }
    }

    /// Recognize and run one raw command line, reporting recoverable errors as `?`.
    pub fn execute_line(&mut self, raw: &Line) -> Result<Step> {
        let text = raw.text();
        let result =
            Command::parse(&text, self.store.len()).and_then(|command| self.execute(command));
        self.recover(result)
    }

    /// Run a parsed command, reporting recoverable errors as `?`.
    pub fn run_command(&mut self, command: Command) -> Result<Step> {
        let result = self.execute(command);
        self.recover(result)
    }

    /// Run a parsed command. Errors are returned to the caller, not reported.
    pub fn execute(&mut self, command: Command) -> Result<Step> {
        tracing::debug!(?command, lines = self.store.len(), "execute");
        match command {
            Command::Quit => return Ok(Step::Exit(Exit::Quit)),
            Command::Read { path } => self.read(&path)?,
            Command::Write { path } => {
                let bytes = self.files.write_to_path(&path, self.store.lines())?;
                self.output.report(Report::Count(bytes))?;
            },
            Command::Print { start, end } => {
                for line in self.store.lines_in_range(start, end)? {
                    self.output.display(line)?;
                }
            },
            Command::Numbered { start, end } => {
                let lines = self.store.lines_in_range(start, end)?;
                for (address, line) in (start..).zip(lines) {
                    self.output.display(&line.numbered(address))?;
                }
            },
            Command::Delete { start, end } => {
                self.store.delete_range(start, end)?;
            },
            Command::Append { after } => self.append(after)?,
            Command::Insert { before } => {
                let len = self.store.len();
                let after = before.checked_sub(1).context(RangeSnafu {
                    start: before,
                    end: before,
                    len,
                })?;
                self.append(after)?;
            },
            Command::Change { start, end } => {
                self.store.validate_range(start, end)?;
                let block = self.read_block();
                self.store.replace_range(start, end, block)?;
            },
            Command::LineCount { range } => {
                let count = match range {
                    Some((start, end)) => {
                        self.store.validate_range(start, end)?;
                        end
                    },
                    None => self.store.len(),
                };
                self.output.report(Report::Count(count))?;
            },
        }
        Ok(Step::Continue)
    }

    fn recover(&mut self, result: Result<Step>) -> Result<Step> {
        match result {
            Ok(step) => Ok(step),
            Err(err) if err.is_recoverable() => {
                tracing::debug!(%err, "command failed");
                self.output.report(Report::Error)?;
                Ok(Step::Continue)
            },
            Err(err) => Err(err),
        }
    }

    fn read(&mut self, path: &Path) -> Result<()> {
        let lines = self.files.load_from_path(path)?;
        let report = self.store.load(lines);
        self.output.report(Report::Count(report.stored))?;
        if report.truncated() {
            self.output.report(Report::Error)?;
        }
        Ok(())
    }

    /// Append-mode: insert each input line after the previous one, starting after
    /// `after`, until a lone `.` or end of input.
    ///
    /// A line that does not fit is dropped and ends append-mode with
    /// [`crate::Error::CapacityExceeded`]; anything typed after it is read as commands.
    fn append(&mut self, after: usize) -> Result<()> {
        let len = self.store.len();
        ensure!(
            after <= len,
            RangeSnafu {
                start: after,
                end: after,
                len,
            }
        );

        let mut position = after;
        while let Some(line) = self.next_input() {
            if line.is_append_terminator() {
                break;
            }
            ensure!(
                !self.store.is_full(),
                CapacityExceededSnafu {
                    capacity: self.store.capacity()
                }
            );
            position += self.store.insert_after(position, [line])?;
        }
        Ok(())
    }

    /// Collect input lines up to a lone `.` or end of input.
    fn read_block(&mut self) -> Vec<Line> {
        let mut block = Vec::new();
        while let Some(line) = self.next_input() {
            if line.is_append_terminator() {
                break;
            }
            block.push(line);
        }
        block
    }

    fn next_input(&mut self) -> Option<Line> {
        match self.input.next_line() {
            Ok(line) => line,
            Err(err) => {
                tracing::error!(%err, "failed to read input, ending session");
                None
            },
        }
    }
}
