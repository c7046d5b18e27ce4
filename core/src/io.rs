//! Collaborators the session talks to: where command lines come from, where output
//! goes, and how files are read and written.
//!
//! The traits keep [`crate::Session`] free of any particular stream, so tests can drive it
//! from a byte slice and capture its output in a `Vec<u8>`.

use crate::{
    error::{IoSnafu, OutputSnafu},
    Line, Result,
};
use snafu::ResultExt;
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// Source of raw input lines.
pub trait InputSource {
    /// The next line, or `None` at end of input. An empty line is `Some`.
    fn next_line(&mut self) -> io::Result<Option<Line>>;
}

/// Status shown to the user after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// `?`
    Error,
    /// A line or byte count.
    Count(usize),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "?"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// Line-oriented display.
pub trait OutputSink {
    /// Show a buffer line, adding a newline if it has none.
    fn display(&mut self, line: &Line) -> Result<()>;

    fn report(&mut self, report: Report) -> Result<()>;
}

pub trait FileLoader {
    fn load_from_path(&mut self, path: &Path) -> Result<Vec<Line>>;
}

pub trait FileWriter {
    /// Write every line verbatim, returning the number of bytes written.
    fn write_to_path(&mut self, path: &Path, lines: &[Line]) -> Result<usize>;
}

/// One line from `reader`, terminator included.
fn read_line(reader: &mut impl BufRead) -> io::Result<Option<Line>> {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(Line::new(buf))),
    }
}

/// [`InputSource`] over a [`BufRead`], such as locked stdin or a byte slice.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        read_line(&mut self.reader)
    }
}

/// [`OutputSink`] over any writer.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn display(&mut self, line: &Line) -> Result<()> {
        self.writer.write_all(line.as_bytes()).context(OutputSnafu)?;
        if !line.is_terminated() {
            self.writer.write_all(b"\n").context(OutputSnafu)?;
        }
        Ok(())
    }

    fn report(&mut self, report: Report) -> Result<()> {
        writeln!(self.writer, "{report}").context(OutputSnafu)?;
        self.writer.flush().context(OutputSnafu)
    }
}

/// Files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FileLoader for LocalFs {
    fn load_from_path(&mut self, path: &Path) -> Result<Vec<Line>> {
        let file = File::open(path).context(IoSnafu { path })?;
        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();
        while let Some(line) = read_line(&mut reader).context(IoSnafu { path })? {
            lines.push(line);
        }
        tracing::info!(path = %path.display(), lines = lines.len(), "read file");
        Ok(lines)
    }
}

impl FileWriter for LocalFs {
    fn write_to_path(&mut self, path: &Path, lines: &[Line]) -> Result<usize> {
        let file = File::create(path).context(IoSnafu { path })?;
        let mut writer = BufWriter::new(file);
        let mut bytes = 0;
        for line in lines {
            writer
                .write_all(line.as_bytes())
                .context(IoSnafu { path })?;
            bytes += line.as_bytes().len();
        }
        writer.flush().context(IoSnafu { path })?;
        tracing::info!(path = %path.display(), bytes, "wrote file");
        Ok(bytes)
    }
}
