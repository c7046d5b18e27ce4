//! The line-buffer engine behind `tined`, a tiny `ed`-style line editor.
//!
//! Input lines flow through three layers:
//!
//! 1. [`address`] pulls the `start[,end]` prefix off a command for a given verb,
//!    applying that verb's default when none is written.
//! 2. [`Command::parse`] tries `q`, `r <file>`, `w <file>` and then each address verb in
//!    a fixed priority order, producing a [`Command`].
//! 3. [`Session`] runs the command against its [`LineStore`], entering append-mode for
//!    `a`, `i` and `c`, and reports any failure as `?`.
//!
//! Reading input, writing output and file access go through the traits in [`io`], so the
//! engine never touches a real stream directly.

pub mod address;
pub mod command;
pub mod error;
pub mod io;
pub mod line;
pub mod session;
pub mod store;

pub use address::{parse_address, Address, Verb};
pub use command::Command;
pub use error::{Error, Result};
pub use io::{
    FileLoader, FileWriter, InputSource, LocalFs, OutputSink, ReaderSource, Report, WriterSink,
};
pub use line::Line;
pub use session::{Exit, Session, SessionConfig, Step};
pub use store::{LineStore, LoadReport, DEFAULT_CAPACITY};
