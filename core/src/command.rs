//! Command recognition.
//!
//! A raw input line is matched against a fixed priority list: `q`, then `r <file>` and
//! `w <file>`, then the address-taking verbs in [`Verb::PRIORITY`] order. The first match
//! wins, so `1d2p` is a print command (with a malformed address), never a delete.

use crate::{
    address::{parse_address, Address, Verb},
    error::UnknownCommandSnafu,
    Error, Result,
};
use std::path::PathBuf;

/// Parsed command, ready to run against a [`crate::LineStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q`
    Quit,
    /// `r <file>`: replace the buffer with the file's lines.
    Read { path: PathBuf },
    /// `w <file>`: write the buffer to the file.
    Write { path: PathBuf },
    /// `[s[,e]]p`
    Print { start: usize, end: usize },
    /// `[s[,e]]d`
    Delete { start: usize, end: usize },
    /// `[n]a`: append-mode after line `n`. Given a pair, the second address is used.
    Append { after: usize },
    /// `[n]i`: append-mode before line `n`. Given a pair, the second address is used.
    Insert { before: usize },
    /// `[s[,e]]c`: read a block, then replace the range with it.
    Change { start: usize, end: usize },
    /// `[s[,e]]n`
    Numbered { start: usize, end: usize },
    /// `[s[,e]]=`; `range` is `None` when no address was written.
    LineCount { range: Option<(usize, usize)> },
}

impl Command {
    /// Recognize `input` (terminator already stripped) against a buffer of `line_count`
    /// lines.
    pub fn parse(input: &str, line_count: usize) -> Result<Self> {
        if input == "q" {
            return Ok(Self::Quit);
        }
        if let Some(path) = input.strip_prefix("r ") {
            return Ok(Self::Read {
                path: PathBuf::from(path.trim()),
            });
        }
        if let Some(path) = input.strip_prefix("w ") {
            return Ok(Self::Write {
                path: PathBuf::from(path.trim()),
            });
        }

        for verb in Verb::PRIORITY {
            match parse_address(input, verb, line_count) {
                Ok(address) => return Ok(Self::from_address(verb, address)),
                Err(Error::NoAddressMatch { .. }) => continue,
                Err(err) => return Err(err),
            }
        }

        UnknownCommandSnafu { input }.fail()
    }

    fn from_address(verb: Verb, address: Address) -> Self {
        let Address {
            start,
            end,
            explicit,
        } = address;
        match verb {
            Verb::Print => Self::Print { start, end },
            Verb::Delete => Self::Delete { start, end },
            Verb::Append => Self::Append { after: end },
            Verb::Insert => Self::Insert { before: end },
            Verb::Change => Self::Change { start, end },
            Verb::Numbered => Self::Numbered { start, end },
            Verb::LineCount => Self::LineCount {
                range: explicit.then_some((start, end)),
            },
        }
    }
}
