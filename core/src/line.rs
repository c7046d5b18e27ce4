//! A single buffer line.
//!
//! Lines are stored as raw bytes including their terminator, so a file that is read and
//! written back comes out byte-for-byte identical, whether or not it is valid UTF-8 and
//! whether or not its final line ends in a newline.

use std::{borrow::Cow, fmt};

/// One line of text, terminator included when present.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Line(Vec<u8>);

impl Line {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_terminated(&self) -> bool {
        self.0.ends_with(b"\n")
    }

    /// The line without its trailing `\n` or `\r\n`.
    pub fn content(&self) -> &[u8] {
        let bytes = self.0.strip_suffix(b"\n").unwrap_or(&self.0);
        bytes.strip_suffix(b"\r").unwrap_or(bytes)
    }

    /// Content decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.content())
    }

    /// A lone `.` ends append-mode.
    pub fn is_append_terminator(&self) -> bool {
        self.content() == b"."
    }

    /// Copy of this line prefixed with its address and a tab, as printed by `n`.
    pub fn numbered(&self, address: usize) -> Self {
        let mut bytes = format!("{address}\t").into_bytes();
        bytes.extend_from_slice(&self.0);
        Self(bytes)
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
