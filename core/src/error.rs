use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("address {start},{end} is outside 1..={len}"))]
    Range {
        start: usize,
        end: usize,
        len: usize,
    },

    #[snafu(display("malformed address: {text:?}"))]
    MalformedAddress { text: String },

    #[snafu(display("no '{verb}' in command"))]
    NoAddressMatch { verb: char },

    #[snafu(display("unknown command: {input:?}"))]
    UnknownCommand { input: String },

    #[snafu(display("IO error at path {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("buffer is full ({capacity} lines)"))]
    CapacityExceeded { capacity: usize },

    #[snafu(display("failed to write output: {source}"))]
    Output { source: std::io::Error },
}

impl Error {
    /// Out-of-bounds and malformed addresses are both range errors to the user.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::Range { .. } | Self::MalformedAddress { .. })
    }

    /// Everything except a failing output sink is reported as `?` and the
    /// session carries on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Output { .. })
    }
}
