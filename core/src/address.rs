//! Address parsing.
//!
//! The address of a command is everything before the first occurrence of its verb
//! character: `3,7d` addresses `3..=7`, `5a` addresses `5`, and a bare `p` falls back to
//! the verb's default. Addresses are resolved against the current line count but not
//! bounds-checked here; [`crate::LineStore`] rejects out-of-range addresses when the
//! command runs.

use crate::{
    error::{MalformedAddressSnafu, NoAddressMatchSnafu},
    Result,
};
use snafu::OptionExt;

/// Address-taking command letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Print,
    Delete,
    Append,
    Insert,
    Change,
    Numbered,
    LineCount,
}

impl Verb {
    /// Checked in this order; the first verb whose character occurs in the input wins.
    pub const PRIORITY: [Verb; 7] = [
        Verb::Print,
        Verb::Delete,
        Verb::Append,
        Verb::Insert,
        Verb::Change,
        Verb::Numbered,
        Verb::LineCount,
    ];

    pub fn as_char(self) -> char {
        match self {
            Self::Print => 'p',
            Self::Delete => 'd',
            Self::Append => 'a',
            Self::Insert => 'i',
            Self::Change => 'c',
            Self::Numbered => 'n',
            Self::LineCount => '=',
        }
    }

    /// Address used when none is written.
    pub fn default_address(self, line_count: usize) -> usize {
        match self {
            Self::Insert => 1,
            Self::Print
            | Self::Delete
            | Self::Append
            | Self::Change
            | Self::Numbered
            | Self::LineCount => line_count,
        }
    }
}

/// A resolved `start..=end` address. Single addresses have `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub start: usize,
    pub end: usize,
    /// Whether the address came from the input rather than the verb's default.
    pub explicit: bool,
}

impl Address {
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
            explicit: true,
        }
    }

    pub fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            explicit: true,
        }
    }

    fn defaulted(line: usize) -> Self {
        Self {
            start: line,
            end: line,
            explicit: false,
        }
    }
}

/// Extract the address preceding `verb` in `input`.
///
/// Fails with [`crate::Error::NoAddressMatch`] when the verb character is absent, and
/// with [`crate::Error::MalformedAddress`] when the prefix is neither `n` nor `n,m`.
pub fn parse_address(input: &str, verb: Verb, line_count: usize) -> Result<Address> {
    let verb_char = verb.as_char();
    let at = input
        .find(verb_char)
        .context(NoAddressMatchSnafu { verb: verb_char })?;
    let expr = input[..at].trim();

    if expr.is_empty() {
        return Ok(Address::defaulted(verb.default_address(line_count)));
    }

    match expr.split_once(',') {
        Some((start, end)) => Ok(Address::range(parse_number(start)?, parse_number(end)?)),
        None => Ok(Address::single(parse_number(expr)?)),
    }
}

fn parse_number(text: &str) -> Result<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return MalformedAddressSnafu { text }.fail();
    }
    text.parse()
        .ok()
        .context(MalformedAddressSnafu { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parses_pair() {
        assert_eq!(
            parse_address("3,7d", Verb::Delete, 10).unwrap(),
            Address::range(3, 7)
        );
    }

    #[test]
    fn parses_single() {
        assert_eq!(
            parse_address("5a", Verb::Append, 10).unwrap(),
            Address::single(5)
        );
    }

    #[test]
    fn tolerates_whitespace_around_numbers() {
        assert_eq!(
            parse_address(" 2 , 4 p", Verb::Print, 10).unwrap(),
            Address::range(2, 4)
        );
    }

    #[test]
    fn reversed_pair_is_not_rejected_here() {
        let address = parse_address("5,2p", Verb::Print, 10).unwrap();
        assert_eq!((address.start, address.end), (5, 2));
    }

    #[test]
    fn range_verbs_default_to_last_line() {
        for verb in [Verb::Print, Verb::Delete, Verb::Change, Verb::Numbered] {
            let input = verb.as_char().to_string();
            let address = parse_address(&input, verb, 7).unwrap();
            assert_eq!((address.start, address.end), (7, 7));
            assert!(!address.explicit);
        }
    }

    #[test]
    fn append_defaults_to_end_and_insert_to_first_line() {
        assert_eq!(parse_address("a", Verb::Append, 4).unwrap().start, 4);
        assert_eq!(parse_address("i", Verb::Insert, 4).unwrap().start, 1);
    }

    #[test]
    fn empty_buffer_print_defaults_to_zero() {
        let address = parse_address("p", Verb::Print, 0).unwrap();
        assert_eq!((address.start, address.end), (0, 0));
    }

    #[test]
    fn missing_verb_is_no_match() {
        assert!(matches!(
            parse_address("12", Verb::Delete, 3),
            Err(Error::NoAddressMatch { verb: 'd' })
        ));
    }

    #[test]
    fn text_after_verb_is_ignored() {
        assert_eq!(
            parse_address("2pxyz", Verb::Print, 3).unwrap(),
            Address::single(2)
        );
    }

    #[test]
    fn malformed_addresses() {
        for input in ["xp", "1,p", ",2p", "-1p", "1,2,3p", "+3p", "1x2p"] {
            let err = parse_address(input, Verb::Print, 5).unwrap_err();
            assert!(
                matches!(err, Error::MalformedAddress { .. }),
                "{input}: {err}"
            );
        }
    }

    #[test]
    fn overflowing_number_is_malformed() {
        let err = parse_address("99999999999999999999999p", Verb::Print, 5).unwrap_err();
        assert!(err.is_range_error());
    }

    #[test]
    fn priority_lists_each_verb_once() {
        let mut chars: Vec<char> = Verb::PRIORITY.iter().map(|v| v.as_char()).collect();
        assert_eq!(&chars[..4], &['p', 'd', 'a', 'i']);
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), Verb::PRIORITY.len());
    }
}
