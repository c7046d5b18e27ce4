//! The ordered line buffer.
//!
//! [`LineStore`] owns every line of the document. Addresses are 1-based; `0` is only
//! meaningful as an insertion point ("before line 1"). Every operation that takes an
//! address validates it and returns [`Error::Range`] instead of panicking, leaving the
//! buffer untouched on failure.

use crate::{
    error::{CapacityExceededSnafu, RangeSnafu},
    Line, Result,
};
use snafu::ensure;

/// Capacity used when no configuration overrides it.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Outcome of [`LineStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines now in the buffer.
    pub stored: usize,
    /// Lines discarded because the buffer hit its capacity.
    pub dropped: usize,
}

impl LoadReport {
    pub fn truncated(&self) -> bool {
        self.dropped > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
    capacity: usize,
}

impl Default for LineStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::new(),
            capacity,
        }
    }

    /// Current line count, `N`.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.capacity
    }

    /// The line at a 1-based address.
    pub fn get(&self, address: usize) -> Option<&Line> {
        address.checked_sub(1).and_then(|index| self.lines.get(index))
    }

    /// Replace the whole buffer.
    ///
    /// Lines past the capacity are dropped and counted in the returned report rather
    /// than failing the load.
    pub fn load(&mut self, lines: impl IntoIterator<Item = Line>) -> LoadReport {
        self.lines.clear();
        let mut dropped = 0;
        for line in lines {
            if self.lines.len() < self.capacity {
                self.lines.push(line);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(
                capacity = self.capacity,
                dropped,
                "load truncated at buffer capacity"
            );
        }
        LoadReport {
            stored: self.lines.len(),
            dropped,
        }
    }

    /// Check `1 <= start <= end <= N`.
    pub fn validate_range(&self, start: usize, end: usize) -> Result<()> {
        let len = self.lines.len();
        ensure!(
            start >= 1 && start <= end && end <= len,
            RangeSnafu { start, end, len }
        );
        Ok(())
    }

    /// Lines `start..=end`, in order.
    pub fn lines_in_range(&self, start: usize, end: usize) -> Result<&[Line]> {
        self.validate_range(start, end)?;
        Ok(&self.lines[start - 1..end])
    }

    /// Remove lines `start..=end`; later lines shift down. Returns the number removed.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<usize> {
        self.validate_range(start, end)?;
        self.lines.drain(start - 1..end);
        Ok(end - start + 1)
    }

    /// Insert `lines` after `position` (`0..=N`), in the order given.
    ///
    /// Nothing is inserted when the result would exceed the capacity.
    pub fn insert_after(
        &mut self,
        position: usize,
        lines: impl IntoIterator<Item = Line>,
    ) -> Result<usize> {
        let len = self.lines.len();
        ensure!(
            position <= len,
            RangeSnafu {
                start: position,
                end: position,
                len,
            }
        );
        let lines: Vec<Line> = lines.into_iter().collect();
        ensure!(
            len + lines.len() <= self.capacity,
            CapacityExceededSnafu {
                capacity: self.capacity
            }
        );
        let count = lines.len();
        self.lines.splice(position..position, lines);
        Ok(count)
    }

    /// Replace lines `start..=end` with `lines`.
    ///
    /// Capacity is checked against the buffer length after the range is removed.
    pub fn replace_range(
        &mut self,
        start: usize,
        end: usize,
        lines: impl IntoIterator<Item = Line>,
    ) -> Result<usize> {
        self.validate_range(start, end)?;
        let lines: Vec<Line> = lines.into_iter().collect();
        let remaining = self.lines.len() - (end - start + 1);
        ensure!(
            remaining + lines.len() <= self.capacity,
            CapacityExceededSnafu {
                capacity: self.capacity
            }
        );
        let count = lines.len();
        self.lines.splice(start - 1..end, lines);
        Ok(count)
    }

    /// Every line, for writing out.
    pub fn snapshot(&self) -> Vec<Line> {
        self.lines.clone()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}
