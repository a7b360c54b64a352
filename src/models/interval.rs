//! Shift interval models.
//!
//! An [`Interval`] is the numeric form of one owner's shift, a
//! [`ShiftEntry`] is its textual `H:MM` form used at the boundary
//! (construction input and staged edits), and a [`Row`] is one visual
//! lane of mutually non-overlapping intervals.

use serde::{Deserialize, Serialize};

use super::time::{format_time, parse_time, TimePoint};
use crate::error::{BoardError, BoardResult};

/// Stable identifier of a roster entry (e.g. an employee code).
pub type OwnerId = String;

/// A shift `[start, end)` in minutes since midnight.
///
/// Half-open: an interval ending at 11:00 does not overlap one starting
/// at 11:00.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Owner of the shift.
    pub owner: OwnerId,
    /// Start (inclusive).
    pub start: TimePoint,
    /// End (exclusive).
    pub end: TimePoint,
}

impl Interval {
    /// Creates a new interval. Width is not checked here; see [`Interval::validate`].
    pub fn new(owner: impl Into<OwnerId>, start: TimePoint, end: TimePoint) -> Self {
        Self {
            owner: owner.into(),
            start,
            end,
        }
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration(&self) -> TimePoint {
        self.end - self.start
    }

    /// Whether two intervals share any instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether this is a committable shift (`start < end`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Rejects zero- and negative-width intervals.
    pub fn validate(&self) -> BoardResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(BoardError::InvalidInterval {
                owner: self.owner.clone(),
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Textual form of this interval.
    pub fn to_entry(&self) -> ShiftEntry {
        ShiftEntry {
            owner: self.owner.clone(),
            start: format_time(self.start),
            end: format_time(self.end),
        }
    }
}

/// A shift with `H:MM` times, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Owner of the shift.
    pub owner: OwnerId,
    /// Start time, `H:MM`.
    pub start: String,
    /// End time, `H:MM`.
    pub end: String,
}

/// A completed drag result waiting for the next save.
pub type PendingEdit = ShiftEntry;

impl ShiftEntry {
    /// Creates a new entry.
    pub fn new(
        owner: impl Into<OwnerId>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both times. Does not check `start < end`.
    ///
    /// # Errors
    /// [`BoardError::MalformedTime`] for the first unparseable time.
    pub fn to_interval(&self) -> BoardResult<Interval> {
        Ok(Interval::new(
            self.owner.clone(),
            parse_time(&self.start)?,
            parse_time(&self.end)?,
        ))
    }
}

/// One visual lane: intervals ordered by start, pairwise non-overlapping.
///
/// Invariant: `intervals[i].end <= intervals[i + 1].start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    intervals: Vec<Interval>,
}

impl Row {
    /// Opens a row holding a single interval.
    pub fn with_first(interval: Interval) -> Self {
        Self {
            intervals: vec![interval],
        }
    }

    /// Whether `interval` can be appended without breaking the row invariant.
    pub fn accepts(&self, interval: &Interval) -> bool {
        self.last_end().map_or(true, |end| end <= interval.start)
    }

    /// Appends an interval. Callers check [`Row::accepts`] first.
    pub(crate) fn push(&mut self, interval: Interval) {
        debug_assert!(self.accepts(&interval));
        self.intervals.push(interval);
    }

    /// End of the most recently placed interval.
    pub fn last_end(&self) -> Option<TimePoint> {
        self.intervals.last().map(|i| i.end)
    }

    /// Intervals in start order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals in this row.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the row is empty.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Owners in row order.
    pub fn owners(&self) -> Vec<&str> {
        self.intervals.iter().map(|i| i.owner.as_str()).collect()
    }
}
