//! Per-group roster and cached row layout.

use std::collections::HashMap;

use super::packer::pack;
use crate::error::{BoardError, BoardResult};
use crate::models::{GroupInput, Interval, OwnerId, Row};
use crate::validation::split_roster;

/// One named group: its roster and the packed rows derived from it.
///
/// `rows` is a cache of `pack(roster)`. Replacing the roster marks it stale
/// until the next [`GroupSchedule::recompute`].
#[derive(Debug, Clone)]
pub struct GroupSchedule {
    name: String,
    roster: Vec<Interval>,
    rows: Vec<Row>,
    /// owner → (row index, position in row), valid while not stale.
    index: HashMap<OwnerId, (usize, usize)>,
    stale: bool,
}

impl GroupSchedule {
    /// Creates an empty group with no rows.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Vec::new(),
            rows: Vec::new(),
            index: HashMap::new(),
            stale: false,
        }
    }

    /// Builds a group from host input and packs it.
    ///
    /// Returns the group together with the entries excluded from its roster.
    ///
    /// # Errors
    /// [`BoardError::MalformedTime`] if any
    /// time fails to parse; no group is built.
    pub fn from_input(input: &GroupInput) -> BoardResult<(Self, Vec<BoardError>)> {
        let intervals = input
            .roster
            .iter()
            .map(|entry| entry.to_interval())
            .collect::<BoardResult<Vec<_>>>()?;

        let mut group = Self::new(input.name.clone());
        let rejected = group.set_roster(intervals);
        group.recompute()?;
        Ok((group, rejected))
    }

    /// Replaces the roster wholesale and marks the layout stale.
    ///
    /// Zero-width intervals and repeated owners are excluded and returned.
    pub fn set_roster(&mut self, intervals: Vec<Interval>) -> Vec<BoardError> {
        let (kept, rejected) = split_roster(&self.name, intervals);
        for e in &rejected {
            log::warn!("group '{}': excluded roster entry: {e}", self.name);
        }
        self.roster = kept;
        self.stale = true;
        rejected
    }

    /// Re-packs the roster if it changed since the last call.
    ///
    /// On error the previous rows stay in place.
    pub fn recompute(&mut self) -> BoardResult<()> {
        if !self.stale {
            return Ok(());
        }

        let rows = pack(&self.roster)?;
        self.index = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.intervals()
                    .iter()
                    .enumerate()
                    .map(move |(p, i)| (i.owner.clone(), (r, p)))
            })
            .collect();
        self.rows = rows;
        self.stale = false;
        Ok(())
    }

    /// All rows concatenated in row order, each in start order.
    ///
    /// This is the layout the user saw, which is what edits apply to.
    pub fn flatten_rows(&self) -> Vec<Interval> {
        self.rows
            .iter()
            .flat_map(|row| row.intervals().iter().cloned())
            .collect()
    }

    /// Group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current roster in insertion order.
    pub fn roster(&self) -> &[Interval] {
        &self.roster
    }

    /// Packed rows as of the last recompute.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the rows lag behind the roster.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Displayed interval for an owner.
    pub fn interval(&self, owner: &str) -> Option<&Interval> {
        let &(r, p) = self.index.get(owner)?;
        self.rows.get(r)?.intervals().get(p)
    }

    /// Row index currently holding an owner.
    pub fn row_of(&self, owner: &str) -> Option<usize> {
        self.index.get(owner).map(|&(r, _)| r)
    }
}
