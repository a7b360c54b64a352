//! Group construction input.

use serde::{Deserialize, Serialize};

use super::interval::ShiftEntry;

/// A named group and its initial roster, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInput {
    /// Display name (e.g. a team or location).
    pub name: String,
    /// Initial shifts.
    #[serde(default)]
    pub roster: Vec<ShiftEntry>,
}

impl GroupInput {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Vec::new(),
        }
    }

    /// Adds a shift.
    pub fn with_shift(
        mut self,
        owner: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.roster.push(ShiftEntry::new(owner, start, end));
        self
    }

    /// The three-shift sample roster the timeline opens with.
    pub fn demo() -> Self {
        Self::new("Group 1")
            .with_shift("E0", "8:00", "17:00")
            .with_shift("E1", "8:00", "11:00")
            .with_shift("E2", "10:00", "16:00")
    }
}
