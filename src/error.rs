//! Error types for board operations.

use crate::models::TimePoint;

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Error type for board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Text is not a valid `H:MM` time of day.
    #[error("Malformed time '{text}': expected H:MM with hours 0-23 and minutes 0-59")]
    MalformedTime { text: String },

    /// An interval whose start is not strictly before its end.
    #[error("Invalid interval for '{owner}': start {start} is not before end {end}")]
    InvalidInterval {
        owner: String,
        start: TimePoint,
        end: TimePoint,
    },

    /// A drag event arrived in a state that does not accept it.
    #[error("Invalid drag state: {operation} is not allowed while {state}")]
    InvalidDragState {
        operation: &'static str,
        state: &'static str,
    },

    /// The same owner appears twice in one roster.
    #[error("Duplicate owner '{owner}' in group '{group}'")]
    DuplicateOwner { group: String, owner: String },

    /// Two groups share a name.
    #[error("Duplicate group name: {0}")]
    DuplicateGroup(String),

    /// No group with this name exists on the board.
    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    /// The group holds no interval for this owner.
    #[error("Unknown owner '{owner}' in group '{group}'")]
    UnknownOwner { group: String, owner: String },

    /// A pending edit names an owner that no group holds.
    #[error("Pending edit for '{0}' matches no roster entry")]
    UnmatchedEdit(String),

    /// Grid configuration is out of range.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}
