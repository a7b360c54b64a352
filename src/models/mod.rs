//! Shift timeline domain models.
//!
//! Plain data shared by layout, editing and rendering: time-of-day values,
//! intervals and their textual form, rows, grid geometry and group input.
//!
//! # Time Model
//! Times are integer minutes since midnight ([`TimePoint`]). Text crosses
//! the boundary only as `H:MM` via [`parse_time`] / [`format_time`].

mod grid;
mod group;
mod interval;
mod time;

pub use grid::{GridConfig, GridSettings};
pub use group::GroupInput;
pub use interval::{Interval, OwnerId, PendingEdit, Row, ShiftEntry};
pub use time::{format_time, parse_time, TimePoint, MINUTES_PER_DAY, MINUTES_PER_HOUR};
