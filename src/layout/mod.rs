//! Row layout.
//!
//! Packs each group's shifts into rows so that overlapping shifts never
//! share a lane, and caches the result per group.
//!
//! # Algorithm
//!
//! `pack` is greedy interval partitioning: sort by `(start, end)`, place
//! each interval in the first row that is already free. Row count is
//! minimal.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

mod group;
mod packer;

pub use group::GroupSchedule;
pub use packer::{max_overlap, pack};
