//! Shift timeline engine.
//!
//! Packs per-employee shift intervals into rows so overlapping shifts never
//! collide, and turns drag gestures on a bar's edges into clamped,
//! grid-snapped edits that are staged until an explicit save.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interval`, `ShiftEntry`, `Row`,
//!   `GridConfig`, `GroupInput`, and the `H:MM` time codec
//! - **`layout`**: Greedy interval partitioning and per-group row caches
//! - **`editing`**: The drag-to-resize state machine and pending-edit queue
//! - **`board`**: `ScheduleBoard`, tying groups, edits and the host renderer together
//! - **`scene`**: Pixel-space shapes for any 2-D drawing surface
//! - **`validation`**: Input integrity checks (times, widths, duplicate owners)
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. The host owns the drawing
//! surface and forwards pointer events; this crate owns the data and calls
//! back through [`Renderer`] after each change. Nothing is persisted.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

pub mod board;
pub mod editing;
pub mod error;
pub mod layout;
pub mod models;
pub mod scene;
pub mod validation;

pub use board::{Frame, NullRenderer, Renderer, ScheduleBoard};
pub use error::{BoardError, BoardResult};
pub use models::{GridConfig, GroupInput, Interval, PendingEdit, ShiftEntry};
