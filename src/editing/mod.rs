//! Interactive editing.
//!
//! Turns a pointer gesture on an interval edge into a clamped, grid-snapped
//! interval change and stages it until an explicit save.

mod session;

pub use session::{DragState, Edge, EditSession};
