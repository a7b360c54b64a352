//! Drag-to-resize state machine.
//!
//! # States
//!
//! - `Idle`: no gesture in progress.
//! - `Dragging`: one edge of one interval follows the pointer.
//!
//! Orthogonal to the phase, completed drags accumulate in a pending queue
//! until the board saves or discards them.
//!
//! # Transitions
//!
//! | Event         | From       | To         | Effect                          |
//! |---------------|------------|------------|---------------------------------|
//! | `begin_drag`  | `Idle`     | `Dragging` | pick nearest edge, fix the other |
//! | `update_drag` | `Dragging` | `Dragging` | clamp, snap, set live value      |
//! | `end_drag`    | `Dragging` | `Idle`     | enqueue pending edit             |
//! | `cancel_drag` | `Dragging` | `Idle`     | drop the gesture                 |
//!
//! Any other event is an [`BoardError::InvalidDragState`].

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::models::{format_time, GridConfig, Interval, OwnerId, PendingEdit, TimePoint};

/// Which edge of an interval a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// The start edge moves; the end is fixed.
    Start,
    /// The end edge moves; the start is fixed.
    End,
}

/// An in-progress drag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragState {
    /// Owner of the dragged interval.
    pub owner: OwnerId,
    /// Value of the edge that does not move.
    pub anchor: TimePoint,
    /// Edge following the pointer.
    pub moving: Edge,
    /// Current clamped, snapped value of the moving edge.
    pub live: TimePoint,
}

impl DragState {
    /// The interval as currently proposed by the drag.
    pub fn interval(&self) -> Interval {
        match self.moving {
            Edge::Start => Interval::new(self.owner.clone(), self.live, self.anchor),
            Edge::End => Interval::new(self.owner.clone(), self.anchor, self.live),
        }
    }
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging(DragState),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Dragging(_) => "dragging",
        }
    }
}

/// Tracks at most one live drag plus the queue of unsaved edits.
#[derive(Debug, Clone)]
pub struct EditSession {
    grid: GridConfig,
    phase: Phase,
    pending: Vec<PendingEdit>,
}

impl EditSession {
    /// Creates an idle session with no pending edits.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            phase: Phase::Idle,
            pending: Vec::new(),
        }
    }

    /// Starts dragging the edge of `interval` nearest to `grab_x`.
    ///
    /// Distances are measured in pixels against the interval's current
    /// edges; an exact tie picks the start edge.
    pub fn begin_drag(&mut self, interval: &Interval, grab_x: f64) -> BoardResult<Edge> {
        if let Phase::Dragging(_) = self.phase {
            return Err(violation("begin_drag", self.phase.name()));
        }

        let start_x = self.grid.time_to_x(interval.start);
        let end_x = self.grid.time_to_x(interval.end);
        let (moving, anchor, live) = if (grab_x - start_x).abs() <= (grab_x - end_x).abs() {
            (Edge::Start, interval.end, interval.start)
        } else {
            (Edge::End, interval.start, interval.end)
        };

        log::debug!(
            "drag begin: owner={} edge={moving:?} anchor={}",
            interval.owner,
            format_time(anchor)
        );
        self.phase = Phase::Dragging(DragState {
            owner: interval.owner.clone(),
            anchor,
            moving,
            live,
        });
        Ok(moving)
    }

    /// Moves the live edge toward `pointer_x`.
    ///
    /// The start edge is clamped to `[grid_min, anchor - step]`, the end edge
    /// to `[anchor + step, grid_max]`, then floored onto the grid columns
    /// without leaving that range. The moving edge never reaches the anchor,
    /// so the proposed interval always keeps at least one column of width;
    /// when the anchor sits within one column of the grid edge, that column
    /// wins over the grid bound. Returns the new live value.
    pub fn update_drag(&mut self, pointer_x: f64) -> BoardResult<TimePoint> {
        let grid = self.grid;
        let drag = match &mut self.phase {
            Phase::Dragging(drag) => drag,
            Phase::Idle => return Err(violation("update_drag", "idle")),
        };

        let (lo, hi) = match drag.moving {
            Edge::Start => {
                let hi = drag.anchor - grid.step();
                (grid.grid_min().min(hi), hi)
            }
            Edge::End => {
                let lo = drag.anchor + grid.step();
                (lo, grid.grid_max().max(lo))
            }
        };
        let candidate = grid
            .x_to_time(pointer_x)
            .max(f64::from(lo))
            .min(f64::from(hi));
        drag.live = grid.snap_down(candidate).max(lo).min(hi);
        Ok(drag.live)
    }

    /// Finishes the drag and queues the resulting edit.
    ///
    /// A drag that never moved still produces an edit.
    pub fn end_drag(&mut self) -> BoardResult<PendingEdit> {
        let drag = match std::mem::take(&mut self.phase) {
            Phase::Dragging(drag) => drag,
            Phase::Idle => return Err(violation("end_drag", "idle")),
        };

        let edit = drag.interval().to_entry();
        log::debug!(
            "drag end: owner={} {}-{}",
            edit.owner,
            edit.start,
            edit.end
        );
        self.pending.push(edit.clone());
        Ok(edit)
    }

    /// Abandons the drag without queueing anything.
    pub fn cancel_drag(&mut self) -> BoardResult<DragState> {
        match std::mem::take(&mut self.phase) {
            Phase::Dragging(drag) => {
                log::debug!("drag cancelled: owner={}", drag.owner);
                Ok(drag)
            }
            Phase::Idle => Err(violation("cancel_drag", "idle")),
        }
    }

    /// Queues an edit produced outside of this session's drag handling.
    pub fn record(&mut self, edit: PendingEdit) {
        self.pending.push(edit);
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// The drag in progress, if any.
    pub fn drag(&self) -> Option<&DragState> {
        match &self.phase {
            Phase::Dragging(drag) => Some(drag),
            Phase::Idle => None,
        }
    }

    /// Whether any edits await saving.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Queued edits in enqueue order.
    pub fn pending(&self) -> &[PendingEdit] {
        &self.pending
    }

    /// Most recent queued edit for an owner.
    pub fn latest_pending(&self, owner: &str) -> Option<&PendingEdit> {
        self.pending.iter().rev().find(|e| e.owner == owner)
    }

    /// Empties the queue, returning its contents.
    pub fn take_pending(&mut self) -> Vec<PendingEdit> {
        std::mem::take(&mut self.pending)
    }

    /// Grid this session snaps and clamps against.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }
}

fn violation(operation: &'static str, state: &'static str) -> BoardError {
    let err = BoardError::InvalidDragState { operation, state };
    log::error!("{err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftEntry;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn session() -> EditSession {
        EditSession::new(GridConfig::default())
    }

    // 8:00-11:00 on the default grid spans x = 120..240.
    fn e1() -> Interval {
        Interval::new("E1", 480, 660)
    }

    #[test]
    fn test_begin_picks_nearest_edge() {
        let mut s = session();
        assert_eq!(s.begin_drag(&e1(), 130.0).unwrap(), Edge::Start);
        assert_eq!(s.drag().unwrap().anchor, 660);
        s.cancel_drag().unwrap();

        assert_eq!(s.begin_drag(&e1(), 200.0).unwrap(), Edge::End);
        assert_eq!(s.drag().unwrap().anchor, 480);
    }

    #[test]
    fn test_begin_tie_favors_start() {
        let mut s = session();
        assert_eq!(s.begin_drag(&e1(), 180.0).unwrap(), Edge::Start);
    }

    #[test]
    fn test_drag_end_edge_later() {
        let mut s = session();
        s.begin_drag(&e1(), 238.0).unwrap();
        assert_eq!(s.update_drag(300.0).unwrap(), 720); // 12:30 floors to 12:00
        assert_eq!(s.update_drag(330.0).unwrap(), 780);
        let edit = s.end_drag().unwrap();
        assert_eq!(edit, ShiftEntry::new("E1", "8:00", "13:00"));
        assert!(!s.is_dragging());
        assert_eq!(s.pending(), &[edit]);
    }

    #[test]
    fn test_drag_start_clamped_to_fixed_end() {
        let mut s = session();
        s.begin_drag(&e1(), 121.0).unwrap();
        assert_eq!(s.update_drag(10_000.0).unwrap(), 600);
        assert_eq!(s.update_drag(240.0).unwrap(), 600); // onto the end itself
        assert_eq!(s.update_drag(-50.0).unwrap(), 300);
        assert_eq!(s.update_drag(95.0).unwrap(), 420);
    }

    #[test]
    fn test_drag_end_clamped_to_fixed_start() {
        let mut s = session();
        s.begin_drag(&e1(), 239.0).unwrap();
        assert_eq!(s.update_drag(-100.0).unwrap(), 540);
        assert_eq!(s.update_drag(120.0).unwrap(), 540); // onto the start itself
        assert_eq!(s.update_drag(10_000.0).unwrap(), 1260);
    }

    #[test]
    fn test_snap_never_crosses_unaligned_anchor() {
        let mut s = session();
        // 8:30-11:00; the end floors to 9:00 but may not come closer than 9:30.
        s.begin_drag(&Interval::new("E1", 510, 660), 230.0).unwrap();
        assert_eq!(s.update_drag(150.0).unwrap(), 570);
        assert_eq!(s.update_drag(195.0).unwrap(), 570);
    }

    #[test]
    fn test_drag_past_fixed_edge_keeps_width() {
        let mut s = session();
        s.begin_drag(&e1(), 121.0).unwrap();
        s.update_drag(500.0).unwrap();
        assert_eq!(s.end_drag().unwrap(), ShiftEntry::new("E1", "10:00", "11:00"));

        s.begin_drag(&e1(), 239.0).unwrap();
        s.update_drag(0.0).unwrap();
        assert_eq!(s.end_drag().unwrap(), ShiftEntry::new("E1", "8:00", "9:00"));
    }

    #[test]
    fn test_narrow_interval_near_grid_edge() {
        let mut s = session();
        // 5:00-5:30: no full column fits left of the end.
        s.begin_drag(&Interval::new("E1", 300, 330), 0.0).unwrap();
        assert_eq!(s.update_drag(-80.0).unwrap(), 270);
        let proposed = s.drag().unwrap().interval();
        assert!(proposed.is_valid());
    }

    #[test]
    fn test_noop_drag_still_recorded() {
        let mut s = session();
        s.begin_drag(&e1(), 240.0).unwrap();
        let edit = s.end_drag().unwrap();
        assert_eq!(edit, ShiftEntry::new("E1", "8:00", "11:00"));
        assert!(s.has_pending());
    }

    #[test]
    fn test_cancel_discards() {
        let mut s = session();
        s.begin_drag(&e1(), 240.0).unwrap();
        s.update_drag(400.0).unwrap();
        let dropped = s.cancel_drag().unwrap();
        assert_eq!(dropped.live, 900);
        assert!(!s.is_dragging());
        assert!(!s.has_pending());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut s = session();
        assert_eq!(
            s.update_drag(10.0).unwrap_err(),
            BoardError::InvalidDragState {
                operation: "update_drag",
                state: "idle"
            }
        );
        assert!(s.end_drag().is_err());
        assert!(s.cancel_drag().is_err());

        s.begin_drag(&e1(), 240.0).unwrap();
        assert_eq!(
            s.begin_drag(&e1(), 240.0).unwrap_err(),
            BoardError::InvalidDragState {
                operation: "begin_drag",
                state: "dragging"
            }
        );
        // The live drag survives the rejected call.
        assert_eq!(s.drag().unwrap().owner, "E1");
    }

    #[test]
    fn test_pending_queue() {
        let mut s = session();
        s.record(ShiftEntry::new("E1", "8:00", "12:00"));
        s.record(ShiftEntry::new("E2", "9:00", "12:00"));
        s.record(ShiftEntry::new("E1", "9:00", "12:00"));
        assert_eq!(s.latest_pending("E1").unwrap().start, "9:00");
        assert!(s.latest_pending("E3").is_none());

        let drained = s.take_pending();
        assert_eq!(drained.len(), 3);
        assert!(!s.has_pending());
    }

    #[test]
    fn test_random_drags_stay_in_bounds() {
        let grid = GridConfig::default();
        let mut s = EditSession::new(grid);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..500 {
            // Leave a column between each edge and the far grid bound.
            let (min, max, step) = (grid.grid_min(), grid.grid_max(), grid.step());
            let start = rng.random_range(min..max - step);
            let end = rng.random_range((start + 1).max(min + step)..=max);
            let interval = Interval::new("E", start, end);

            let edge = s.begin_drag(&interval, rng.random_range(-100.0..800.0)).unwrap();
            for _ in 0..5 {
                let live = s.update_drag(rng.random_range(-400.0..1200.0)).unwrap();
                assert!(live >= min && live <= max);
                match edge {
                    Edge::Start => assert!(live < end),
                    Edge::End => assert!(live > start),
                }
            }
            let proposed = s.drag().unwrap().interval();
            assert!(proposed.is_valid());
            s.end_drag().unwrap();
        }
    }
}
