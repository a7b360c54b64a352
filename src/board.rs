//! Top-level schedule board.
//!
//! Owns every [`GroupSchedule`], the single [`EditSession`] and the host's
//! [`Renderer`]. All operations run to completion on the calling thread;
//! drag events must arrive in order and a drag must end (or be cancelled)
//! before [`ScheduleBoard::save`].

use std::collections::{HashMap, HashSet};

use crate::editing::{EditSession, Edge};
use crate::error::{BoardError, BoardResult};
use crate::layout::{pack, GroupSchedule};
use crate::models::{GridConfig, GroupInput, Interval, PendingEdit, TimePoint};
use crate::scene::Scene;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Groups in display order.
    pub groups: &'a [GroupSchedule],
    /// Grid geometry.
    pub grid: &'a GridConfig,
    /// Live drag and pending edits.
    pub session: &'a EditSession,
}

impl Frame<'_> {
    /// Builds one scene per group, showing pending edits and the live drag.
    pub fn scenes(&self) -> Vec<Scene> {
        let mut overrides: Vec<Interval> = self
            .session
            .pending()
            .iter()
            .filter_map(|edit| edit.to_interval().ok())
            .collect();
        let drag = self.session.drag();
        if let Some(drag) = drag {
            overrides.push(drag.interval());
        }
        let active = drag.map(|d| d.owner.as_str());

        self.groups
            .iter()
            .map(|group| Scene::build(group, self.grid, &overrides, active))
            .collect()
    }
}

/// Drawing surface supplied by the host.
pub trait Renderer {
    /// Draws a frame. Called after every layout change and drag event.
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Frame<'_>) {}
}

/// Groups, edit session and renderer for one timeline.
///
/// # Example
///
/// ```
/// use shift_board::{GridConfig, GroupInput, ScheduleBoard};
///
/// let mut board = ScheduleBoard::new(&[GroupInput::demo()], GridConfig::default()).unwrap();
/// assert_eq!(board.group("Group 1").unwrap().rows().len(), 3);
///
/// // Grab E1's end edge (11:00 sits at x = 240) and pull it to 13:00.
/// board.begin_drag("Group 1", "E1", 238.0).unwrap();
/// board.end_drag(320.0).unwrap();
/// board.save().unwrap();
///
/// let e1 = board.group("Group 1").unwrap().interval("E1").unwrap();
/// assert_eq!((e1.start, e1.end), (480, 780));
/// ```
#[derive(Debug)]
pub struct ScheduleBoard<R: Renderer = NullRenderer> {
    grid: GridConfig,
    groups: Vec<GroupSchedule>,
    session: EditSession,
    rejected: Vec<BoardError>,
    renderer: R,
}

impl ScheduleBoard<NullRenderer> {
    /// Creates a board without a drawing surface.
    pub fn new(inputs: &[GroupInput], grid: GridConfig) -> BoardResult<Self> {
        Self::with_renderer(inputs, grid, NullRenderer)
    }
}

impl<R: Renderer> ScheduleBoard<R> {
    /// Creates a board, packs every group and draws the first frame.
    ///
    /// Zero-width shifts and repeated owners are excluded from their group
    /// and listed in [`ScheduleBoard::rejected`].
    ///
    /// # Errors
    /// - [`BoardError::DuplicateGroup`] if two groups share a name.
    /// - [`BoardError::MalformedTime`] for any unparseable time.
    pub fn with_renderer(inputs: &[GroupInput], grid: GridConfig, renderer: R) -> BoardResult<Self> {
        let mut names = HashSet::new();
        let mut groups = Vec::with_capacity(inputs.len());
        let mut rejected = Vec::new();
        for input in inputs {
            if !names.insert(input.name.as_str()) {
                return Err(BoardError::DuplicateGroup(input.name.clone()));
            }
            let (group, excluded) = GroupSchedule::from_input(input)?;
            groups.push(group);
            rejected.extend(excluded);
        }

        let mut board = Self {
            grid,
            groups,
            session: EditSession::new(grid),
            rejected,
            renderer,
        };
        board.process_data()?;
        Ok(board)
    }

    /// Re-packs every group whose roster changed, then redraws.
    pub fn process_data(&mut self) -> BoardResult<()> {
        for group in &mut self.groups {
            group.recompute()?;
        }
        self.render();
        Ok(())
    }

    /// Queues an edit reported by the host.
    pub fn record_edit(&mut self, edit: PendingEdit) {
        self.session.record(edit);
    }

    /// Starts a drag on `owner`'s bar in `group` at pointer offset `x`.
    ///
    /// The drag starts from what is on screen: the owner's latest pending
    /// edit if there is one, otherwise its packed interval.
    pub fn begin_drag(&mut self, group: &str, owner: &str, x: f64) -> BoardResult<Edge> {
        let interval = self.displayed_interval(group, owner)?;
        let edge = self.session.begin_drag(&interval, x)?;
        self.render();
        Ok(edge)
    }

    /// Moves the dragged edge to pointer offset `x`.
    pub fn update_drag(&mut self, x: f64) -> BoardResult<TimePoint> {
        let live = self.session.update_drag(x)?;
        self.render();
        Ok(live)
    }

    /// Applies the final pointer offset and queues the resulting edit.
    pub fn end_drag(&mut self, x: f64) -> BoardResult<PendingEdit> {
        self.session.update_drag(x)?;
        let edit = self.session.end_drag()?;
        self.render();
        Ok(edit)
    }

    /// Drops the drag in progress (e.g. the pointer left the surface).
    pub fn cancel_drag(&mut self) -> BoardResult<()> {
        self.session.cancel_drag()?;
        self.render();
        Ok(())
    }

    /// Merges all pending edits into the rosters and re-packs.
    ///
    /// Each group's new roster is its flattened rows with every owner's
    /// interval replaced by that owner's most recent pending edit. Edits
    /// that fail to parse, have `start >= end`, or match no owner are
    /// excluded (an earlier valid edit for the same owner then applies).
    /// They are logged, appended to [`ScheduleBoard::rejected`] and returned.
    /// The queue is always cleared on success.
    ///
    /// # Errors
    /// [`BoardError::InvalidDragState`] while a drag is in progress; nothing
    /// changes in that case.
    pub fn save(&mut self) -> BoardResult<Vec<BoardError>> {
        if self.session.is_dragging() {
            let err = BoardError::InvalidDragState {
                operation: "save",
                state: "dragging",
            };
            log::error!("{err}");
            return Err(err);
        }

        let mut excluded = Vec::new();
        let mut latest: HashMap<String, Interval> = HashMap::new();
        for edit in self.session.pending() {
            match edit.to_interval().and_then(|i| i.validate().map(|()| i)) {
                Ok(interval) => {
                    latest.insert(interval.owner.clone(), interval);
                }
                Err(e) => excluded.push(e),
            }
        }

        for group in &mut self.groups {
            group.recompute()?;
        }

        let mut matched = HashSet::new();
        let mut rosters = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let roster: Vec<Interval> = group
                .flatten_rows()
                .into_iter()
                .map(|interval| match latest.get(&interval.owner) {
                    Some(edit) => {
                        matched.insert(edit.owner.clone());
                        edit.clone()
                    }
                    None => interval,
                })
                .collect();
            pack(&roster)?;
            rosters.push(roster);
        }

        let mut unmatched: Vec<&String> = latest
            .keys()
            .filter(|owner| !matched.contains(*owner))
            .collect();
        unmatched.sort();
        excluded.extend(
            unmatched
                .into_iter()
                .map(|owner| BoardError::UnmatchedEdit(owner.clone())),
        );

        for (group, roster) in self.groups.iter_mut().zip(rosters) {
            group.set_roster(roster);
        }
        let saved = self.session.take_pending();
        for e in &excluded {
            log::warn!("save: excluded pending edit: {e}");
        }
        log::info!(
            "saved {} of {} pending edits across {} groups",
            saved.len() - excluded.len(),
            saved.len(),
            self.groups.len()
        );
        self.rejected.extend(excluded.iter().cloned());
        self.process_data()?;
        Ok(excluded)
    }

    /// Clears the pending queue without saving, returning what was dropped.
    pub fn discard_pending(&mut self) -> Vec<PendingEdit> {
        let dropped = self.session.take_pending();
        self.render();
        dropped
    }

    /// Groups in display order.
    pub fn groups(&self) -> &[GroupSchedule] {
        &self.groups
    }

    /// Group by name.
    pub fn group(&self, name: &str) -> Option<&GroupSchedule> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Edit session (live drag and pending edits).
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Grid geometry.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Entries excluded at construction and edits excluded by saves.
    pub fn rejected(&self) -> &[BoardError] {
        &self.rejected
    }

    /// The host renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The host renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Current frame, for hosts that draw on their own schedule.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            groups: &self.groups,
            grid: &self.grid,
            session: &self.session,
        }
    }

    fn displayed_interval(&self, group: &str, owner: &str) -> BoardResult<Interval> {
        let schedule = self
            .group(group)
            .ok_or_else(|| BoardError::UnknownGroup(group.to_string()))?;
        let packed = schedule
            .interval(owner)
            .ok_or_else(|| BoardError::UnknownOwner {
                group: group.to_string(),
                owner: owner.to_string(),
            })?;

        match self.session.latest_pending(owner) {
            Some(edit) => edit.to_interval(),
            None => Ok(packed.clone()),
        }
    }

    fn render(&mut self) {
        let frame = Frame {
            groups: &self.groups,
            grid: &self.grid,
            session: &self.session,
        };
        self.renderer.draw(&frame);
    }
}
