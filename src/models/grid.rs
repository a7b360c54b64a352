//! Display grid configuration.
//!
//! The grid maps a time range `[grid_min, grid_max]` onto a horizontal pixel
//! axis. One column spans `step` minutes and is `column_width` pixels wide;
//! the axis labels sit on column boundaries and drag edits snap to them.

use serde::{Deserialize, Serialize};

use super::time::{TimePoint, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::error::{BoardError, BoardResult};

/// Immutable grid geometry shared by layout, editing and scene building.
///
/// Every value of this type has passed the range checks of
/// [`GridConfig::new`]; deserialization goes through [`GridSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridSettings", into = "GridSettings")]
pub struct GridConfig {
    grid_min: TimePoint,
    grid_max: TimePoint,
    column_width: f64,
    step: TimePoint,
}

/// Unchecked grid fields, as read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Left edge of the axis (minutes since midnight).
    pub grid_min: TimePoint,
    /// Right edge of the axis (minutes since midnight).
    pub grid_max: TimePoint,
    /// Pixel width of one column.
    pub column_width: f64,
    /// Minutes per column; also the snapping unit.
    pub step: TimePoint,
}

impl Default for GridSettings {
    fn default() -> Self {
        GridConfig::default().into()
    }
}

impl From<GridConfig> for GridSettings {
    fn from(g: GridConfig) -> Self {
        Self {
            grid_min: g.grid_min,
            grid_max: g.grid_max,
            column_width: g.column_width,
            step: g.step,
        }
    }
}

impl TryFrom<GridSettings> for GridConfig {
    type Error = BoardError;

    fn try_from(s: GridSettings) -> BoardResult<Self> {
        Self {
            grid_min: s.grid_min,
            grid_max: s.grid_max,
            column_width: s.column_width,
            step: s.step,
        }
        .validated()
    }
}

impl Default for GridConfig {
    /// 5:00 to 21:00 in hourly 40 px columns.
    fn default() -> Self {
        Self {
            grid_min: 5 * MINUTES_PER_HOUR,
            grid_max: 21 * MINUTES_PER_HOUR,
            column_width: 40.0,
            step: MINUTES_PER_HOUR,
        }
    }
}

impl GridConfig {
    /// Creates an hourly grid.
    ///
    /// # Errors
    /// [`BoardError::InvalidGrid`] unless `0 <= grid_min < grid_max < 1440`
    /// and `column_width` is positive and finite.
    pub fn new(grid_min: TimePoint, grid_max: TimePoint, column_width: f64) -> BoardResult<Self> {
        Self {
            grid_min,
            grid_max,
            column_width,
            step: MINUTES_PER_HOUR,
        }
        .validated()
    }

    /// Sets the column/snapping unit in minutes.
    ///
    /// # Errors
    /// [`BoardError::InvalidGrid`] if `step` is not positive.
    pub fn with_step(mut self, step: TimePoint) -> BoardResult<Self> {
        self.step = step;
        self.validated()
    }

    fn validated(self) -> BoardResult<Self> {
        if self.grid_min < 0 || self.grid_max >= MINUTES_PER_DAY || self.grid_min >= self.grid_max
        {
            return Err(BoardError::InvalidGrid(format!(
                "time range [{}, {}] must satisfy 0 <= min < max < {MINUTES_PER_DAY}",
                self.grid_min, self.grid_max
            )));
        }
        if !(self.column_width.is_finite() && self.column_width > 0.0) {
            return Err(BoardError::InvalidGrid(format!(
                "column width {} must be positive",
                self.column_width
            )));
        }
        if self.step <= 0 {
            return Err(BoardError::InvalidGrid(format!(
                "step {} must be positive",
                self.step
            )));
        }
        Ok(self)
    }

    /// Left edge of the axis.
    pub fn grid_min(&self) -> TimePoint {
        self.grid_min
    }

    /// Right edge of the axis.
    pub fn grid_max(&self) -> TimePoint {
        self.grid_max
    }

    /// Pixel width of one column.
    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Minutes per column.
    pub fn step(&self) -> TimePoint {
        self.step
    }

    /// Pixel offset of a time from the left edge.
    pub fn time_to_x(&self, t: TimePoint) -> f64 {
        f64::from(t - self.grid_min) / f64::from(self.step) * self.column_width
    }

    /// Unsnapped time (fractional minutes) under a pixel offset.
    pub fn x_to_time(&self, x: f64) -> f64 {
        f64::from(self.grid_min) + x / self.column_width * f64::from(self.step)
    }

    /// Floors a time onto the column boundaries counted from `grid_min`.
    pub fn snap_down(&self, t: f64) -> TimePoint {
        let columns = ((t - f64::from(self.grid_min)) / f64::from(self.step)).floor();
        self.grid_min + columns as TimePoint * self.step
    }

    /// Total axis width in pixels.
    pub fn width(&self) -> f64 {
        self.time_to_x(self.grid_max)
    }

    /// Column boundaries from `grid_min` to `grid_max` inclusive.
    pub fn ticks(&self) -> impl Iterator<Item = TimePoint> + '_ {
        (self.grid_min..=self.grid_max).step_by(self.step as usize)
    }
}
