//! Pixel-space scene for one group.
//!
//! Lays a group's rows out on the grid as plain shapes (rectangles, lines,
//! text) that any 2-D surface can draw. The geometry follows the timeline's
//! classic look: a 50 px header holding hourly labels, 30 px rows, 20 px
//! bars with the owner code inset 5 px, and a side title panel.

use serde::{Deserialize, Serialize};

use crate::layout::GroupSchedule;
use crate::models::{format_time, GridConfig, Interval};

/// Height of the header band above the first row.
pub const HEADER_HEIGHT: f64 = 50.0;
/// Height of one row.
pub const ROW_HEIGHT: f64 = 30.0;
/// Height of one interval bar.
pub const BAR_HEIGHT: f64 = 20.0;
/// Horizontal inset of the owner label inside its bar.
pub const LABEL_INSET: f64 = 5.0;
/// Width of the title panel left of the chart.
pub const TITLE_WIDTH: f64 = 100.0;

const LABEL_BASELINE: f64 = 30.0;
const BAR_TEXT_BASELINE: f64 = 15.0;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
}

/// One drawable primitive in chart coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// An interval bar.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        owner: String,
        /// Being dragged right now.
        active: bool,
    },
    /// A grid line.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// A label.
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
    },
}

/// Shapes for one group plus its title panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Group title, drawn in a `TITLE_WIDTH` panel of the same height.
    pub title: Shape,
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Grid lines, then hour labels, then bars and their labels.
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Builds the scene for a group.
    ///
    /// `overrides` replace the displayed interval of matching owners (the
    /// last match wins) without moving them between rows; `active` marks the
    /// owner under the pointer.
    pub fn build(
        group: &GroupSchedule,
        grid: &GridConfig,
        overrides: &[Interval],
        active: Option<&str>,
    ) -> Self {
        let rows = group.rows();
        let width = grid.width();
        let height = rows.len() as f64 * ROW_HEIGHT + HEADER_HEIGHT;
        let mut shapes = Vec::new();

        for tick in grid.ticks() {
            let x = grid.time_to_x(tick);
            shapes.push(Shape::Line {
                x1: x,
                y1: 0.0,
                x2: x,
                y2: height,
            });
        }
        for i in 0..=rows.len() {
            let y = row_top(i);
            shapes.push(Shape::Line {
                x1: 0.0,
                y1: y,
                x2: width,
                y2: y,
            });
        }
        for tick in grid.ticks().filter(|t| *t < grid.grid_max()) {
            shapes.push(Shape::Text {
                x: grid.time_to_x(tick) + grid.column_width() / 2.0,
                y: LABEL_BASELINE,
                text: format_time(tick),
                anchor: TextAnchor::Middle,
            });
        }

        for (i, row) in rows.iter().enumerate() {
            let y = row_top(i);
            for interval in row.intervals() {
                let shown = overrides
                    .iter()
                    .rev()
                    .find(|o| o.owner == interval.owner)
                    .unwrap_or(interval);
                let x = grid.time_to_x(shown.start);
                shapes.push(Shape::Rect {
                    x,
                    y,
                    width: grid.time_to_x(shown.end) - x,
                    height: BAR_HEIGHT,
                    owner: interval.owner.clone(),
                    active: active == Some(interval.owner.as_str()),
                });
                shapes.push(Shape::Text {
                    x: x + LABEL_INSET,
                    y: y + BAR_TEXT_BASELINE,
                    text: interval.owner.clone(),
                    anchor: TextAnchor::Start,
                });
            }
        }

        let title = Shape::Text {
            x: TITLE_WIDTH / 2.0,
            y: height / 2.0 + 15.0,
            text: group.name().to_string(),
            anchor: TextAnchor::Middle,
        };

        Self {
            title,
            width,
            height,
            shapes,
        }
    }

    /// The bar drawn for an owner.
    pub fn bar(&self, owner: &str) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| matches!(s, Shape::Rect { owner: o, .. } if o == owner))
    }
}

fn row_top(row: usize) -> f64 {
    row as f64 * ROW_HEIGHT + HEADER_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupInput;

    fn demo() -> GroupSchedule {
        GroupSchedule::from_input(&GroupInput::demo()).unwrap().0
    }

    #[test]
    fn test_scene_geometry() {
        let scene = Scene::build(&demo(), &GridConfig::default(), &[], None);
        assert_eq!(scene.width, 640.0);
        assert_eq!(scene.height, 140.0); // 3 rows

        // E1 sits on row 0 at 8:00-11:00.
        assert_eq!(
            scene.bar("E1"),
            Some(&Shape::Rect {
                x: 120.0,
                y: 50.0,
                width: 120.0,
                height: 20.0,
                owner: "E1".into(),
                active: false,
            })
        );
        // E2 on row 2.
        assert!(matches!(scene.bar("E2"), Some(Shape::Rect { y, .. }) if *y == 110.0));

        let lines = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Line { .. }))
            .count();
        assert_eq!(lines, 17 + 4);
    }

    #[test]
    fn test_scene_labels_and_title() {
        let scene = Scene::build(&demo(), &GridConfig::default(), &[], None);
        let labels: Vec<_> = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text {
                    text,
                    anchor: TextAnchor::Middle,
                    ..
                } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 16);
        assert_eq!(labels[0], "5:00");
        assert_eq!(labels[15], "20:00");
        assert!(matches!(&scene.title, Shape::Text { text, y, .. } if text == "Group 1" && *y == 85.0));
    }

    #[test]
    fn test_scene_override_and_active() {
        let preview = Interval::new("E1", 480, 780);
        let scene = Scene::build(&demo(), &GridConfig::default(), &[preview], Some("E1"));
        assert!(matches!(
            scene.bar("E1"),
            Some(Shape::Rect { width, active: true, .. }) if *width == 200.0
        ));
        assert!(matches!(scene.bar("E0"), Some(Shape::Rect { active: false, .. })));
    }

    #[test]
    fn test_scene_serializes_tagged() {
        let scene = Scene::build(&demo(), &GridConfig::default(), &[], None);
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["title"]["kind"], "text");
        assert_eq!(json["shapes"][0]["kind"], "line");
    }
}
