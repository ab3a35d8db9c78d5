//! Rendering seam for editors.
//!
//! Coordinates are normalized to the plot area: `x` runs `0..=1` across the
//! visible frequency window and `y` runs `0..=1` from the bottom of the
//! display range to the top.

use crate::editor::CommandId;

/// Axis-aligned rectangle in normalized plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x0: f64,
    /// Bottom edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Top edge.
    pub y1: f64,
}

impl Rect {
    /// The whole plot area.
    pub const UNIT: Rect = Rect {
        x0: 0.0,
        y0: 0.0,
        x1: 1.0,
        y1: 1.0,
    };
}

/// Drawing colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// Background.
    White,
    /// Frame and curve.
    Black,
    /// Cursor hairline.
    Red,
}

/// Which edge of the plot a range mark is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkEdge {
    /// Top edge (maximum).
    Top,
    /// Bottom edge (minimum).
    Bottom,
}

/// Drawing surface an editor paints on.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rectangle(&mut self, rect: Rect, colour: Colour);

    /// Outline a rectangle.
    fn rectangle(&mut self, rect: Rect, colour: Colour);

    /// Connected line through `points`.
    fn polyline(&mut self, points: &[(f64, f64)], colour: Colour);

    /// Label a value on the vertical axis.
    fn range_mark(&mut self, value_db: f64, label: &str, edge: MarkEdge);

    /// Horizontal line across the plot at height `y`.
    fn horizontal_hair(&mut self, y: f64, label: &str, colour: Colour);

    /// Enable or grey out a menu command.
    fn set_command_enabled(&mut self, command: CommandId, enabled: bool);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// [`Canvas::fill_rectangle`].
    FillRectangle(Rect, Colour),
    /// [`Canvas::rectangle`].
    Rectangle(Rect, Colour),
    /// [`Canvas::polyline`].
    Polyline(Vec<(f64, f64)>, Colour),
    /// [`Canvas::range_mark`].
    RangeMark {
        /// Value in dB.
        value_db: f64,
        /// Text drawn next to the mark.
        label: String,
        /// Plot edge.
        edge: MarkEdge,
    },
    /// [`Canvas::horizontal_hair`].
    HorizontalHair {
        /// Normalized height.
        y: f64,
        /// Text drawn next to the line.
        label: String,
        /// Line and label colour.
        colour: Colour,
    },
    /// [`Canvas::set_command_enabled`].
    CommandEnabled(CommandId, bool),
}

/// [`Canvas`] that records operations instead of painting.
///
/// Lets a front end replay a frame, and tests inspect one.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Last recorded enabled state of `command`, if any.
    pub fn command_enabled(&self, command: CommandId) -> Option<bool> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::CommandEnabled(id, enabled) if *id == command => Some(*enabled),
            _ => None,
        })
    }

    /// Replay the recorded operations onto another canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for op in &self.ops {
            match op {
                DrawOp::FillRectangle(rect, colour) => canvas.fill_rectangle(*rect, *colour),
                DrawOp::Rectangle(rect, colour) => canvas.rectangle(*rect, *colour),
                DrawOp::Polyline(points, colour) => canvas.polyline(points, *colour),
                DrawOp::RangeMark {
                    value_db,
                    label,
                    edge,
                } => canvas.range_mark(*value_db, label, *edge),
                DrawOp::HorizontalHair { y, label, colour } => {
                    canvas.horizontal_hair(*y, label, *colour);
                }
                DrawOp::CommandEnabled(command, enabled) => {
                    canvas.set_command_enabled(*command, *enabled);
                }
            }
        }
    }
}

impl Canvas for DisplayList {
    fn fill_rectangle(&mut self, rect: Rect, colour: Colour) {
        self.ops.push(DrawOp::FillRectangle(rect, colour));
    }

    fn rectangle(&mut self, rect: Rect, colour: Colour) {
        self.ops.push(DrawOp::Rectangle(rect, colour));
    }

    fn polyline(&mut self, points: &[(f64, f64)], colour: Colour) {
        self.ops.push(DrawOp::Polyline(points.to_vec(), colour));
    }

    fn range_mark(&mut self, value_db: f64, label: &str, edge: MarkEdge) {
        self.ops.push(DrawOp::RangeMark {
            value_db,
            label: label.to_string(),
            edge,
        });
    }

    fn horizontal_hair(&mut self, y: f64, label: &str, colour: Colour) {
        self.ops.push(DrawOp::HorizontalHair {
            y,
            label: label.to_string(),
            colour,
        });
    }

    fn set_command_enabled(&mut self, command: CommandId, enabled: bool) {
        self.ops.push(DrawOp::CommandEnabled(command, enabled));
    }
}
