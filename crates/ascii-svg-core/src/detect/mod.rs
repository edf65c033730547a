//! Shape detection over the graphics layer.
//!
//! Each detector is an independent pass; none mutates the canvas. The emitter draws the
//! categories in a fixed order (see [`Drawables`]), so detector order does not matter.

mod bridges;
mod circles;
mod corners;
mod half_steps;
mod lines;
mod triangles;

use crate::canvas::{Canvas, TextRun};
use crate::geom::{Coord, Orientation};
use serde::Serialize;

/// Positional corrections applied to a line by the emitter. They compose additively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineNudges {
    /// Baseline (`_`) lines sit half a cell lower than midlines.
    pub down: bool,
    /// Whole-cell-half extension of the start end.
    pub left: bool,
    /// Whole-cell-half extension of the stop end.
    pub right: bool,
    pub tiny_left: bool,
    pub tiny_right: bool,
}

/// A straight segment between `start` and `stop`.
///
/// `start` is lesser in x (orientations NE, E, SE), or equal in x and lesser in y (S).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub start: Coord,
    pub stop: Coord,
    /// Graphics character under `start`; `' '` for synthesized lines.
    pub start_char: char,
    pub stop_char: char,
    pub nudges: LineNudges,
    /// A one-cell segment standing by itself; drawn centered on the cell.
    pub lonely: bool,
    /// `N` or `S` for half steps: only that half of the cell is drawn.
    pub chop: Orientation,
    pub orientation: Orientation,
}

impl Line {
    /// A segment with no endpoint characters and no nudges.
    pub fn new(start: Coord, stop: Coord, orientation: Orientation) -> Self {
        Self {
            start,
            stop,
            start_char: ' ',
            stop_char: ' ',
            nudges: LineNudges::default(),
            lonely: false,
            chop: Orientation::None,
            orientation,
        }
    }

    /// A vertical stub over half of cell `i`, on the side named by `chop`.
    pub fn half_step(i: Coord, chop: Orientation) -> Self {
        Self {
            lonely: true,
            chop,
            ..Self::new(i, i.south(), Orientation::S)
        }
    }

    pub fn goes_somewhere(&self) -> bool {
        self.start != self.stop
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation.is_horizontal()
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }

    pub fn is_diagonal(&self) -> bool {
        self.orientation.is_diagonal()
    }
}

/// An arrowhead: `^`, `v`, `<`, `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Triangle {
    pub start: Coord,
    pub orientation: Orientation,
    /// Shift toward the tail, so the point meets an adjacent line or circle.
    pub needs_nudging: bool,
}

/// `o` (hollow) or `*` (bold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Circle {
    pub start: Coord,
    pub bold: bool,
}

/// A curved corner formed by `.` or `'` next to a dash and a vertical stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundedCorner {
    pub start: Coord,
    pub orientation: Orientation,
}

/// `-(-` or `-)-`: a vertical line hopping over a horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bridge {
    pub start: Coord,
    /// `W` for `(`, `E` for `)`.
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Drawable {
    Line(Line),
    Triangle(Triangle),
    Circle(Circle),
    RoundedCorner(RoundedCorner),
    Bridge(Bridge),
    Text(TextRun),
}

/// Every drawable of a diagram, grouped in draw order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Drawables {
    pub lines: Vec<Line>,
    /// Triangles, each preceded by its tail line when it has one.
    pub triangles: Vec<Drawable>,
    pub rounded_corners: Vec<RoundedCorner>,
    pub circles: Vec<Circle>,
    /// Bridges, each preceded by its two half-step stubs.
    pub bridges: Vec<Drawable>,
    pub text: Vec<TextRun>,
}

impl Drawables {
    /// All drawables flattened in draw order.
    pub fn iter(&self) -> impl Iterator<Item = Drawable> + '_ {
        self.lines
            .iter()
            .copied()
            .map(Drawable::Line)
            .chain(self.triangles.iter().copied())
            .chain(self.rounded_corners.iter().copied().map(Drawable::RoundedCorner))
            .chain(self.circles.iter().copied().map(Drawable::Circle))
            .chain(self.bridges.iter().copied())
            .chain(self.text.iter().copied().map(Drawable::Text))
    }

    /// Number of non-text drawables.
    pub fn graphics_count(&self) -> usize {
        self.lines.len()
            + self.triangles.len()
            + self.rounded_corners.len()
            + self.circles.len()
            + self.bridges.len()
    }
}

impl Canvas {
    /// Runs every detector.
    pub fn drawables(&self) -> Drawables {
        let drawables = Drawables {
            lines: self.lines(),
            triangles: self.triangles(),
            rounded_corners: self.rounded_corners(),
            circles: self.circles(),
            bridges: self.bridges(),
            text: self.text(),
        };
        tracing::debug!(
            lines = drawables.lines.len(),
            triangles = drawables.triangles.len(),
            rounded_corners = drawables.rounded_corners.len(),
            circles = drawables.circles.len(),
            bridges = drawables.bridges.len(),
            text = drawables.text.len(),
            "detected shapes"
        );
        drawables
    }
}
