//! SVG elements for the graphics drawables.
//!
//! A cell maps to an 8×16 pixel box; the pixel of a cell is its center once the body group
//! is translated by `(8, 16)`.

use ascii_svg_core::{Bridge, Circle, Coord, Drawable, Line, Orientation, RoundedCorner, Triangle};
use std::fmt::Write as _;

pub const CELL_WIDTH: i32 = 8;
pub const CELL_HEIGHT: i32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl From<Coord> for Pixel {
    fn from(c: Coord) -> Self {
        Self {
            x: c.x * CELL_WIDTH,
            y: c.y * CELL_HEIGHT,
        }
    }
}

/// Appends the element for any non-text drawable. Text goes through
/// [`crate::text::TextDrawer`].
pub(crate) fn draw(out: &mut String, d: &Drawable) {
    match d {
        Drawable::Line(l) => line(out, l),
        Drawable::Triangle(t) => triangle(out, t),
        Drawable::Circle(c) => circle(out, c),
        Drawable::RoundedCorner(c) => rounded_corner(out, c),
        Drawable::Bridge(b) => bridge(out, b),
        Drawable::Text(_) => {}
    }
}

/// Endpoints of `l` in pixels, after every positional correction.
pub fn line_endpoints(l: &Line) -> (Pixel, Pixel) {
    let mut start = Pixel::from(l.start);
    let mut stop = Pixel::from(l.stop);

    // A segment all by itself is centered on its cell, lining up with `_` baselines:
    //     _
    //    \_
    if l.lonely {
        let (dx, dy) = match l.orientation {
            Orientation::NE => (-4, 8),
            Orientation::SE => (-4, -8),
            Orientation::S => (0, -8),
            _ => (0, 0),
        };
        start.x += dx;
        stop.x += dx;
        start.y += dy;
        stop.y += dy;

        match l.chop {
            Orientation::N => stop.y -= 8,
            Orientation::S => start.y += 8,
            _ => {}
        }
    }

    let n = l.nudges;
    if n.down {
        stop.y += 8;
        if l.is_horizontal() {
            start.y += 8;
        }
    }
    if n.left {
        start.x -= 8;
    }
    if n.right {
        stop.x += 8;
    }
    if n.tiny_left {
        start.x -= 4;
        match l.orientation {
            Orientation::NE => start.y += 8,
            Orientation::SE => start.y -= 8,
            _ => {}
        }
    }
    if n.tiny_right {
        stop.x += 4;
        match l.orientation {
            Orientation::NE => stop.y -= 8,
            Orientation::SE => stop.y += 8,
            _ => {}
        }
    }

    // Stop at the rim of a hollow circle instead of its center.
    const ORTHO: i32 = 6;
    const DIAG_X: i32 = 3;
    const DIAG_Y: i32 = 5;
    let trim = match l.orientation {
        Orientation::NE => (DIAG_X, -DIAG_Y),
        Orientation::E => (ORTHO, 0),
        Orientation::SE => (DIAG_X, DIAG_Y),
        Orientation::S => (0, ORTHO),
        _ => (0, 0),
    };
    if l.start_char == 'o' {
        start.x += trim.0;
        start.y += trim.1;
    }
    if l.stop_char == 'o' {
        stop.x -= trim.0;
        stop.y -= trim.1;
    }

    (start, stop)
}

pub(crate) fn line(out: &mut String, l: &Line) {
    let (start, stop) = line_endpoints(l);
    let _ = writeln!(
        out,
        "<path d='M {},{} L {},{}'></path>",
        start.x, start.y, stop.x, stop.y
    );
}

//   +-----+-----+
//   |    /|\    |
//   |   / | \   |
// x +- / -+- \ -+
//   | /   |   \ |
//   |/    |    \|
//   +-----+-----+
//         y
pub(crate) fn triangle(out: &mut String, t: &Triangle) {
    let p = Pixel::from(t.start);
    // Single precision: printed digits below row 10 depend on it.
    let (x, y) = (p.x as f32, p.y as f32);

    let (rotation, shift, nudge) = match t.orientation {
        Orientation::N => (270.0, 0.0, 8.0),
        Orientation::NE => (300.0, 4.0, 6.0),
        Orientation::NW => (240.0, 4.0, 6.0),
        Orientation::W => (180.0, 0.0, -8.0),
        Orientation::E => (0.0, 0.0, -8.0),
        Orientation::S => (90.0, 0.0, 8.0),
        Orientation::SW => (120.0, 4.0, 6.0),
        Orientation::SE => (60.0, 4.0, 6.0),
        Orientation::None => (0.0, 0.0, 0.0),
    };
    let dx = shift + if t.needs_nudging { nudge } else { 0.0 };

    let half_base = 0.35 * CELL_HEIGHT as f32;
    let (x0, y0) = (x + 8.0 + dx, y);
    let (x1, y1) = (x - 4.0 + dx, y - half_base);
    let (x2, y2) = (x - 4.0 + dx, y + half_base);

    let _ = writeln!(
        out,
        "<polygon points='{x0:.6},{y0:.6} {x1:.6},{y1:.6} {x2:.6},{y2:.6}' fill='currentColor' transform='rotate({rotation:.6}, {x:.6}, {y:.6})'></polygon>"
    );
}

pub(crate) fn circle(out: &mut String, c: &Circle) {
    const RADIUS: i32 = 6;
    let p = Pixel::from(c.start);
    let fill = if c.bold { "currentColor" } else { "none" };
    let _ = writeln!(
        out,
        "<circle cx='{}' cy='{}' r='{RADIUS}' fill='{fill}'></circle>",
        p.x, p.y
    );
}

pub(crate) fn rounded_corner(out: &mut String, c: &RoundedCorner) {
    let Pixel { x, y } = Pixel::from(c.start);
    let (start, end, sweep) = match c.orientation {
        Orientation::NW => ((x + 8, y), (x - 8, y + 16), 0),
        Orientation::NE => ((x - 8, y), (x + 8, y + 16), 1),
        Orientation::SE => ((x + 8, y - 16), (x - 8, y), 1),
        Orientation::SW => ((x - 8, y - 16), (x + 8, y), 0),
        _ => return,
    };
    let _ = writeln!(
        out,
        "<path d='M {},{} A 16,16 0 0,{sweep} {},{}'></path>",
        start.0, start.1, end.0, end.1
    );
}

pub(crate) fn bridge(out: &mut String, b: &Bridge) {
    let Pixel { x, y } = Pixel::from(b.start);
    let sweep = if b.orientation == Orientation::W { 0 } else { 1 };
    let _ = writeln!(
        out,
        "<path d='M {},{} A 9,9 0 0,{sweep} {},{}'></path>",
        x,
        y - 8,
        x,
        y + 8
    );
}
