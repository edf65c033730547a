use super::{Drawable, Line, Triangle};
use crate::canvas::Canvas;
use crate::charset::{is_circle, is_joint, is_triangle};
use crate::geom::{Coord, Orientation};
use crate::traversal::Traversal;

impl Canvas {
    /// Arrowheads, each preceded by the tail line that connects it to a neighboring line
    /// or joint when there is one.
    pub fn triangles(&self) -> Vec<Drawable> {
        let mut out = Vec::new();

        for start in Traversal::ColumnMajor.iter(self.width(), self.height()) {
            let r = self.char_at(start);
            if !is_triangle(r) {
                continue;
            }

            let orientation = self.triangle_orientation(start, r);
            let mut needs_nudging = false;

            // Snap the point to whatever is behind it, drawing a tail where needed.
            let tail = match orientation {
                Orientation::N => self
                    .joins_tail(start.north())
                    .then(|| Line::half_step(start, Orientation::N)),
                Orientation::S => self
                    .joins_tail(start.south())
                    .then(|| Line::half_step(start, Orientation::S)),
                Orientation::NW => self
                    .joins_tail(start.north_west())
                    .then(|| Line::new(start.north_west(), start, Orientation::SE)),
                Orientation::NE => self
                    .joins_tail(start.north_east())
                    .then(|| Line::new(start, start.north_east(), Orientation::NE)),
                Orientation::SE => self
                    .joins_tail(start.south_east())
                    .then(|| Line::new(start, start.south_east(), Orientation::SE)),
                Orientation::SW => self
                    .joins_tail(start.south_west())
                    .then(|| Line::new(start.south_west(), start, Orientation::NE)),
                Orientation::W => {
                    needs_nudging = self.is_circle_at(start.west());
                    None
                }
                Orientation::E => {
                    needs_nudging = self.is_circle_at(start.east());
                    None
                }
                Orientation::None => None,
            };
            if let Some(tail) = tail {
                needs_nudging = true;
                out.push(Drawable::Line(tail));
            }

            out.push(Drawable::Triangle(Triangle {
                start,
                orientation,
                needs_nudging,
            }));
        }
        out
    }

    fn triangle_orientation(&self, start: Coord, r: char) -> Orientation {
        match r {
            //  ^    ^
            // /      \
            '^' if self.char_at(start.south_west()) == '/' => Orientation::NE,
            '^' if self.char_at(start.south_east()) == '\\' => Orientation::NW,
            '^' => Orientation::N,
            // |
            // v
            'v' if self.char_at(start.north()) == '|' => Orientation::S,
            //  /
            // v
            'v' if self.char_at(start.north_east()) == '/' => Orientation::SW,
            // \
            //  v
            'v' if self.char_at(start.north_west()) == '\\' => Orientation::SE,
            'v' => Orientation::S,
            '<' => Orientation::W,
            '>' => Orientation::E,
            _ => Orientation::None,
        }
    }

    /// A dash or a non-circle joint behind the point gets a tail.
    fn joins_tail(&self, i: Coord) -> bool {
        let r = self.char_at(i);
        r == '-' || (is_joint(r) && !is_circle(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangles(input: &str) -> Vec<Drawable> {
        Canvas::parse(input).unwrap().triangles()
    }

    fn only_triangle(ds: &[Drawable]) -> Triangle {
        let ts: Vec<Triangle> = ds
            .iter()
            .filter_map(|d| match d {
                Drawable::Triangle(t) => Some(*t),
                _ => None,
            })
            .collect();
        assert_eq!(ts.len(), 1, "{ds:?}");
        ts[0]
    }

    #[test]
    fn arrow_heads_on_vertical_line() {
        let t = only_triangle(&triangles("^\n|\n|\n"));
        assert_eq!(t.orientation, Orientation::N);
        assert!(!t.needs_nudging);

        // Both ends of one line.
        let heads: Vec<_> = triangles("^\n|\n|\nv\n")
            .into_iter()
            .filter_map(|d| match d {
                Drawable::Triangle(t) => Some((t.start, t.orientation)),
                _ => None,
            })
            .collect();
        assert_eq!(
            heads,
            vec![
                (Coord::new(0, 0), Orientation::N),
                (Coord::new(0, 3), Orientation::S),
            ]
        );

        let ds = triangles("|\n|\nv\n");
        let t = only_triangle(&ds);
        assert_eq!(t.orientation, Orientation::S);
        assert!(!t.needs_nudging);
    }

    #[test]
    fn diagonal_arrow_heads() {
        let t = only_triangle(&triangles(" ^\n/\n"));
        assert_eq!(t.orientation, Orientation::NE);
        let t = only_triangle(&triangles("^\n \\\n"));
        assert_eq!(t.orientation, Orientation::NW);
        let t = only_triangle(&triangles(" /\nv\n"));
        assert_eq!(t.orientation, Orientation::SW);
        let t = only_triangle(&triangles("\\\n v\n"));
        assert_eq!(t.orientation, Orientation::SE);
    }

    fn nudged(start: Coord, orientation: Orientation) -> Drawable {
        Drawable::Triangle(Triangle {
            start,
            orientation,
            needs_nudging: true,
        })
    }

    #[test]
    fn diagonal_heads_draw_tails_to_joints() {
        //   +
        //  ^
        // /
        assert_eq!(
            triangles("  +\n ^\n/\n"),
            vec![
                Drawable::Line(Line::new(
                    Coord::new(1, 1),
                    Coord::new(2, 0),
                    Orientation::NE
                )),
                nudged(Coord::new(1, 1), Orientation::NE),
            ]
        );

        // +
        //  ^
        //   \
        assert_eq!(
            triangles("+\n ^\n  \\\n"),
            vec![
                Drawable::Line(Line::new(
                    Coord::new(0, 0),
                    Coord::new(1, 1),
                    Orientation::SE
                )),
                nudged(Coord::new(1, 1), Orientation::NW),
            ]
        );

        //   /
        //  v
        // +
        assert_eq!(
            triangles("  /\n v\n+\n"),
            vec![
                Drawable::Line(Line::new(
                    Coord::new(0, 2),
                    Coord::new(1, 1),
                    Orientation::NE
                )),
                nudged(Coord::new(1, 1), Orientation::SW),
            ]
        );

        // \
        //  v
        //   +
        assert_eq!(
            triangles("\\\n v\n  +\n"),
            vec![
                Drawable::Line(Line::new(
                    Coord::new(1, 1),
                    Coord::new(2, 2),
                    Orientation::SE
                )),
                nudged(Coord::new(1, 1), Orientation::SE),
            ]
        );
    }

    #[test]
    fn horizontal_arrow_heads() {
        let t = only_triangle(&triangles("---->\n"));
        assert_eq!(t.orientation, Orientation::E);
        assert!(!t.needs_nudging);

        let t = only_triangle(&triangles("<---\n"));
        assert_eq!(t.orientation, Orientation::W);
    }

    #[test]
    fn arrow_into_circle_is_nudged() {
        let t = only_triangle(&triangles("---->o\n"));
        assert_eq!(t.orientation, Orientation::E);
        assert!(t.needs_nudging);
    }

    #[test]
    fn arrow_on_joint_gets_a_tail() {
        // +---
        // ^
        // |
        let ds = triangles("+---\n^\n|\n");
        assert_eq!(ds.len(), 2);
        let Drawable::Line(tail) = ds[0] else {
            panic!("expected a tail first: {ds:?}");
        };
        assert_eq!(tail.chop, Orientation::N);
        assert_eq!(tail.start, Coord::new(0, 1));
        let t = only_triangle(&ds);
        assert_eq!(t.orientation, Orientation::N);
        assert!(t.needs_nudging);
    }
}
