//! Neighborhood predicates over the graphics layer.
//!
//! These look at most one cell away and are shared by the partitioner and the detectors.

use crate::canvas::Canvas;
use crate::charset::{is_circle, is_joint};
use crate::geom::Coord;

impl Canvas {
    /// True if the character at `i` looks like it belongs to anything besides a horizontal
    /// line. Such a reserved character is never reclaimed as text.
    pub(crate) fn has_line_above_or_below(&self, i: Coord) -> bool {
        match self.char_at(i) {
            '*' | 'o' | '+' | 'v' | '^' => {
                self.part_of_diagonal_line(i) || self.part_of_vertical_line(i)
            }
            '|' => self.part_of_vertical_line(i) || self.part_of_rounded_corner(i),
            '/' | '\\' => self.part_of_diagonal_line(i),
            '-' => self.part_of_rounded_corner(i),
            '(' | ')' => self.part_of_vertical_line(i),
            _ => false,
        }
    }

    /// True if a `|` segment passes through `i`.
    pub(crate) fn part_of_vertical_line(&self, i: Coord) -> bool {
        let this = self.char_at(i);
        let north = self.char_at(i.north());
        let south = self.char_at(i.south());

        let joint_above = this == '|' && is_joint(north);
        if north == '|' || joint_above {
            return true;
        }

        let joint_below = this == '|' && is_joint(south);
        south == '|' || joint_below
    }

    pub(crate) fn part_of_diagonal_line(&self, i: Coord) -> bool {
        let r = self.char_at(i);
        let n = self.char_at(i.north());
        let s = self.char_at(i.south());
        let nw = self.char_at(i.north_west());
        let se = self.char_at(i.south_east());
        let ne = self.char_at(i.north_east());
        let sw = self.char_at(i.south_west());

        match r {
            // Diagonal segments connect to joints or to more of themselves.
            '/' => ne == r || sw == r || is_joint(ne) || is_joint(sw) || n == '\\' || s == '\\',
            '\\' => nw == r || se == r || is_joint(nw) || is_joint(se) || n == '/' || s == '/',
            _ => nw == '\\' || ne == '/' || sw == '/' || se == '\\',
        }
    }

    /// For `-` and `|`, true if the character could be part of a rounded corner.
    pub(crate) fn part_of_rounded_corner(&self, i: Coord) -> bool {
        match self.char_at(i) {
            '-' => {
                let (w, e) = (self.char_at(i.west()), self.char_at(i.east()));
                w == '.' || e == '.' || w == '\'' || e == '\''
            }
            '|' => {
                let dot_above =
                    self.char_at(i.north_west()) == '.' || self.char_at(i.north_east()) == '.';
                let tick_below =
                    self.char_at(i.south_west()) == '\'' || self.char_at(i.south_east()) == '\'';
                dot_above || tick_below
            }
            _ => false,
        }
    }

    /// True if `i` holds `o` or `*`.
    pub(crate) fn is_circle_at(&self, i: Coord) -> bool {
        is_circle(self.char_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(text: &str) -> Canvas {
        Canvas::ingest(text).unwrap()
    }

    #[test]
    fn vertical_line_through_joint() {
        let c = canvas("+\n|\n|\n");
        assert!(c.part_of_vertical_line(Coord::new(0, 1)));
        assert!(c.part_of_vertical_line(Coord::new(0, 0)));
        assert!(!canvas("|\n").part_of_vertical_line(Coord::new(0, 0)));
    }

    #[test]
    fn diagonal_neighbors() {
        let c = canvas("  /\n /\n");
        assert!(c.part_of_diagonal_line(Coord::new(1, 1)));
        assert!(c.part_of_diagonal_line(Coord::new(2, 0)));
        let lone = canvas(" / \n");
        assert!(!lone.part_of_diagonal_line(Coord::new(1, 0)));
        let tip = canvas("o\n \\\n");
        assert!(tip.part_of_diagonal_line(Coord::new(0, 0)));
    }

    #[test]
    fn rounded_corner_context() {
        let c = canvas(".-\n|\n");
        assert!(c.part_of_rounded_corner(Coord::new(1, 0)));
        assert!(!canvas("--\n").part_of_rounded_corner(Coord::new(0, 0)));
        let bar = canvas(" .\n|\n");
        assert!(bar.part_of_rounded_corner(Coord::new(0, 1)));
        assert!(bar.has_line_above_or_below(Coord::new(0, 1)));
    }
}
