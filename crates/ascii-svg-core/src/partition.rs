//! Text/graphics partitioning.
//!
//! Reserved characters are graphics by default. They are reclaimed as text when the
//! surrounding cells suggest prose, e.g. the `o` in `foo` or the `v` in ` over `.

use crate::canvas::Canvas;
use crate::charset::{is_reserved, is_wide};
use crate::geom::Coord;
use crate::traversal::Traversal;

impl Canvas {
    /// Cells of the graphics layer that should move to the text layer, in row-major order.
    ///
    /// Pure with respect to the current graphics layer: nothing is mutated.
    pub fn text_cells(&self) -> Vec<(Coord, char)> {
        Traversal::RowMajor
            .iter(self.width(), self.height())
            .filter(|&i| self.should_move_to_text(i))
            .map(|i| (i, self.char_at(i)))
            .collect()
    }

    /// Cells off either end of a line count as reserved.
    fn is_reserved_at(&self, i: Coord) -> bool {
        self.data_at(i).is_none_or(is_reserved)
    }

    fn is_wide_at(&self, i: Coord) -> bool {
        self.data_at(i).is_some_and(is_wide)
    }

    fn should_move_to_text(&self, i: Coord) -> bool {
        let r = self.char_at(i);
        if r == ' ' {
            return false;
        }

        if !self.is_reserved_at(i) {
            return true;
        }

        // An incoming line (e.g. `|`) above or below: part of the drawing.
        if self.has_line_above_or_below(i) {
            return false;
        }

        let w = i.west();
        let e = i.east();

        // Reserved but touching a letter, e.g. the ends of "foo----bar". Only the touching
        // cell is reclaimed; the middle of a longer reserved run stays graphics.
        if !self.is_reserved_at(w) || !self.is_reserved_at(e) {
            return true;
        }

        if self.is_wide_at(i) && (self.is_wide_at(e) || self.is_wide_at(w)) {
            return true;
        }

        if self.char_at(w) != ' ' || self.char_at(e) != ' ' {
            return false;
        }

        // A circle surrounded by whitespace is a circle.
        if r == 'o' || r == '*' {
            return false;
        }

        // Whitespace on both sides, with text two cells away on either side.
        !self.is_reserved_at(w.west()) || !self.is_reserved_at(e.east())
    }
}
