use super::Line;
use crate::canvas::Canvas;
use crate::geom::{Coord, Orientation};
use crate::traversal::Traversal;

impl Canvas {
    /// Vertical stubs that carry a line half a cell into a corner or onto a baseline.
    pub fn half_steps(&self) -> Vec<Line> {
        Traversal::ColumnMajor
            .iter(self.width(), self.height())
            .filter_map(|i| {
                let chop = self.half_step_at(i);
                (chop != Orientation::None).then(|| Line::half_step(i, chop))
            })
            .collect()
    }

    /// `N` or `S` if the character at `i` ends a vertical line on that half of its cell.
    fn half_step_at(&self, i: Coord) -> Orientation {
        let r = self.char_at(i);
        if !matches!(r, '\'' | '.' | '|') {
            return Orientation::None;
        }
        if self.rounded_corner_at(i) != Orientation::None {
            return Orientation::None;
        }

        let w = self.char_at(i.west());
        let e = self.char_at(i.east());
        let n = self.char_at(i.north());
        let s = self.char_at(i.south());
        let nw = self.char_at(i.north_west());
        let ne = self.char_at(i.north_east());

        match r {
            // _      _
            //  '-  -'
            '\'' if (nw == '_' && e == '-') || (w == '-' && ne == '_') => Orientation::N,
            // _.-  -._
            '.' if (w == '-' && e == '_') || (w == '_' && e == '-') => Orientation::S,
            '|' => {
                // _      _
                //  |    |
                if (n != '|' && (ne == '_' || nw == '_')) || n == '-' {
                    Orientation::N
                // _|  |_
                } else if (s != '|' && (w == '_' || e == '_')) || s == '-' {
                    Orientation::S
                } else {
                    Orientation::None
                }
            }
            _ => Orientation::None,
        }
    }
}
