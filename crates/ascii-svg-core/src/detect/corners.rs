use super::RoundedCorner;
use crate::canvas::Canvas;
use crate::charset::{is_joint, is_vertical_joinable};
use crate::geom::{Coord, Orientation};
use crate::traversal::Traversal;

impl Canvas {
    /// The orientation of the rounded corner at `i`, or [`Orientation::None`].
    ///
    /// The orientation names the quadrant the curve bulges into: `NW` for the top-left
    /// corner of a box (`.` with a dash to the east and a stroke below to the west).
    pub fn rounded_corner_at(&self, i: Coord) -> Orientation {
        let r = self.char_at(i);
        if !is_joint(r) {
            return Orientation::None;
        }

        let opens_up = r == '\'' || r == '+';
        let opens_down = r == '.' || r == '+';

        let is_dash = |c: char| matches!(c, '-' | '+' | '_');
        let dash_right = is_dash(self.char_at(i.east())) || self.char_at(i.north_east()) == '_';
        let dash_left = is_dash(self.char_at(i.west())) || self.char_at(i.north_west()) == '_';
        let vertical = |at: Coord| is_vertical_joinable(self.char_at(at));

        //  .-  or  .-
        // |       +
        if opens_down && dash_right && vertical(i.south_west()) {
            return Orientation::NW;
        }
        // -.  or  -.  or  _.
        //   |       +      )
        if opens_down && dash_left && vertical(i.south_east()) {
            return Orientation::NE;
        }
        //   |  or   +
        // -'      -'
        if opens_up && dash_left && vertical(i.north_east()) {
            return Orientation::SE;
        }
        // |   or +
        //  '-     '-
        if opens_up && dash_right && vertical(i.north_west()) {
            return Orientation::SW;
        }
        Orientation::None
    }

    pub fn rounded_corners(&self) -> Vec<RoundedCorner> {
        Traversal::RowMajor
            .iter(self.width(), self.height())
            .filter_map(|start| {
                let orientation = self.rounded_corner_at(start);
                (orientation != Orientation::None).then_some(RoundedCorner { start, orientation })
            })
            .collect()
    }
}
