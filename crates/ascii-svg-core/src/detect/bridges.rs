use super::{Bridge, Drawable, Line};
use crate::canvas::Canvas;
use crate::geom::Orientation;
use crate::traversal::Traversal;

impl Canvas {
    /// `-(-` and `-)-` hops, each preceded by the stubs joining it to the strokes above
    /// and below.
    pub fn bridges(&self) -> Vec<Drawable> {
        let mut out = Vec::new();
        for start in Traversal::RowMajor.iter(self.width(), self.height()) {
            let orientation = match self.char_at(start) {
                '(' => Orientation::W,
                ')' => Orientation::E,
                _ => continue,
            };
            if self.char_at(start.west()) != '-' || self.char_at(start.east()) != '-' {
                continue;
            }
            out.push(Drawable::Line(Line::half_step(start.north(), Orientation::S)));
            out.push(Drawable::Line(Line::half_step(start.south(), Orientation::N)));
            out.push(Drawable::Bridge(Bridge { start, orientation }));
        }
        out
    }
}
