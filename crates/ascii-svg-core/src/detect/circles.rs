use super::Circle;
use crate::canvas::Canvas;
use crate::traversal::Traversal;

impl Canvas {
    /// `o` and `*` cells left in the graphics layer.
    pub fn circles(&self) -> Vec<Circle> {
        Traversal::ColumnMajor
            .iter(self.width(), self.height())
            .filter_map(|start| match self.char_at(start) {
                'o' => Some(Circle { start, bold: false }),
                '*' => Some(Circle { start, bold: true }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coord;

    #[test]
    fn hollow_and_bold() {
        let canvas = Canvas::parse(" o \n\n * \n").unwrap();
        let circles = canvas.circles();
        assert_eq!(
            circles,
            vec![
                Circle {
                    start: Coord::new(1, 0),
                    bold: false
                },
                Circle {
                    start: Coord::new(1, 2),
                    bold: true
                },
            ]
        );
    }

    #[test]
    fn circles_in_words_are_text() {
        let canvas = Canvas::parse("foo bar\n").unwrap();
        assert!(canvas.circles().is_empty());
    }
}
