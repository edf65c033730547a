use super::Line;
use crate::canvas::Canvas;
use crate::charset::{JOINTS, is_circle, is_triangle};
use crate::geom::{Coord, Orientation};
use crate::traversal::Traversal;

/// Accumulates runs of one segment character along one traversal.
struct LineScan<'a> {
    canvas: &'a Canvas,
    segment: char,
    /// Characters the line may be drawn underneath without terminating.
    pass_throughs: Vec<char>,
    orientation: Orientation,
    current: Option<Line>,
    last_seen: char,
    lines: Vec<Line>,
}

impl<'a> LineScan<'a> {
    fn new(canvas: &'a Canvas, segment: char, extra: &[char], orientation: Orientation) -> Self {
        let mut pass_throughs = JOINTS.to_vec();
        pass_throughs.extend_from_slice(extra);
        Self {
            canvas,
            segment,
            pass_throughs,
            orientation,
            current: None,
            last_seen: ' ',
            lines: Vec::new(),
        }
    }

    /// Finishes the current run, keeping it only if it goes somewhere.
    fn snip(&mut self) {
        if let Some(line) = self.current.take() {
            if line.goes_somewhere() {
                self.lines.push(line);
            }
        }
    }

    fn start(&mut self, i: Coord) {
        if self.current.is_none() {
            let ch = self.canvas.char_at(i);
            self.current = Some(Line {
                start_char: ch,
                stop_char: ch,
                ..Line::new(i, i, self.orientation)
            });
        }
    }

    fn extend(&mut self, i: Coord) {
        let ch = self.canvas.char_at(i);
        if let Some(line) = self.current.as_mut() {
            line.stop = i;
            line.stop_char = ch;
        }
    }

    fn visit(&mut self, i: Coord) {
        let canvas = self.canvas;
        let r = canvas.char_at(i);

        let is_segment = r == self.segment;
        let is_pass_through = self.pass_throughs.contains(&r);
        let corner = canvas.rounded_corner_at(i);
        let just_passed_through = self.pass_throughs.contains(&self.last_seen);

        let mut keep = (is_segment || is_pass_through) && corner == Orientation::None;

        // A rounded corner that is also a joint on a vertical or diagonal line, e.g.
        //
        //  '+--
        //   |
        //
        // Horizontal lines still stop at the corner.
        if corner != Orientation::None
            && self.orientation != Orientation::E
            && (canvas.part_of_vertical_line(i) || canvas.part_of_diagonal_line(i))
        {
            keep = true;
        }

        // Don't connect `|` to `>` on diagonals, or `))` on horizontals.
        if is_pass_through && just_passed_through && self.orientation != Orientation::S {
            self.snip();
        }

        // Don't draw through `o` to `o`, `+` to `o`, etc. The current cell may still
        // start a new line.
        if just_passed_through && (is_circle(r) || is_triangle(r)) {
            self.snip();
        }

        match self.current {
            None => {
                if keep {
                    self.start(i);
                }
            }
            Some(line) => {
                if !keep {
                    // A segment all by itself: keep it as a one-cell line and remember it
                    // is lonely, the emitter offsets those.
                    if !line.goes_somewhere()
                        && self.last_seen == self.segment
                        && !canvas.part_of_rounded_corner(line.start)
                    {
                        self.extend(line.start.step(self.orientation));
                        if let Some(current) = self.current.as_mut() {
                            current.lonely = true;
                        }
                    }
                    self.snip();
                } else if is_pass_through {
                    // Include the pass-through, then restart from it: the line may go on.
                    self.extend(i);
                    self.snip();
                    self.start(i);
                } else {
                    self.extend(i);
                }
            }
        }

        self.last_seen = r;
    }
}

impl Canvas {
    /// Runs of `segment` (plus its pass-through characters) in the given traversal order.
    fn lines_for_segment(&self, segment: char) -> Vec<Line> {
        let (traversal, extra): (Traversal, &[char]) = match segment {
            '-' => (Traversal::RowMajor, &['<', '>', '(', ')']),
            '_' => (Traversal::RowMajor, &['|']),
            '|' => (Traversal::ColumnMajor, &['^', 'v']),
            '/' => (Traversal::DiagonalUp, &['o', '*', '<', '>', '^', 'v', '|']),
            '\\' => (Traversal::DiagonalDown, &['o', '*', '<', '>', '^', 'v', '|']),
            _ => return Vec::new(),
        };
        let orientation = traversal.direction();
        let mut scan = LineScan::new(self, segment, extra, orientation);

        // One extra row and column so every run ends on a blank. A jump between traversal
        // groups reads as a blank cell in between.
        let mut prev: Option<Coord> = None;
        for i in traversal.iter(self.width() + 1, self.height() + 1) {
            if let Some(p) = prev {
                let next = p.step(orientation);
                if next != i {
                    scan.visit(next);
                }
            }
            scan.visit(i);
            prev = Some(i);
        }
        if let Some(p) = prev {
            scan.visit(p.step(orientation));
        }
        scan.lines
    }

    /// Every line segment in the diagram: midlines, baselines, verticals, both diagonals,
    /// and vertical half steps, in that order.
    pub fn lines(&self) -> Vec<Line> {
        let midlines = self.lines_for_segment('-');

        let mut diag_up = self.lines_for_segment('/');
        for l in &mut diag_up {
            self.nudge_diagonal_up(l);
        }

        let mut diag_down = self.lines_for_segment('\\');
        for l in &mut diag_down {
            self.nudge_diagonal_down(l);
        }

        let mut baselines = self.lines_for_segment('_');
        for l in &mut baselines {
            self.nudge_baseline(l);
        }

        let verticals = self.lines_for_segment('|');

        let mut lines = midlines;
        lines.extend(baselines);
        lines.extend(verticals);
        lines.extend(diag_up);
        lines.extend(diag_down);
        lines.extend(self.half_steps());
        lines
    }

    fn nudge_diagonal_up(&self, l: &mut Line) {
        let at = |i: Coord| self.char_at(i);

        // /_
        if at(l.start.east()) == '_' {
            l.nudges.tiny_left = true;
        }
        // _
        // /
        if at(l.stop.north()) == '_' {
            l.nudges.tiny_right = true;
        }
        if l.lonely {
            return;
        }
        //  _
        // /
        if at(l.stop.north_east()) == '_' {
            l.nudges.tiny_right = true;
        }
        // _/
        if at(l.start.west()) == '_' {
            l.nudges.tiny_left = true;
        }
        // \
        // /
        if at(l.stop.north()) == '\\' {
            l.nudges.tiny_right = true;
        }
        // /
        // \
        if at(l.start.south()) == '\\' {
            l.nudges.tiny_left = true;
        }
    }

    fn nudge_diagonal_down(&self, l: &mut Line) {
        let at = |i: Coord| self.char_at(i);

        // _\
        if at(l.stop.west()) == '_' {
            l.nudges.tiny_right = true;
        }
        // _
        // \
        if at(l.start.north()) == '_' {
            l.nudges.tiny_left = true;
        }
        if l.lonely {
            return;
        }
        //  _
        //   \
        if at(l.start.north_west()) == '_' {
            l.nudges.tiny_left = true;
        }
        // \_
        if at(l.stop.east()) == '_' {
            l.nudges.tiny_right = true;
        }
        // \
        // /
        if at(l.stop.south()) == '/' {
            l.nudges.tiny_right = true;
        }
        // /
        // \
        if at(l.start.north()) == '/' {
            l.nudges.tiny_left = true;
        }
    }

    fn nudge_baseline(&self, l: &mut Line) {
        let at = |i: Coord| self.char_at(i);
        let n = &mut l.nudges;

        n.down = true;

        //     _
        // _| |
        if at(l.stop.south_east()) == '|' || at(l.stop.north_east()) == '|' {
            n.right = true;
        }
        // _
        //  |  _|
        if at(l.start.south_west()) == '|' || at(l.start.north_west()) == '|' {
            n.left = true;
        }
        //     _
        // _/   \
        if at(l.stop.east()) == '/' || at(l.stop.south_east()) == '\\' {
            n.tiny_right = true;
        }
        //    _
        // \_   /
        if at(l.start.west()) == '\\' || at(l.start.south_west()) == '/' {
            n.tiny_left = true;
        }
        // _\
        if at(l.stop.east()) == '\\' {
            n.right = true;
            n.tiny_right = true;
        }
        // /_
        if at(l.start.west()) == '/' {
            n.left = true;
            n.tiny_left = true;
        }
        // _
        // /
        if at(l.stop.south()) == '/' {
            n.tiny_right = true;
        }
        // _
        // \
        if at(l.start.south()) == '\\' {
            n.tiny_left = true;
        }
        //  _
        // '
        if at(l.start.south_west()) == '\'' {
            n.left = true;
        }
        // _
        //  '
        if at(l.stop.south_east()) == '\'' {
            n.right = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<Line> {
        Canvas::parse(input).unwrap().lines()
    }

    #[test]
    fn horizontal_run() {
        let ls = lines("+----+\n");
        assert_eq!(ls.len(), 1);
        let l = ls[0];
        assert_eq!((l.start, l.stop), (Coord::new(0, 0), Coord::new(5, 0)));
        assert_eq!(l.orientation, Orientation::E);
        assert_eq!((l.start_char, l.stop_char), ('+', '+'));
        assert!(!l.lonely);
    }

    #[test]
    fn lonely_forward_slash() {
        let ls = lines("   \n / \n   \n");
        assert_eq!(ls.len(), 1);
        let l = ls[0];
        assert!(l.lonely);
        assert_eq!(l.orientation, Orientation::NE);
        assert_eq!(l.start, Coord::new(1, 1));
        assert_eq!(l.stop, Coord::new(2, 0));
    }

    #[test]
    fn lonely_slash_on_first_row_stays_local() {
        let ls = lines("   / \n     \n     \n     \n     \n");
        assert_eq!(ls.len(), 1);
        assert!(ls[0].lonely);
        assert_eq!(ls[0].start, Coord::new(3, 0));
        assert_eq!(ls[0].stop, Coord::new(4, -1));
    }

    #[test]
    fn embedded_slash_is_not_lonely() {
        let ls = lines("  /\n /\n/\n");
        assert_eq!(ls.len(), 1);
        let l = ls[0];
        assert!(!l.lonely);
        assert_eq!((l.start, l.stop), (Coord::new(0, 2), Coord::new(2, 0)));
    }

    #[test]
    fn backslash_run() {
        let ls = lines("\\\n \\\n  \\\n");
        assert_eq!(ls.len(), 1);
        assert_eq!(ls[0].orientation, Orientation::SE);
        assert_eq!((ls[0].start, ls[0].stop), (Coord::new(0, 0), Coord::new(2, 2)));
    }

    #[test]
    fn vertical_run_through_joint() {
        let ls = lines("|\n+\n|\n");
        let verticals: Vec<_> = ls.iter().filter(|l| l.is_vertical()).collect();
        assert_eq!(verticals.len(), 2, "split at the joint: {verticals:?}");
        assert_eq!(verticals[0].stop, Coord::new(0, 1));
        assert_eq!(verticals[1].start, Coord::new(0, 1));
    }

    #[test]
    fn circle_after_pass_through_snips() {
        let ls = lines("-+o-\n");
        assert!(
            ls.iter().all(|l| !(l.start.x <= 1 && l.stop.x >= 2)),
            "no line drawn from the joint through the circle: {ls:?}"
        );
    }

    #[test]
    fn baselines_are_nudged_down() {
        let ls = lines(" ___ \n");
        assert_eq!(ls.len(), 1);
        assert!(ls[0].nudges.down);
        assert!(!ls[0].nudges.left && !ls[0].nudges.right);
    }

    #[test]
    fn slash_meets_baseline() {
        //  /
        // /__
        let ls = lines(" /\n/__\n");
        let up = ls.iter().find(|l| l.orientation == Orientation::NE).unwrap();
        assert!(up.nudges.tiny_left);
        assert!(!up.nudges.tiny_right);
        let base = ls.iter().find(|l| l.nudges.down).unwrap();
        assert!(base.nudges.left && base.nudges.tiny_left);
    }
}
