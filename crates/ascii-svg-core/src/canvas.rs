use crate::anchors::{AnchorSelector, AnchorTable, is_directive};
use crate::error::{Error, Result};
use crate::geom::Coord;
use crate::traversal::Traversal;
use rustc_hash::FxHashMap;

/// The parsed state of one diagram.
///
/// Every non-directive input character occupies one cell. After [`Canvas::parse`] returns,
/// each occupied cell lives in exactly one of two layers: graphics (`data`) or text.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// Cells; the widest line, in characters.
    width: i32,
    /// Cells; every non-directive line counts, blank or not.
    height: i32,
    data: FxHashMap<Coord, char>,
    text: FxHashMap<Coord, char>,
    anchors: AnchorTable,
}

/// One text-layer cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TextRun {
    pub start: Coord,
    pub ch: char,
}

impl Canvas {
    /// Builds a fully-partitioned canvas from newline-delimited diagram text.
    ///
    /// # Errors
    ///
    /// Fails on a TAB character anywhere in the diagram, or on a malformed anchor directive.
    pub fn parse(input: &str) -> Result<Self> {
        let mut canvas = Self::ingest(input)?;
        canvas.move_to_text();
        Ok(canvas)
    }

    /// Line-oriented scan of the input; fills the graphics layer only.
    pub(crate) fn ingest(input: &str) -> Result<Self> {
        let mut canvas = Self::default();
        let mut width = 0i32;
        let mut height = 0i32;

        for (line_idx, line) in input.lines().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                height += 1;
                continue;
            }

            if is_directive(&chars) {
                canvas
                    .anchors
                    .parse_directive(&chars, AnchorSelector(line_idx + 1))?;
                continue;
            }

            let mut x = 0i32;
            for (column, &ch) in chars.iter().enumerate() {
                if ch == '\t' {
                    return Err(Error::TabCharacter {
                        line: line_idx + 1,
                        column: column + 1,
                    });
                }
                canvas.data.insert(Coord::new(x, height), ch);
                x += 1;
            }
            width = width.max(x);
            height += 1;
        }

        canvas.width = width;
        canvas.height = height;
        tracing::debug!(
            width,
            height,
            cells = canvas.data.len(),
            anchors = canvas.anchors.len(),
            "ingested diagram"
        );
        Ok(canvas)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    /// The graphics-layer character at `i`, or `' '` for blank, off-line and text cells.
    pub fn char_at(&self, i: Coord) -> char {
        self.data.get(&i).copied().unwrap_or(' ')
    }

    /// Raw graphics-layer lookup; `None` means the cell lies off the end of its line.
    pub(crate) fn data_at(&self, i: Coord) -> Option<char> {
        self.data.get(&i).copied()
    }

    /// The text-layer character at `i`, if the cell was classified as text.
    pub fn text_at(&self, i: Coord) -> Option<char> {
        self.text.get(&i).copied()
    }

    pub fn graphics_len(&self) -> usize {
        self.data.len()
    }

    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Moves every cell the partitioner classifies as text from the graphics layer into the
    /// text layer. Decisions are taken against the layer as it stands before any move.
    pub(crate) fn move_to_text(&mut self) {
        let moved = self.text_cells();
        for (i, ch) in moved {
            self.data.remove(&i);
            self.text.insert(i, ch);
        }
        tracing::debug!(
            graphics = self.data.len(),
            text = self.text.len(),
            "partitioned diagram"
        );
    }

    /// All text characters, top-to-bottom then left-to-right.
    pub fn text(&self) -> Vec<TextRun> {
        Traversal::RowMajor
            .iter(self.width, self.height)
            .filter_map(|start| self.text_at(start).map(|ch| TextRun { start, ch }))
            .collect()
    }
}
