use crate::draw::Pixel;
use crate::{Error, Result};
use ascii_svg_core::{AnchorSelector, AnchorTable, TextRun};
use std::fmt::Write as _;

/// Emits text cells in row-major order while tracking which anchors are open.
///
/// Anchor markers must nest: each close character has to match the most recently opened
/// anchor that is still open.
#[derive(Debug)]
pub struct TextDrawer<'a> {
    anchors: &'a AnchorTable,
    stack: Vec<AnchorSelector>,
}

impl<'a> TextDrawer<'a> {
    pub fn new(anchors: &'a AnchorTable) -> Self {
        Self {
            anchors,
            stack: Vec::new(),
        }
    }

    /// Number of anchors opened and not yet closed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn draw(&mut self, out: &mut String, t: &TextRun) -> Result<()> {
        let p = Pixel::from(t.start);

        if let Some(selector) = self.anchors.closed_by(t.ch) {
            let Some(&top) = self.stack.last() else {
                return Err(Error::UnopenedAnchor {
                    close: t.ch,
                    at: t.start,
                });
            };
            if top != selector {
                return Err(Error::MismatchedAnchor {
                    open: self.open_char(top)?,
                    close: t.ch,
                    at: t.start,
                });
            }
            let replacement = self.directive_replacement(selector, 1)?;
            glyph(out, p, replacement);
            out.push_str("</a>\n");
            self.stack.pop();
            return Ok(());
        }

        if let Some(selector) = self.anchors.opened_by(t.ch) {
            let directive = self
                .anchors
                .get(selector)
                .ok_or(Error::AnchorLookup { selector })?;
            self.stack.push(selector);
            let _ = write!(out, "<a class='{}'", selector.class_name());
            for attr in &directive.attributes {
                out.push(' ');
                out.push_str(attr);
            }
            out.push_str(">\n");
            glyph(out, p, directive.replacements[0]);
            return Ok(());
        }

        glyph(out, p, t.ch);
        Ok(())
    }

    /// Fails if any anchor is still open once every text cell has been drawn.
    pub fn finish(self) -> Result<()> {
        match self.stack.last() {
            None => Ok(()),
            Some(&last) => Err(Error::UnclosedAnchor {
                count: self.stack.len(),
                open: self.open_char(last)?,
            }),
        }
    }

    fn open_char(&self, selector: AnchorSelector) -> Result<char> {
        self.anchors
            .get(selector)
            .map(|d| d.open)
            .ok_or(Error::AnchorLookup { selector })
    }

    fn directive_replacement(&self, selector: AnchorSelector, idx: usize) -> Result<char> {
        self.anchors
            .get(selector)
            .map(|d| d.replacements[idx])
            .ok_or(Error::AnchorLookup { selector })
    }
}

/// Shade glyphs are drawn as filled cells, like a checkerboard.
fn shade_fill(ch: char) -> Option<&'static str> {
    match ch {
        '▉' => Some("currentColor"),
        '▓' => Some("rgb(64,64,64)"),
        '▒' => Some("rgb(128,128,128)"),
        '░' => Some("rgb(191,191,191)"),
        _ => None,
    }
}

fn glyph(out: &mut String, p: Pixel, ch: char) {
    if let Some(fill) = shade_fill(ch) {
        let _ = writeln!(
            out,
            "<rect x='{}' y='{}' width='8' height='16' fill='{fill}'></rect>",
            p.x - 4,
            p.y - 8
        );
        return;
    }

    let escaped = match ch {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        _ => ch.to_string(),
    };
    // +4 puts the baseline level with neighboring graphics.
    let _ = writeln!(out, "<text x='{}' y='{}'>{escaped}</text>", p.x, p.y + 4);
}
