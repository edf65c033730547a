#![forbid(unsafe_code)]

//! `ascii-svg` turns ASCII-art diagrams into standalone SVG documents.
//!
//! ```text
//!   .---.      .-------.      .-----.
//!  | txt +--->| analyse +--->| svg   |
//!   '---'      '-------'      '-----'
//! ```
//!
//! The engine lives in `ascii-svg-core` (grid, partitioning, shape detection) and
//! `ascii-svg-render` (SVG emission); this crate ties them together.

use std::io::Read;

pub use ascii_svg_core::{
    AnchorDirective, AnchorSelector, AnchorTable, Bridge, Canvas, Circle, Coord, Drawable,
    Drawables, Line, LineNudges, Orientation, RoundedCorner, TextRun, Traversal, Triangle,
};
pub use ascii_svg_render::SvgRenderOptions;

pub mod render {
    pub use ascii_svg_render::draw::{CELL_HEIGHT, CELL_WIDTH, Pixel, line_endpoints};
    pub use ascii_svg_render::svg::{document_size, render_document};
    pub use ascii_svg_render::text::TextDrawer;
    pub use ascii_svg_render::{SvgRenderOptions, render_body, render_svg};
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ascii_svg_core::Error),
    #[error(transparent)]
    Render(#[from] ascii_svg_render::Error),
    #[error("failed to read diagram: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Converts a newline-delimited diagram into an SVG document.
///
/// All-or-nothing: on error no partial document is returned.
pub fn convert(text: &str, options: &SvgRenderOptions) -> Result<String> {
    let canvas = Canvas::parse(text)?;
    let svg = ascii_svg_render::render_svg(&canvas, options)?;
    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        bytes = svg.len(),
        "converted diagram"
    );
    Ok(svg)
}

/// Like [`convert`], reading the whole diagram from `reader` first.
pub fn convert_reader<R: Read>(mut reader: R, options: &SvgRenderOptions) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    convert(&text, options)
}

/// Detected shapes for a diagram, without rendering.
pub fn detect(text: &str) -> Result<Drawables> {
    Ok(Canvas::parse(text)?.drawables())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_reports_parse_errors() {
        let err = convert("a\tb\n", &SvgRenderOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Parse(ascii_svg_core::Error::TabCharacter { line: 1, column: 2 })
        ));
        assert!(err.to_string().starts_with("TAB character found"));
    }

    #[test]
    fn convert_reports_render_errors() {
        let err = convert("#AB<> color:red\nB\n", &SvgRenderOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Render(ascii_svg_render::Error::UnopenedAnchor { close: 'B', .. })
        ));
    }

    #[test]
    fn reader_and_str_agree() {
        let text = "+--+\n|  |\n+--+\n";
        let options = SvgRenderOptions::default();
        let a = convert(text, &options).unwrap();
        let b = convert_reader(text.as_bytes(), &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let bytes: &[u8] = &[b'a', 0xff, b'\n'];
        let err = convert_reader(bytes, &SvgRenderOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
