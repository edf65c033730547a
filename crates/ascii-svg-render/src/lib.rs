#![forbid(unsafe_code)]

//! SVG emitter for diagrams analysed by `ascii-svg-core`.
//!
//! Output is plain text built with `std::fmt::Write`; no DOM is involved. Identical input
//! and options always produce byte-identical documents.

pub mod draw;
pub mod svg;
pub mod text;

use ascii_svg_core::{AnchorSelector, Canvas, Coord};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("close key '{close}' found at {at}, but no matching open key")]
    UnopenedAnchor { close: char, at: Coord },
    #[error("earlier open key '{open}' does not match closing anchor key '{close}' at {at}")]
    MismatchedAnchor { open: char, close: char, at: Coord },
    #[error("end of input reached, but {count} anchor-open keys remain unclosed, last is '{open}'")]
    UnclosedAnchor { count: usize, open: char },
    #[error("no anchor directive registered for selector {selector}")]
    AnchorLookup { selector: AnchorSelector },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Presentation settings for the output document.
///
/// Deserializes from a partial JSON object; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SvgRenderOptions {
    /// Value of the root `font-family` attribute.
    pub font_names: String,
    pub font_size: String,
    /// Stroke and text color unless the viewer prefers a dark scheme.
    pub color_light_scheme: String,
    pub color_dark_scheme: String,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            font_names: "monospace".to_string(),
            font_size: "1.1em".to_string(),
            color_light_scheme: "#000000".to_string(),
            color_dark_scheme: "#FFFFFF".to_string(),
        }
    }
}

/// Renders the group of drawn elements, translated so cell `(0, 0)` gets a margin.
///
/// Graphics are drawn in category order (lines, triangles, rounded corners, circles,
/// bridges), then text.
pub fn render_body(canvas: &Canvas) -> Result<String> {
    let drawables = canvas.drawables();

    let mut out = String::new();
    out.push_str("<g transform='translate(8,16)'>\n");
    for d in drawables.iter() {
        draw::draw(&mut out, &d);
    }

    let mut text = text::TextDrawer::new(canvas.anchors());
    for t in &drawables.text {
        text.draw(&mut out, t)?;
    }
    text.finish()?;

    out.push_str("</g>\n");
    Ok(out)
}

/// Renders a complete, standalone SVG document for `canvas`.
pub fn render_svg(canvas: &Canvas, options: &SvgRenderOptions) -> Result<String> {
    let body = render_body(canvas)?;
    let svg = svg::render_document(
        canvas.width(),
        canvas.height(),
        canvas.anchors(),
        options,
        &body,
    );
    tracing::debug!(bytes = svg.len(), "rendered svg");
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_partially() {
        let options: SvgRenderOptions =
            serde_json::from_str(r##"{"fontSize": "12px", "colorDarkScheme": "#abc"}"##).unwrap();
        assert_eq!(options.font_size, "12px");
        assert_eq!(options.color_dark_scheme, "#abc");
        assert_eq!(options.font_names, "monospace");
        assert_eq!(options.color_light_scheme, "#000000");
    }

    #[test]
    fn body_orders_graphics_before_text() {
        let canvas = Canvas::parse("hi\n\n o\n").unwrap();
        let body = render_body(&canvas).unwrap();
        let circle = body.find("<circle").unwrap();
        let text = body.find("<text").unwrap();
        assert!(circle < text);
        assert!(body.starts_with("<g transform='translate(8,16)'>\n"));
        assert!(body.ends_with("</g>\n"));
    }

    #[test]
    fn empty_diagram_is_a_valid_document() {
        let canvas = Canvas::parse("").unwrap();
        let svg = render_svg(&canvas, &SvgRenderOptions::default()).unwrap();
        assert!(svg.contains("height='9' width='8'"));
        assert!(svg.contains("<g transform='translate(8,16)'>\n</g>\n</svg>\n"));
    }
}
