#![forbid(unsafe_code)]

//! ASCII-art diagram parser and shape detector (headless).
//!
//! [`Canvas::parse`] reads a diagram into a character grid, records its anchor directives
//! and splits every cell into either the graphics or the text layer. The detectors in
//! [`detect`] then recognize lines, arrowheads, circles, rounded corners and bridges on
//! the graphics layer. Turning those into SVG is the job of `ascii-svg-render`.

pub mod anchors;
pub mod canvas;
pub mod charset;
mod context;
pub mod detect;
pub mod error;
pub mod geom;
mod partition;
pub mod traversal;

pub use anchors::{AnchorDirective, AnchorSelector, AnchorTable};
pub use canvas::{Canvas, TextRun};
pub use detect::{Bridge, Circle, Drawable, Drawables, Line, LineNudges, RoundedCorner, Triangle};
pub use error::{Error, Result};
pub use geom::{Coord, Orientation};
pub use traversal::Traversal;
