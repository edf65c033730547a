use crate::SvgRenderOptions;
use crate::draw::{CELL_HEIGHT, CELL_WIDTH};
use ascii_svg_core::AnchorTable;
use std::fmt::Write as _;

/// Outer pixel size `(width, height)` of a `width` × `height` cell diagram, margins included.
pub fn document_size(width: i32, height: i32) -> (i32, i32) {
    ((width + 1) * CELL_WIDTH, height * CELL_HEIGHT + 8 + 1)
}

/// Wraps a rendered body in the root `<svg>` element and its stylesheet.
///
/// Anchor classes appear in declaration order; see
/// <https://drafts.csswg.org/mediaqueries-5/#prefers-color-scheme> for the dark block.
pub fn render_document(
    width: i32,
    height: i32,
    anchors: &AnchorTable,
    options: &SvgRenderOptions,
    body: &str,
) -> String {
    let (w, h) = document_size(width, height);

    let mut classes = String::new();
    let mut dark_classes = String::new();
    for (selector, directive) in anchors.iter() {
        let name = selector.class_name();
        let _ = writeln!(&mut classes, ".{name} {{{}}}", directive.class);
        let _ = writeln!(&mut dark_classes, "    .{name} {{{}}}", directive.dark_class);
    }

    let mut out = String::with_capacity(body.len() + 512);
    let _ = writeln!(
        &mut out,
        "<svg xmlns='http://www.w3.org/2000/svg' version='1.1' height='{h}' width='{w}' fill='currentColor' font-family='{}' font-size='{}' text-anchor='middle' >",
        options.font_names, options.font_size,
    );
    let _ = write!(
        &mut out,
        r#"<style type="text/css">
svg {{
    color: {light};
    stroke: currentColor;
}}
text {{
    stroke: none;
}}
path {{
    fill: none;
}}
{classes}@media (prefers-color-scheme: dark) {{
    svg {{
      color-scheme: dark;
      color: {dark};
    }}
{dark_classes}}}
</style>
"#,
        light = options.color_light_scheme,
        dark = options.color_dark_scheme,
    );
    out.push_str(body);
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascii_svg_core::AnchorSelector;

    #[test]
    fn size_includes_margins() {
        assert_eq!(document_size(0, 0), (8, 9));
        assert_eq!(document_size(10, 3), (88, 57));
    }

    #[test]
    fn header_carries_options() {
        let options = SvgRenderOptions {
            font_names: "Fira Code,monospace".to_string(),
            font_size: "14px".to_string(),
            color_light_scheme: "#333".to_string(),
            color_dark_scheme: "#EEE".to_string(),
        };
        let svg = render_document(2, 1, &AnchorTable::new(), &options, "");
        assert!(svg.starts_with(
            "<svg xmlns='http://www.w3.org/2000/svg' version='1.1' height='25' width='24' fill='currentColor' font-family='Fira Code,monospace' font-size='14px' text-anchor='middle' >\n<style type=\"text/css\">\nsvg {\n    color: #333;\n"
        ));
        assert!(svg.contains("      color: #EEE;\n    }\n}\n</style>\n</svg>\n"));
    }

    #[test]
    fn anchor_classes_split_by_scheme() {
        let mut table = AnchorTable::new();
        let line: Vec<char> = "#AB<> color:red -- color:blue".chars().collect();
        table.parse_directive(&line, AnchorSelector(3)).unwrap();
        let svg = render_document(1, 1, &table, &SvgRenderOptions::default(), "");
        assert!(svg.contains("path {\n    fill: none;\n}\n._03 {color:red;}\n@media"));
        assert!(svg.contains("      color: #FFFFFF;\n    }\n    ._03 {color:blue;}\n}\n"));
    }
}
