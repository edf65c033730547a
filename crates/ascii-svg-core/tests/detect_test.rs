use ascii_svg_core::{Canvas, Coord, Drawable, Error, Orientation};
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture(name: &str) -> String {
    let path = workspace_root().join("fixtures").join(name);
    std::fs::read_to_string(&path).expect("fixture")
}

#[test]
fn every_fixture_parses() {
    let dir = workspace_root().join("fixtures");
    let mut seen = 0;
    for entry in std::fs::read_dir(&dir).expect("fixtures dir") {
        let path = entry.expect("dir entry").path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let text = std::fs::read_to_string(&path).expect("fixture");
        let canvas = Canvas::parse(&text)
            .unwrap_or_else(|e| panic!("{} failed to parse: {e}", path.display()));
        assert!(canvas.width() > 0, "{}", path.display());
        seen += 1;
    }
    assert!(seen >= 5);
}

#[test]
fn box_fixture() {
    let canvas = Canvas::parse(&fixture("box.txt")).expect("parse ok");
    let d = canvas.drawables();

    let corners: Vec<_> = d
        .rounded_corners
        .iter()
        .map(|c| (c.start, c.orientation))
        .collect();
    assert_eq!(
        corners,
        vec![
            (Coord::new(1, 0), Orientation::NW),
            (Coord::new(14, 0), Orientation::NE),
            (Coord::new(1, 2), Orientation::SW),
            (Coord::new(14, 2), Orientation::SE),
        ]
    );

    let spans: Vec<_> = d.lines.iter().map(|l| (l.start, l.stop)).collect();
    assert_eq!(
        spans,
        vec![
            (Coord::new(2, 0), Coord::new(13, 0)),
            (Coord::new(2, 2), Coord::new(13, 2)),
        ]
    );

    let label: String = d.text.iter().map(|t| t.ch).collect();
    assert_eq!(label, "ascii-svg");
}

#[test]
fn arrows_fixture() {
    let canvas = Canvas::parse(&fixture("arrows.txt")).expect("parse ok");
    let d = canvas.drawables();

    let circles: Vec<_> = d.circles.iter().map(|c| (c.start, c.bold)).collect();
    assert_eq!(
        circles,
        vec![(Coord::new(6, 7), true), (Coord::new(11, 4), false)]
    );

    let heads: Vec<_> = d
        .triangles
        .iter()
        .filter_map(|t| match t {
            Drawable::Triangle(t) => Some((t.start, t.orientation)),
            _ => None,
        })
        .collect();
    assert_eq!(heads.len(), 5);
    assert!(heads.contains(&(Coord::new(1, 4), Orientation::W)));
    assert!(heads.contains(&(Coord::new(3, 3), Orientation::SW)));
    assert!(heads.contains(&(Coord::new(6, 3), Orientation::S)));
    assert!(heads.contains(&(Coord::new(9, 3), Orientation::SE)));

    // The three heads resting on the midline each get a tail.
    let tails = d
        .triangles
        .iter()
        .filter(|t| matches!(t, Drawable::Line(_)))
        .count();
    assert_eq!(tails, 3);
}

#[test]
fn bridges_fixture() {
    let canvas = Canvas::parse(&fixture("bridges.txt")).expect("parse ok");
    let d = canvas.drawables();
    let bridges: Vec<_> = d
        .bridges
        .iter()
        .filter_map(|b| match b {
            Drawable::Bridge(b) => Some((b.start, b.orientation)),
            _ => None,
        })
        .collect();
    assert_eq!(
        bridges,
        vec![
            (Coord::new(3, 1), Orientation::E),
            (Coord::new(9, 1), Orientation::W),
        ]
    );
}

#[test]
fn anchor_fixture_declares_two_directives() {
    let canvas = Canvas::parse(&fixture("anchors.txt")).expect("parse ok");
    let table = canvas.anchors();
    assert_eq!(table.len(), 2);
    let (first, directive) = table.iter().next().expect("first directive");
    assert_eq!(first.class_name(), "_01");
    assert_eq!(directive.class, "color:blue;");
    assert_eq!(directive.dark_class, "color:lightblue;");
    assert_eq!(
        directive.attributes,
        vec!["href='https://example.com/'".to_string()]
    );
    assert_eq!(canvas.height(), 4, "directive lines take no rows");
}

#[test]
fn errors_are_reported_in_line_order() {
    let err = Canvas::parse("#AB<> bogus\n+--+\n|\t |\n").unwrap_err();
    assert!(
        matches!(err, Error::MalformedDirective { .. }),
        "directives are read top-down, so the earlier error wins: {err}"
    );
    let err = Canvas::parse("+--+\n|\t |\n").unwrap_err();
    assert_eq!(err, Error::TabCharacter { line: 2, column: 2 });
}

#[test]
fn lonely_slash_has_offset_unit_line() {
    let canvas = Canvas::parse("  \n / \n  \n").expect("parse ok");
    let lines = canvas.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].lonely);
    assert_eq!(lines[0].orientation, Orientation::NE);
}
