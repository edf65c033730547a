//! Character classes that carry diagram meaning.
//!
//! These tables are process-wide constants; the predicates below are the only way the rest of
//! the crate consults them.

/// Characters where more than one line segment can come together.
pub const JOINTS: &[char] = &['.', '\'', '+', '*', 'o'];

/// Characters reserved for diagrams. A reserved character is graphics unless the
/// partitioner finds text context around it.
///
/// Space is reserved as well: a blank never turns a neighbor into text.
pub const RESERVED: &[char] = &[
    '.', '\'', '+', '*', 'o', '-', '_', '|', 'v', '^', '>', '<', '/', '\\', ')', '(', ' ',
];

/// Characters whose SVG rendition is too wide, or otherwise awkward, to sit next to another
/// member of this set. Two of them side by side are taken to be text (e.g. `(v)`, ` v. `).
///
/// `<` and `>` are deliberately absent: `o<` and `>o` are arrows into circles.
pub const WIDE: &[char] = &['o', '*', 'v', '^', ')', '(', '.'];

pub fn is_joint(c: char) -> bool {
    JOINTS.contains(&c)
}

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

pub fn is_wide(c: char) -> bool {
    WIDE.contains(&c)
}

pub fn is_circle(c: char) -> bool {
    c == 'o' || c == '*'
}

pub fn is_triangle(c: char) -> bool {
    matches!(c, '^' | 'v' | '<' | '>')
}

/// Characters a vertical stroke may enter a rounded corner from.
pub fn is_vertical_joinable(c: char) -> bool {
    matches!(c, '|' | '+' | ')' | '(') || is_circle(c)
}
