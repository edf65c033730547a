//! Hyperlink-anchor directives.
//!
//! A directive line has the shape
//!
//! ```text
//! #<open><close><repl-open><repl-close> <field> <field> ... [# comment]
//! ```
//!
//! Text between an `open` and a `close` character in the diagram is wrapped in an `<a>`
//! element carrying the directive's attributes and CSS class. The marker characters
//! themselves are drawn as the two replacement characters.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Identifies one directive: the 1-based number of the source line it was declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AnchorSelector(pub usize);

impl AnchorSelector {
    /// CSS class name used for this anchor in the output document.
    pub fn class_name(self) -> String {
        format!("_{:02}", self.0)
    }
}

impl std::fmt::Display for AnchorSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorDirective {
    pub open: char,
    pub close: char,
    /// Drawn in place of `open` and `close` respectively.
    pub replacements: [char; 2],
    /// CSS declarations, each terminated by `;`.
    pub class: String,
    /// CSS declarations applied under `prefers-color-scheme: dark`.
    pub dark_class: String,
    /// `key=value` HTML attributes for the enclosing `<a>` element, verbatim.
    pub attributes: Vec<String>,
}

/// All directives of one diagram, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct AnchorTable {
    directives: IndexMap<AnchorSelector, AnchorDirective>,
    opens: FxHashMap<char, AnchorSelector>,
    closes: FxHashMap<char, AnchorSelector>,
}

/// Format (`Cf`) and private-use (`Co`) code points. Neither is printable.
const INVISIBLE: &[(char, char)] = &[
    ('\u{00AD}', '\u{00AD}'),
    ('\u{0600}', '\u{0605}'),
    ('\u{061C}', '\u{061C}'),
    ('\u{06DD}', '\u{06DD}'),
    ('\u{070F}', '\u{070F}'),
    ('\u{0890}', '\u{0891}'),
    ('\u{08E2}', '\u{08E2}'),
    ('\u{180E}', '\u{180E}'),
    ('\u{200B}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206F}'),
    ('\u{E000}', '\u{F8FF}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFF9}', '\u{FFFB}'),
    ('\u{110BD}', '\u{110BD}'),
    ('\u{110CD}', '\u{110CD}'),
    ('\u{13430}', '\u{1343F}'),
    ('\u{1BCA0}', '\u{1BCA3}'),
    ('\u{1D173}', '\u{1D17A}'),
    ('\u{E0001}', '\u{E0001}'),
    ('\u{E0020}', '\u{E007F}'),
    ('\u{F0000}', '\u{FFFFD}'),
    ('\u{100000}', '\u{10FFFD}'),
];

/// Go-style "printable": graphic characters plus the ASCII space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !INVISIBLE.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Returns true when `line` has the fixed header shape of an anchor directive.
pub fn is_directive(line: &[char]) -> bool {
    line.len() >= 6
        && line[0] == '#'
        && line[1..5].iter().copied().all(is_printable)
        && line[5].is_whitespace()
}

impl AnchorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Parses a directive line and records it under `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectiveHeader`] if [`is_directive`] rejects the line, and
    /// [`Error::MalformedDirective`] for a field that is neither `key=value`,
    /// `property:value`, `--`, nor the start of a `#` comment.
    pub fn parse_directive(&mut self, line: &[char], selector: AnchorSelector) -> Result<()> {
        if !is_directive(line) {
            return Err(Error::DirectiveHeader {
                line: line.iter().collect(),
            });
        }
        let open = line[1];
        let close = line[2];

        let mut class = String::new();
        let mut dark_class = String::new();
        let mut attributes = Vec::new();
        let mut dark = false;

        let fields: String = line[6..].iter().collect();
        for field in fields.split_whitespace() {
            if field.starts_with('#') {
                break;
            }
            // '=' first: attribute values may contain ':'.
            if field.contains('=') {
                attributes.push(field.to_string());
                continue;
            }
            if field == "--" {
                dark = true;
                continue;
            }
            if field.contains(':') {
                let body = if dark { &mut dark_class } else { &mut class };
                body.push_str(field);
                body.push(';');
                continue;
            }
            return Err(Error::MalformedDirective {
                field: field.to_string(),
                line: line.iter().collect(),
            });
        }

        tracing::debug!(
            selector = selector.0,
            %open,
            %close,
            attributes = attributes.len(),
            "anchor directive"
        );

        self.opens.insert(open, selector);
        self.closes.insert(close, selector);
        self.directives.insert(
            selector,
            AnchorDirective {
                open,
                close,
                replacements: [line[3], line[4]],
                class,
                dark_class,
                attributes,
            },
        );
        Ok(())
    }

    pub fn get(&self, selector: AnchorSelector) -> Option<&AnchorDirective> {
        self.directives.get(&selector)
    }

    /// The directive `c` opens, if any.
    pub fn opened_by(&self, c: char) -> Option<AnchorSelector> {
        self.opens.get(&c).copied()
    }

    /// The directive `c` closes, if any.
    pub fn closed_by(&self, c: char) -> Option<AnchorSelector> {
        self.closes.get(&c).copied()
    }

    /// Directives in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (AnchorSelector, &AnchorDirective)> {
        self.directives.iter().map(|(s, d)| (*s, d))
    }
}
