pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("TAB character found on input at line {line}, column {column}; expand tabs to spaces first")]
    TabCharacter { line: usize, column: usize },

    #[error(
        "Field '{field}' in line '{line}' does not appear to be either an HTML attribute or CSS property. Recall that fields are divided by space characters -- quoting of embedded space is not supported."
    )]
    MalformedDirective { field: String, line: String },

    #[error("line '{line}' lacks a directive header: '#', four printable characters, then a space")]
    DirectiveHeader { line: String },
}
