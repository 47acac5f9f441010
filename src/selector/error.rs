use std::fmt;

/// A selector pattern that could not be compiled.
///
/// Offsets are byte offsets into the raw pattern text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSyntaxError {
    /// The pattern text was `""`.
    Empty,
    /// A `[` with no matching `]`.
    UnterminatedFilter { offset: usize },
    /// A `[]` filter with no capability name.
    EmptyFilter { offset: usize },
    /// More than one `[name]` token.
    MultipleFilters { count: usize },
    /// Two `**` segments with nothing between them. `index` is the position
    /// of the second one in the segment list.
    AdjacentMultiWildcards { index: usize },
}

impl fmt::Display for PatternSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSyntaxError::Empty => write!(f, "pattern is empty"),
            PatternSyntaxError::UnterminatedFilter { offset } => {
                write!(f, "unterminated `[` at offset {offset}")
            }
            PatternSyntaxError::EmptyFilter { offset } => {
                write!(f, "empty capability filter `[]` at offset {offset}")
            }
            PatternSyntaxError::MultipleFilters { count } => {
                write!(f, "found {count} capability filters, at most one is allowed")
            }
            PatternSyntaxError::AdjacentMultiWildcards { index } => {
                write!(f, "adjacent `**` segments at segment {index}")
            }
        }
    }
}

impl std::error::Error for PatternSyntaxError {}
