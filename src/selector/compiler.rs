//! Selector pattern compiler.
//!
//! Turns raw pattern text into a [`CompiledPattern`]: the ordered segment
//! matchers plus at most one capability filter, which qualifies the whole
//! pattern no matter where its `[name]` token was written.

use std::fmt;

use crate::path::fold_case;

use super::error::PatternSyntaxError;
use super::lexer::{Lexer, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal path segment.
    Exact(String),
    /// `*` — exactly one segment of any value.
    Single,
    /// `**` — zero or more consecutive segments.
    Multi,
}

impl Segment {
    fn classify(text: &str) -> Segment {
        match text {
            "*" => Segment::Single,
            "**" => Segment::Multi,
            _ => Segment::Exact(text.to_string()),
        }
    }

    fn folded(&self) -> Segment {
        match self {
            Segment::Exact(name) => Segment::Exact(fold_case(name).into_owned()),
            other => other.clone(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Exact(name) => f.write_str(name),
            Segment::Single => f.write_str("*"),
            Segment::Multi => f.write_str("**"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
    /// `segments` with every literal lowercased, for case-insensitive matching.
    folded: Vec<Segment>,
    filter: Option<String>,
}

impl CompiledPattern {
    /// The raw text this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The segments to compare against a path normalized with the same
    /// `case_sensitive` setting.
    pub fn segments_for(&self, case_sensitive: bool) -> &[Segment] {
        if case_sensitive {
            &self.segments
        } else {
            &self.folded
        }
    }

    /// The required capability, if any.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// A pattern made of nothing but a capability filter matches any path.
    pub fn is_filter_only(&self) -> bool {
        self.segments.is_empty() && self.filter.is_some()
    }
}

/// Canonical form: segments joined by `.`, filter appended.
impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        if let Some(filter) = &self.filter {
            write!(f, "[{filter}]")?;
        }
        Ok(())
    }
}

/// Compile raw pattern text.
///
/// Empty segments (including the ones left behind when a filter token is
/// removed, as in `[light].**`) are dropped.
pub fn compile(raw: &str) -> Result<CompiledPattern, PatternSyntaxError> {
    if raw.is_empty() {
        return Err(PatternSyntaxError::Empty);
    }

    let tokens = Lexer::new(raw).tokenize()?;

    let mut text = String::with_capacity(raw.len());
    let mut filters = Vec::new();
    for token in tokens {
        match token {
            Token::Text(t) => text.push_str(t),
            Token::Filter { name, offset } => {
                if name.is_empty() {
                    return Err(PatternSyntaxError::EmptyFilter { offset });
                }
                filters.push(name);
            }
        }
    }

    if filters.len() > 1 {
        return Err(PatternSyntaxError::MultipleFilters {
            count: filters.len(),
        });
    }

    let segments: Vec<Segment> = text
        .split('.')
        .filter(|s| !s.is_empty())
        .map(Segment::classify)
        .collect();

    if let Some(index) = segments
        .windows(2)
        .position(|pair| pair[0] == Segment::Multi && pair[1] == Segment::Multi)
    {
        return Err(PatternSyntaxError::AdjacentMultiWildcards { index: index + 1 });
    }

    let folded = segments.iter().map(Segment::folded).collect();

    Ok(CompiledPattern {
        source: raw.to_string(),
        segments,
        folded,
        filter: filters.pop().map(str::to_string),
    })
}
