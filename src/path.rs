use std::borrow::Cow;

/// A queried node path split into its `.`-delimited segments.
///
/// `""` is the empty path. A path containing an empty segment (`a..b`,
/// `.a`, `a.`) is malformed: it is kept, but no selector pattern matches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath<'a> {
    segments: Vec<Cow<'a, str>>,
    malformed: bool,
}

impl<'a> NormalizedPath<'a> {
    /// Split `raw`, lowercasing every segment when `case_sensitive` is false.
    pub fn parse(raw: &'a str, case_sensitive: bool) -> Self {
        if raw.is_empty() {
            return Self {
                segments: Vec::new(),
                malformed: false,
            };
        }

        let mut malformed = false;
        let segments = raw
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    malformed = true;
                }
                if case_sensitive {
                    Cow::Borrowed(segment)
                } else {
                    fold_case(segment)
                }
            })
            .collect();

        Self {
            segments,
            malformed,
        }
    }

    pub fn segments(&self) -> &[Cow<'a, str>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_malformed(&self) -> bool {
        self.malformed
    }
}

/// Lowercase a whole segment. Pattern literals and path segments must both
/// go through here: `str::to_lowercase` is context-sensitive (a word-final
/// `Σ` becomes `ς`), so folding one character at a time would disagree.
pub fn fold_case(segment: &str) -> Cow<'_, str> {
    let lower = segment.to_lowercase();
    if lower == segment {
        Cow::Borrowed(segment)
    } else {
        Cow::Owned(lower)
    }
}
