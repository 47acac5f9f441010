//! Public entry point: matching and scoring with instance configuration.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::capability::Capabilities;
use crate::path::NormalizedPath;

use super::cache::PatternCache;
use super::compiler::CompiledPattern;
use super::error::PatternSyntaxError;
use super::matcher::matches;
use super::specificity::specificity;

/// Construction-time matcher configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherOptions {
    pub case_sensitive: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// A caller-supplied match function, invoked as `f(path, entity)`.
pub type PredicateFn = Arc<dyn Fn(&str, &dyn Capabilities) -> bool + Send + Sync>;

#[derive(Clone)]
pub enum Pattern {
    /// Dotted selector text such as `body.*[light]`.
    Selector(String),
    /// Bypasses compilation entirely and always scores 0.
    Predicate(PredicateFn),
}

impl Pattern {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &dyn Capabilities) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(Arc::new(f))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Selector(s.to_string())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Selector(s)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
            Pattern::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Selector(s) => f.write_str(s),
            Pattern::Predicate(_) => f.write_str("<predicate>"),
        }
    }
}

/// Matches dotted node paths against selector patterns.
///
/// Compiled patterns are cached per instance, so one `PathMatcher` can be
/// shared across threads for a whole tree walk.
#[derive(Debug, Default)]
pub struct PathMatcher {
    options: MatcherOptions,
    cache: PatternCache,
}

impl PathMatcher {
    pub fn new(options: MatcherOptions) -> Self {
        Self {
            options,
            cache: PatternCache::new(),
        }
    }

    pub fn options(&self) -> MatcherOptions {
        self.options
    }

    /// Compile through the instance cache.
    pub fn compile(&self, raw: &str) -> Result<Arc<CompiledPattern>, PatternSyntaxError> {
        self.cache.get_or_compile(raw)
    }

    /// Does `pattern` select the node at `path` with the given capabilities?
    pub fn is_match(
        &self,
        pattern: &Pattern,
        path: &str,
        entity: &dyn Capabilities,
    ) -> Result<bool, PatternSyntaxError> {
        match pattern {
            Pattern::Predicate(f) => Ok(f(path, entity)),
            Pattern::Selector(raw) => {
                let compiled = self.compile(raw)?;
                Ok(self.is_match_compiled(&compiled, path, entity))
            }
        }
    }

    /// Match an already-compiled pattern; cannot fail.
    pub fn is_match_compiled(
        &self,
        compiled: &CompiledPattern,
        path: &str,
        entity: &dyn Capabilities,
    ) -> bool {
        let normalized = NormalizedPath::parse(path, self.options.case_sensitive);
        matches(compiled, &normalized, entity, self.options.case_sensitive)
    }

    pub fn specificity(&self, pattern: &Pattern) -> u32 {
        match pattern {
            Pattern::Predicate(_) => 0,
            Pattern::Selector(raw) => specificity(raw),
        }
    }

    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }
}
