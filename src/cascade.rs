//! Rule cascade: picks the most specific matching rule for a node.
//!
//! Rules are `(pattern, payload)` pairs kept in declaration order. For a
//! query, every rule is tested; among the matches the highest specificity
//! wins, and on a tie the rule declared last wins.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Deserialize;

use crate::capability::Capabilities;
use crate::path::NormalizedPath;
use crate::selector::{CompiledPattern, MatcherOptions, PathMatcher, Pattern, PatternSyntaxError};

#[derive(Debug, Clone)]
pub struct Rule<T> {
    pattern: Pattern,
    compiled: Option<Arc<CompiledPattern>>,
    payload: T,
    specificity: u32,
    index: usize,
}

impl<T> Rule<T> {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn specificity(&self) -> u32 {
        self.specificity
    }

    /// Position in declaration order.
    pub fn index(&self) -> usize {
        self.index
    }

    fn rank(&self) -> (u32, usize) {
        (self.specificity, self.index)
    }
}

/// One node to resolve: its dotted path and the capabilities it has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Query {
    pub path: String,
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
}

impl Query {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            capabilities: BTreeSet::new(),
        }
    }

    pub fn with_capability(mut self, name: impl Into<String>) -> Self {
        self.capabilities.insert(name.into());
        self
    }
}

#[derive(Debug)]
pub struct RuleSet<T> {
    matcher: PathMatcher,
    rules: Vec<Rule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new(MatcherOptions::default())
    }
}

impl<T> RuleSet<T> {
    pub fn new(options: MatcherOptions) -> Self {
        Self {
            matcher: PathMatcher::new(options),
            rules: Vec::new(),
        }
    }

    /// Append a rule. Selector patterns are compiled now so that a bad
    /// pattern is reported at registration rather than on first query.
    pub fn push(
        &mut self,
        pattern: impl Into<Pattern>,
        payload: T,
    ) -> Result<&Rule<T>, PatternSyntaxError> {
        let pattern = pattern.into();
        let compiled = match &pattern {
            Pattern::Selector(raw) => Some(self.matcher.compile(raw)?),
            Pattern::Predicate(_) => None,
        };
        let specificity = self.matcher.specificity(&pattern);
        let index = self.rules.len();
        self.rules.push(Rule {
            pattern,
            compiled,
            payload,
            specificity,
            index,
        });
        Ok(&self.rules[index])
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    fn matching<'s, 'q>(
        &'s self,
        path: &'q str,
        entity: &'q dyn Capabilities,
    ) -> impl Iterator<Item = &'s Rule<T>> {
        let case_sensitive = self.matcher.options().case_sensitive;
        let normalized = NormalizedPath::parse(path, case_sensitive);
        self.rules.iter().filter(move |rule| match (&rule.pattern, &rule.compiled) {
            (Pattern::Predicate(f), _) => f(path, entity),
            (Pattern::Selector(_), Some(compiled)) => {
                crate::selector::matches(compiled, &normalized, entity, case_sensitive)
            }
            (Pattern::Selector(_), None) => false,
        })
    }

    /// The winning rule for a node, if any rule matches.
    pub fn resolve(&self, path: &str, entity: &dyn Capabilities) -> Option<&Rule<T>> {
        let winner = self.matching(path, entity).max_by_key(|rule| rule.rank());
        match winner {
            Some(rule) => tracing::trace!(
                path,
                pattern = %rule.pattern,
                specificity = rule.specificity,
                "resolved"
            ),
            None => tracing::trace!(path, "no rule matched"),
        }
        winner
    }

    /// Every matching rule, winner first.
    pub fn candidates(&self, path: &str, entity: &dyn Capabilities) -> Vec<&Rule<T>> {
        let mut found: Vec<&Rule<T>> = self.matching(path, entity).collect();
        found.sort_by_key(|rule| Reverse(rule.rank()));
        found
    }

    /// Resolve a batch of queries in parallel. Results are in query order.
    pub fn resolve_many(&self, queries: &[Query]) -> Vec<Option<&Rule<T>>>
    where
        T: Sync,
    {
        queries
            .par_iter()
            .map(|q| self.resolve(&q.path, &q.capabilities))
            .collect()
    }
}
