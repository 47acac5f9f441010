use std::fmt;

use serde_yml::Value;

use crate::cascade::{Query, Rule, RuleSet};
use crate::config::RuleEntry;

/// A rule that matched a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Declaration index in the rule file.
    pub index: usize,
    pub label: String,
    pub pattern: String,
    pub specificity: u32,
    pub value: Value,
}

impl Selection {
    fn from_rule(rule: &Rule<RuleEntry>) -> Self {
        let entry = rule.payload();
        Self {
            index: rule.index(),
            label: entry.label().to_string(),
            pattern: entry.pattern.clone(),
            specificity: rule.specificity(),
            value: entry.value.clone(),
        }
    }

    /// The payload rendered for text output: bare strings as-is, anything
    /// else as compact JSON.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
        }
    }
}

/// The cascade result for one queried node.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub path: String,
    pub capabilities: Vec<String>,
    pub winner: Option<Selection>,
    /// Every matching rule, winner first. Empty unless explain mode is on.
    pub candidates: Vec<Selection>,
}

impl Outcome {
    pub fn resolve(rules: &RuleSet<RuleEntry>, query: &Query, explain: bool) -> Self {
        let mut outcome = Self::from_winner(query, rules.resolve(&query.path, &query.capabilities));
        if explain {
            outcome.candidates = rules
                .candidates(&query.path, &query.capabilities)
                .into_iter()
                .map(Selection::from_rule)
                .collect();
        }
        outcome
    }

    /// Build an outcome from an already-resolved winner.
    pub fn from_winner(query: &Query, winner: Option<&Rule<RuleEntry>>) -> Self {
        Self {
            path: query.path.clone(),
            capabilities: query.capabilities.iter().cloned().collect(),
            winner: winner.map(Selection::from_rule),
            candidates: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.capabilities.is_empty() {
            write!(f, " [{}]", self.capabilities.join(","))?;
        }
        match &self.winner {
            Some(sel) => write!(
                f,
                ": {} ({}) => {}",
                sel.label,
                sel.specificity,
                sel.value_text()
            ),
            None => write!(f, ": no matching rule"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleFile;

    fn rules() -> RuleSet<RuleEntry> {
        RuleFile::from_yaml(
            "rules:\n  - pattern: 'body.*[light]'\n    value: dim\n  - pattern: 'body.**'\n    name: fallback\n    value: [1, 2]\n",
        )
        .unwrap()
        .build_rule_set(None)
        .unwrap()
    }

    #[test]
    fn display_resolved() {
        let q = Query::new("body.lamp").with_capability("light");
        let outcome = Outcome::resolve(&rules(), &q, false);
        assert_eq!(outcome.to_string(), "body.lamp [light]: body.*[light] (160) => dim");
        assert!(outcome.candidates.is_empty());
    }

    #[test]
    fn display_non_string_value() {
        let outcome = Outcome::resolve(&rules(), &Query::new("body.arm.lamp"), false);
        assert_eq!(outcome.to_string(), "body.arm.lamp: fallback (1) => [1,2]");
    }

    #[test]
    fn display_unresolved() {
        let outcome = Outcome::resolve(&rules(), &Query::new("head"), true);
        assert!(!outcome.is_resolved());
        assert_eq!(outcome.to_string(), "head: no matching rule");
    }

    #[test]
    fn explain_lists_candidates() {
        let q = Query::new("body.lamp").with_capability("light");
        let outcome = Outcome::resolve(&rules(), &q, true);
        let indexes: Vec<usize> = outcome.candidates.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1]);
    }
}
