use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yml::Value;

use crate::cascade::{Query, RuleSet};
use crate::selector::MatcherOptions;

/// Default rule file looked up in the current directory.
pub const DEFAULT_RULE_FILE: &str = ".pathcascade.yml";

/// A rule file: matcher options, ordered rules, and optional sample nodes.
///
/// ```yaml
/// case_sensitive: false
/// rules:
///   - pattern: "body.*[light]"
///     value: dim
/// nodes:
///   - path: body.lamp
///     capabilities: [light]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
    #[serde(default)]
    pub nodes: Vec<Query>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub pattern: String,
    /// Optional label shown in output instead of the pattern.
    #[serde(default)]
    pub name: Option<String>,
    pub value: Value,
}

impl RuleEntry {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.pattern)
    }
}

fn default_case_sensitive() -> bool {
    true
}

impl Default for RuleFile {
    fn default() -> Self {
        Self {
            case_sensitive: default_case_sensitive(),
            rules: Vec::new(),
            nodes: Vec::new(),
        }
    }
}

impl RuleFile {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(contents).context("failed to parse rule file")
    }

    pub fn options(&self) -> MatcherOptions {
        MatcherOptions {
            case_sensitive: self.case_sensitive,
        }
    }

    /// Compile every rule in declaration order. `case_sensitive` overrides
    /// the file's own setting when given.
    pub fn build_rule_set(&self, case_sensitive: Option<bool>) -> Result<RuleSet<RuleEntry>> {
        let mut options = self.options();
        if let Some(cs) = case_sensitive {
            options.case_sensitive = cs;
        }

        let mut rules = RuleSet::new(options);
        for (i, entry) in self.rules.iter().enumerate() {
            rules
                .push(entry.pattern.as_str(), entry.clone())
                .with_context(|| format!("rule {i} has an invalid pattern `{}`", entry.pattern))?;
        }
        Ok(rules)
    }
}

/// Load a rule file from the given path, or `.pathcascade.yml` in the
/// current directory. A missing default file yields an empty rule set; a
/// missing explicit path is an error.
pub fn load_config(path: Option<&Path>) -> Result<RuleFile> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = Path::new(DEFAULT_RULE_FILE);
            if !default.exists() {
                tracing::debug!("no {DEFAULT_RULE_FILE} found, using empty rule set");
                return Ok(RuleFile::default());
            }
            default.to_path_buf()
        }
    };

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read rule file {}", config_path.display()))?;
    let file = RuleFile::from_yaml(&contents)
        .with_context(|| format!("in {}", config_path.display()))?;

    tracing::debug!(
        path = %config_path.display(),
        rules = file.rules.len(),
        nodes = file.nodes.len(),
        "loaded rule file"
    );
    Ok(file)
}
