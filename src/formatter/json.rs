use std::io::Write;

use serde::Serialize;

use crate::formatter::Formatter;
use crate::outcome::{Outcome, Selection};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    metadata: Metadata,
    results: Vec<JsonResult<'a>>,
}

#[derive(Serialize)]
struct Metadata {
    nodes: usize,
    resolved: usize,
    unresolved: usize,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    path: &'a str,
    capabilities: &'a [String],
    winner: Option<JsonSelection<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    candidates: Vec<JsonSelection<'a>>,
}

#[derive(Serialize)]
struct JsonSelection<'a> {
    index: usize,
    label: &'a str,
    pattern: &'a str,
    specificity: u32,
    value: &'a serde_yml::Value,
}

impl<'a> From<&'a Selection> for JsonSelection<'a> {
    fn from(s: &'a Selection) -> Self {
        Self {
            index: s.index,
            label: &s.label,
            pattern: &s.pattern,
            specificity: s.specificity,
            value: &s.value,
        }
    }
}

impl Formatter for JsonFormatter {
    fn format_to(&self, outcomes: &[Outcome], out: &mut dyn Write) {
        let resolved = outcomes.iter().filter(|o| o.is_resolved()).count();
        let output = JsonOutput {
            metadata: Metadata {
                nodes: outcomes.len(),
                resolved,
                unresolved: outcomes.len() - resolved,
            },
            results: outcomes
                .iter()
                .map(|o| JsonResult {
                    path: &o.path,
                    capabilities: &o.capabilities,
                    winner: o.winner.as_ref().map(JsonSelection::from),
                    candidates: o.candidates.iter().map(JsonSelection::from).collect(),
                })
                .collect(),
        };
        let _ = serde_json::to_writer_pretty(&mut *out, &output);
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::tests::sample_outcomes;

    fn render(outcomes: &[Outcome]) -> serde_json::Value {
        let mut buf = Vec::new();
        JsonFormatter.format_to(outcomes, &mut buf);
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn metadata_counts() {
        let v = render(&sample_outcomes());
        assert_eq!(v["metadata"]["nodes"], 2);
        assert_eq!(v["metadata"]["resolved"], 1);
        assert_eq!(v["metadata"]["unresolved"], 1);
    }

    #[test]
    fn winner_fields() {
        let v = render(&sample_outcomes());
        let first = &v["results"][0];
        assert_eq!(first["path"], "body.lamp");
        assert_eq!(first["capabilities"][0], "light");
        assert_eq!(first["winner"]["pattern"], "body.*[light]");
        assert_eq!(first["winner"]["specificity"], 160);
        assert_eq!(first["winner"]["value"], "dim");
        assert_eq!(first["candidates"].as_array().unwrap().len(), 2);
        assert!(v["results"][1]["winner"].is_null());
        // Explain output for an unresolved node has no candidates to list.
        assert!(v["results"][1].get("candidates").is_none());
    }

    #[test]
    fn empty_input() {
        let v = render(&[]);
        assert_eq!(v["metadata"]["nodes"], 0);
        assert!(v["results"].as_array().unwrap().is_empty());
    }
}
