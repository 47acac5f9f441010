use std::io::Write;

use crate::formatter::{Formatter, plural};
use crate::outcome::Outcome;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_to(&self, outcomes: &[Outcome], out: &mut dyn Write) {
        for o in outcomes {
            let _ = writeln!(out, "{o}");
            for c in &o.candidates {
                let _ = writeln!(
                    out,
                    "    #{} {} ({}) => {}",
                    c.index,
                    c.pattern,
                    c.specificity,
                    c.value_text()
                );
            }
        }
        let resolved = outcomes.iter().filter(|o| o.is_resolved()).count();
        let unresolved = outcomes.len() - resolved;
        let _ = writeln!(
            out,
            "\n{} {} queried, {resolved} resolved, {unresolved} unresolved",
            outcomes.len(),
            plural(outcomes.len(), "node", "nodes"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::tests::sample_outcomes;

    fn render(outcomes: &[Outcome]) -> String {
        let mut buf = Vec::new();
        TextFormatter.format_to(outcomes, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_every_outcome_and_summary() {
        let out = render(&sample_outcomes());
        assert!(out.contains("body.lamp [light]: body.*[light] (160) => dim"));
        assert!(out.contains("    #1 body.** (1) => default"));
        assert!(out.contains("head: no matching rule"));
        assert!(out.ends_with("2 nodes queried, 1 resolved, 1 unresolved\n"));
    }

    #[test]
    fn empty_still_prints_summary() {
        assert_eq!(render(&[]), "\n0 nodes queried, 0 resolved, 0 unresolved\n");
    }
}
