use std::io::Write;

use crate::formatter::{Formatter, plural};
use crate::outcome::Outcome;

/// Prints only the nodes no rule matched.
pub struct QuietFormatter;

impl Formatter for QuietFormatter {
    fn format_to(&self, outcomes: &[Outcome], out: &mut dyn Write) {
        let unresolved: Vec<&Outcome> = outcomes.iter().filter(|o| !o.is_resolved()).collect();
        if unresolved.is_empty() {
            return;
        }
        for o in &unresolved {
            let _ = writeln!(out, "{o}");
        }
        let _ = writeln!(
            out,
            "\n{} {} unresolved",
            unresolved.len(),
            plural(unresolved.len(), "node", "nodes"),
        );
    }
}
