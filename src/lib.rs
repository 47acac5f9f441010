pub mod capability;
pub mod cascade;
pub mod cli;
pub mod config;
pub mod formatter;
pub mod outcome;
pub mod path;
pub mod selector;

use std::io::BufRead;

use anyhow::{Context, Result};

use cli::{Args, parse_query_line};
use config::load_config;
use formatter::create_formatter;
use outcome::Outcome;

pub use capability::{Capabilities, CapabilityFn, NoCapabilities};
pub use cascade::{Query, Rule, RuleSet};
pub use selector::{MatcherOptions, PathMatcher, Pattern, PatternSyntaxError};

/// Run the resolver. Returns the exit code: 0 = every node resolved,
/// 1 = some node matched no rule, 2 = error.
pub fn run(args: Args) -> Result<i32> {
    let config_start = std::time::Instant::now();
    let file = load_config(args.rules.as_deref())?;
    let rules = file.build_rule_set(args.case_override())?;
    tracing::debug!(
        rules = rules.len(),
        case_sensitive = rules.matcher().options().case_sensitive,
        elapsed = ?config_start.elapsed(),
        "rule set ready"
    );

    // --check: the rule file compiled, nothing else to do
    if args.check {
        println!("{} rules OK", rules.len());
        return Ok(0);
    }

    // --specificity: print each rule's score and exit
    if args.specificity {
        for rule in rules.rules() {
            println!(
                "{:>5}  #{} {}",
                rule.specificity(),
                rule.index(),
                rule.payload().pattern
            );
        }
        return Ok(0);
    }

    let mut queries = file.nodes.clone();
    queries.extend(args.path_queries());
    if args.stdin {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read query from stdin")?;
            queries.extend(parse_query_line(&line));
        }
    }
    tracing::debug!(queries = queries.len(), "resolving");

    let outcomes: Vec<Outcome> = if args.explain {
        queries
            .iter()
            .map(|q| Outcome::resolve(&rules, q, true))
            .collect()
    } else {
        let winners = rules.resolve_many(&queries);
        queries
            .iter()
            .zip(winners)
            .map(|(q, winner)| Outcome::from_winner(q, winner))
            .collect()
    };

    let formatter = create_formatter(&args.format);
    formatter.print(&outcomes);

    if outcomes.iter().all(Outcome::is_resolved) {
        Ok(0)
    } else {
        Ok(1)
    }
}
