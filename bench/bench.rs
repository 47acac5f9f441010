//! Benchmark cascade resolution over a synthetic node tree.
//!
//! Usage:
//!   cargo run --release --bin bench_pathcascade                   # defaults
//!   cargo run --release --bin bench_pathcascade -- --depth 6      # deeper tree
//!   cargo run --release --bin bench_pathcascade -- --mode serial  # no rayon

use std::time::{Duration, Instant};

use clap::Parser;

use pathcascade::{Query, RuleSet};

// --- CLI ---

#[derive(Parser)]
#[command(about = "Time selector cascade resolution over a generated tree.")]
struct Args {
    /// serial, parallel, or omit for both
    #[arg(long, default_value = "all")]
    mode: String,

    /// Tree depth (segments per leaf path)
    #[arg(long, default_value_t = 5)]
    depth: usize,

    /// Children per node
    #[arg(long, default_value_t = 6)]
    breadth: usize,

    /// Timed repetitions
    #[arg(long, default_value_t = 5)]
    runs: u32,
}

// --- Workload ---

const NAMES: &[&str] = &["body", "arm", "hand", "lamp", "leg", "head", "mesh", "joint"];

/// Every node path in a tree of the given shape, parents before children.
fn tree_paths(depth: usize, breadth: usize) -> Vec<Query> {
    let mut out = Vec::new();
    let mut frontier = vec![String::from("root")];
    for level in 0..depth {
        let mut next = Vec::with_capacity(frontier.len() * breadth);
        for parent in &frontier {
            for i in 0..breadth {
                let name = NAMES[(level + i) % NAMES.len()];
                let path = format!("{parent}.{name}{i}");
                let mut q = Query::new(path.clone());
                if i % 3 == 0 {
                    q = q.with_capability("light");
                }
                out.push(q);
                next.push(path);
            }
        }
        frontier = next;
    }
    out
}

fn rule_set() -> RuleSet<usize> {
    let patterns = [
        "root.**",
        "root.*",
        "**.lamp3",
        "root.body0.**[light]",
        "root.*.*.hand2",
        "**.arm1.**.joint7",
        "[light]",
        "root.**.mesh6.*",
        "root.head5.**",
        "**.leg4[light]",
    ];
    let mut rules = RuleSet::default();
    for (i, p) in patterns.iter().enumerate() {
        if let Err(e) = rules.push(*p, i) {
            eprintln!("bad benchmark pattern {p}: {e}");
            std::process::exit(2);
        }
    }
    rules
}

// --- Timing ---

fn time<F: FnMut() -> usize>(runs: u32, mut f: F) -> (Duration, usize) {
    let mut best = Duration::MAX;
    let mut resolved = 0;
    for _ in 0..runs.max(1) {
        let start = Instant::now();
        resolved = f();
        best = best.min(start.elapsed());
    }
    (best, resolved)
}

fn report(label: &str, nodes: usize, best: Duration, resolved: usize) {
    let per_node = best.as_nanos() as f64 / nodes.max(1) as f64;
    println!("{label:<10} {nodes:>8} nodes  {resolved:>8} resolved  {best:>10.2?}  {per_node:>8.1} ns/node");
}

fn main() {
    let args = Args::parse();
    let queries = tree_paths(args.depth, args.breadth);
    let rules = rule_set();
    println!(
        "{} rules, tree depth {} breadth {}",
        rules.len(),
        args.depth,
        args.breadth
    );

    if args.mode == "all" || args.mode == "serial" {
        let (best, resolved) = time(args.runs, || {
            queries
                .iter()
                .filter(|q| rules.resolve(&q.path, &q.capabilities).is_some())
                .count()
        });
        report("serial", queries.len(), best, resolved);
    }

    if args.mode == "all" || args.mode == "parallel" {
        let (best, resolved) = time(args.runs, || {
            rules
                .resolve_many(&queries)
                .iter()
                .filter(|r| r.is_some())
                .count()
        });
        report("parallel", queries.len(), best, resolved);
    }
}
