//! Selector matcher — evaluates a compiled pattern against a normalized path.
//!
//! ## Wildcards
//!
//! `*` consumes exactly one segment. `**` consumes zero or more. Rather than
//! backtracking, the segment list is cut at every `**` into fixed-width runs
//! (exact literals and `*`). The first run is anchored at the start of the
//! path unless the pattern opens with `**`, the last run is anchored at the
//! end unless it closes with `**`, and every run in between is placed at its
//! leftmost fit after the previous one. Leftmost placement is always safe
//! because the runs have fixed widths: an earlier fit never leaves less room
//! for the runs that follow.
//!
//! ## Capability filter
//!
//! The filter is checked once, before any segment work. A node without the
//! capability fails immediately.

use crate::capability::Capabilities;
use crate::path::NormalizedPath;

use super::compiler::{CompiledPattern, Segment};

pub fn matches(
    pattern: &CompiledPattern,
    path: &NormalizedPath<'_>,
    caps: &dyn Capabilities,
    case_sensitive: bool,
) -> bool {
    if pattern
        .filter()
        .is_some_and(|filter| !caps.has_capability(filter))
    {
        return false;
    }
    if path.is_malformed() {
        return false;
    }
    if pattern.is_filter_only() {
        return true;
    }
    matches_segments(pattern.segments_for(case_sensitive), path.segments())
}

/// Match a segment list against path segments, ignoring any filter.
///
/// Literals are compared exactly. For case-insensitive matching, pass
/// [`CompiledPattern::segments_for`]`(false)` and a path folded the same way.
pub fn matches_segments<S: AsRef<str>>(patterns: &[Segment], path: &[S]) -> bool {
    if !patterns.contains(&Segment::Multi) {
        return patterns.len() == path.len() && run_matches(patterns, path);
    }

    let mut runs = patterns.split(|s| *s == Segment::Multi);
    // At least one `**` guarantees two pieces, possibly empty.
    let (Some(first), Some(last)) = (runs.next(), runs.next_back()) else {
        return false;
    };

    if first.len() + last.len() > path.len() {
        return false;
    }
    let tail_start = path.len() - last.len();
    if !run_matches(first, &path[..first.len()]) || !run_matches(last, &path[tail_start..])
    {
        return false;
    }

    let mut pos = first.len();
    for run in runs {
        match find_run(run, &path[pos..tail_start]) {
            Some(offset) => pos += offset + run.len(),
            None => return false,
        }
    }
    true
}

/// Leftmost offset in `path` where `run` fits, if any.
fn find_run<S: AsRef<str>>(run: &[Segment], path: &[S]) -> Option<usize> {
    if run.is_empty() {
        return Some(0);
    }
    path.windows(run.len())
        .position(|window| run_matches(run, window))
}

/// A fixed-width run against a window of the same width.
fn run_matches<S: AsRef<str>>(run: &[Segment], window: &[S]) -> bool {
    run.len() == window.len()
        && run.iter().zip(window).all(|(seg, actual)| match seg {
            Segment::Exact(name) => name == actual.as_ref(),
            Segment::Single => true,
            Segment::Multi => false,
        })
}
