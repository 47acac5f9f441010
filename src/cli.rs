use std::path::PathBuf;

use clap::Parser;

use crate::cascade::Query;

#[derive(Parser, Debug)]
#[command(
    name = "pathcascade",
    version,
    about = "Resolve the most specific selector rule for dotted node paths"
)]
pub struct Args {
    /// Node paths to resolve, in addition to the rule file's `nodes`
    pub paths: Vec<String>,

    /// Path to the rule file [default: .pathcascade.yml]
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Capabilities of the nodes given on the command line (comma-separated)
    #[arg(long = "cap", value_name = "NAME", value_delimiter = ',')]
    pub caps: Vec<String>,

    /// Read `path [cap,cap]` queries from stdin, one per line (`.` is the empty path)
    #[arg(long)]
    pub stdin: bool,

    /// Match case-insensitively, overriding the rule file
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json", "quiet"])]
    pub format: String,

    /// List every matching rule for each node, winner first
    #[arg(long)]
    pub explain: bool,

    /// Print each rule's specificity, then exit
    #[arg(long)]
    pub specificity: bool,

    /// Validate the rule file, then exit
    #[arg(long)]
    pub check: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// `Some(false)` when `--case-insensitive` was passed; otherwise the
    /// rule file decides.
    pub fn case_override(&self) -> Option<bool> {
        self.case_insensitive.then_some(false)
    }

    /// Queries for the positional paths, each carrying every `--cap`.
    pub fn path_queries(&self) -> Vec<Query> {
        self.paths
            .iter()
            .map(|p| Query {
                path: p.clone(),
                capabilities: self.caps.iter().cloned().collect(),
            })
            .collect()
    }
}

const EMPTY_PATH_LINE: &str = ".";

/// Parse a stdin query line: a path, then optionally whitespace and a
/// comma-separated capability list. Blank lines and `#` comments yield `None`.
///
/// A lone `.` stands for the empty path, which a blank line cannot express.
pub fn parse_query_line(line: &str) -> Option<Query> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (path, caps) = match line.split_once(char::is_whitespace) {
        Some((path, caps)) => (path, caps.trim()),
        None => (line, ""),
    };
    let path = if path == EMPTY_PATH_LINE { "" } else { path };
    Some(Query {
        path: path.to_string(),
        capabilities: caps
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "pathcascade",
            "--rules",
            "r.yml",
            "--cap",
            "light,mesh",
            "-i",
            "body.lamp",
            "body.arm",
        ]);
        assert_eq!(args.rules, Some(PathBuf::from("r.yml")));
        assert_eq!(args.caps, vec!["light", "mesh"]);
        assert_eq!(args.case_override(), Some(false));
        let queries = args.path_queries();
        assert_eq!(queries.len(), 2);
        assert!(queries[1].capabilities.contains("mesh"));
    }

    #[test]
    fn case_override_default() {
        let args = Args::parse_from(["pathcascade"]);
        assert_eq!(args.case_override(), None);
        assert_eq!(args.format, "text");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["pathcascade", "--format", "xml"]).is_err());
    }

    #[test]
    fn query_lines() {
        assert_eq!(parse_query_line(""), None);
        assert_eq!(parse_query_line("  # comment"), None);
        assert_eq!(parse_query_line("body.lamp"), Some(Query::new("body.lamp")));
        assert_eq!(
            parse_query_line("body.lamp  light, mesh"),
            Some(
                Query::new("body.lamp")
                    .with_capability("light")
                    .with_capability("mesh")
            )
        );
    }

    #[test]
    fn dot_line_is_empty_path() {
        assert_eq!(parse_query_line("."), Some(Query::new("")));
        assert_eq!(
            parse_query_line(" .  light"),
            Some(Query::new("").with_capability("light"))
        );
        assert_eq!(parse_query_line("a."), Some(Query::new("a.")));
    }
}
