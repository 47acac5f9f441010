use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathcascade::cli::Args;

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "pathcascade=debug" } else { "pathcascade=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match pathcascade::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}
