use clap::Parser;
use std::process;
use symgraph::cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Diagnostics go to stderr, and only when asked for
fn init_logging(verbose: bool) {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    if !from_env && !verbose {
        return;
    }

    let filter = if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("symgraph=debug")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
