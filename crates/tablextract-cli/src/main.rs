mod cli;
mod extract_cmd;
mod page_range;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(code) = extract_cmd::run(&cli) {
        std::process::exit(code);
    }
}

/// Log to stderr so stdout carries only the summary. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
