//! Billboard CLI - file-driven content for kiosk windows
//!
//! Usage: billboard <COMMAND>
//!
//! Commands:
//!   marquee     Print the marquee text
//!   carousel    Print the rendered carousel pages
//!   render      Render one markup file to HTML
//!   candidates  List launcher candidates
//!   open        Open a launcher candidate
//!   serve       Poll content and accept commands until quit

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Marquee => commands::cmd_marquee(config, cli.json),
        Commands::Carousel { force } => commands::cmd_carousel(config, force, cli.json),
        Commands::Render { file } => commands::cmd_render(&file, cli.json),
        Commands::Candidates => commands::cmd_candidates(config, cli.json),
        Commands::Open { key } => commands::cmd_open(config, &key, cli.json),
        Commands::Serve {
            interval_ms,
            no_http,
        } => commands::cmd_serve(config, interval_ms, no_http, cli.json),
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
