//! kinarow - console k-in-a-row for two players.

use anyhow::Result;
use clap::Parser;
use kinarow::cli::Cli;
use kinarow::console::Session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with game output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!(size = cli.size, "starting console session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(cli.size as usize, stdin.lock(), stdout.lock());
    session.run()
}
