//! Command-line interface for kinarow.

use clap::Parser;

/// kinarow - console k-in-a-row for two players
#[derive(Parser, Debug)]
#[command(name = "kinarow")]
#[command(about = "Console k-in-a-row for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length. Coordinates stay single-digit, so 9 is the cap.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=9))]
    pub size: u8,
}
