//! Command-line interface for tictacbeat.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Beat - tic-tac-toe in the terminal, with a rhythm mode
#[derive(Parser, Debug)]
#[command(name = "tictacbeat")]
#[command(about = "Terminal tic-tac-toe with minimax opponents and a rhythm mode", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "tictacbeat.toml")]
    pub config: PathBuf,

    /// JSON beatmap to use instead of the built-in one
    #[arg(long)]
    pub beatmap: Option<PathBuf>,

    /// Game ticks per second
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Do not ring the terminal bell on beats
    #[arg(long)]
    pub no_bell: bool,
}
