//! Command-line interface for rust-clue.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Play a game of Clue at the terminal, every seat taking turns at the keyboard.
#[derive(Parser, Debug)]
#[command(name = "rust-clue")]
#[command(about = "Console deduction game for 2-6 players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with a game configuration; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of players (2-6)
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Comma-separated player names
    #[arg(short, long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// RNG seed, to replay a game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board flavor
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Comma-separated character names replacing the classic ones
    #[arg(long)]
    pub characters: Option<String>,

    /// Comma-separated weapon names replacing the classic ones
    #[arg(long)]
    pub weapons: Option<String>,

    /// Comma-separated room names replacing the classic ones
    #[arg(long)]
    pub rooms: Option<String>,

    /// Log a render request for every card before play starts
    #[arg(long)]
    pub render_cards: bool,
}

/// Board flavors selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Nine rooms joined by named hallways
    Graph,
    /// Rooms as blocks on a cell grid
    Grid,
}
