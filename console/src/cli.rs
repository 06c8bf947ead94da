use std::path::PathBuf;

use clap::Parser;

use crate::patterns::Pattern;

#[derive(Debug, Default, Parser)]
#[command(name = "game-of-life")]
#[command(about = "Conway's Game of Life on a bounded grid, drawn in the terminal")]
pub struct Cli {
    /// Read the starting grid from a delimited text file
    #[arg(long, conflicts_with = "pattern")]
    pub file: Option<PathBuf>,

    /// Characters that separate cells in --file (default ",\t;")
    #[arg(long)]
    pub delimiters: Option<String>,

    /// Start from a built-in pattern
    #[arg(long, value_enum)]
    pub pattern: Option<Pattern>,

    /// Columns of a randomly seeded grid
    #[arg(long, conflicts_with_all = ["file", "pattern"])]
    pub width: Option<usize>,

    /// Rows of a randomly seeded grid
    #[arg(long, conflicts_with_all = ["file", "pattern"])]
    pub length: Option<usize>,

    /// Roughly how many cells start alive in a random grid
    #[arg(long, conflicts_with_all = ["file", "pattern"])]
    pub alive: Option<usize>,

    /// RNG seed for a reproducible random grid
    #[arg(long, conflicts_with_all = ["file", "pattern"])]
    pub seed: Option<u64>,

    /// Stop after this many generations (0 runs until the grid stops changing)
    #[arg(long)]
    pub generations: Option<u64>,

    /// Pause between generations in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Draw lines between cells
    #[arg(long)]
    pub grid_lines: bool,

    /// Draw a border around the grid
    #[arg(long)]
    pub box_lines: bool,

    /// Print each generation below the last instead of redrawing in place
    #[arg(long)]
    pub no_clear: bool,

    /// TOML file with defaults for any of the options above
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// True when any random-grid option was given on the command line.
    pub fn wants_random(&self) -> bool {
        self.width.is_some() || self.length.is_some() || self.alive.is_some() || self.seed.is_some()
    }
}
