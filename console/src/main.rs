use std::io::{self, Write};
use std::thread;

use anyhow::Context;
use clap::Parser;
use life::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;
use crate::config::{FileConfig, Settings, Source, MAX_CELLS};
use crate::terminal::Terminal;

mod cli;
mod config;
mod patterns;
mod terminal;

fn build_grid(source: &Source) -> anyhow::Result<Grid> {
    let grid = match source {
        Source::File { path, delimiters } => Grid::load(path, Some(delimiters.as_slice()))
            .with_context(|| format!("load grid from {}", path.display()))?,
        Source::Pattern(pattern) => pattern
            .grid()
            .with_context(|| format!("build pattern {pattern:?}"))?,
        Source::Random {
            width,
            length,
            alive,
            seed,
        } => {
            let area = Grid::area(*width, *length)?;
            anyhow::ensure!(
                area <= MAX_CELLS,
                "a {width}x{length} grid has {area} cells, the limit is {MAX_CELLS}"
            );
            match seed {
                Some(seed) => {
                    Grid::random_with(&mut StdRng::seed_from_u64(*seed), *width, *length, *alive)?
                }
                None => Grid::random(*width, *length, *alive)?,
            }
        }
    };

    log::info!(
        "starting from {}x{} grid with {} alive cells",
        grid.width(),
        grid.length(),
        grid.alive_count()
    );
    Ok(grid)
}

/// Draw generations until the limit is hit or the grid stops changing.
/// Returns the last generation drawn.
fn run<W: Write>(grid: &mut Grid, settings: &Settings, out: W) -> anyhow::Result<u64> {
    let mut terminal = Terminal::new(out, settings.clear).context("prepare terminal")?;
    let mut generation = 0;

    loop {
        terminal
            .draw(generation, &grid.render(settings.render))
            .context("draw grid")?;

        if settings.generations != 0 && generation >= settings.generations {
            log::info!("reached generation limit {}", settings.generations);
            break;
        }

        thread::sleep(settings.delay);
        if !grid.transition() {
            log::info!("grid stopped changing at generation {generation}");
            break;
        }
        generation += 1;
    }

    Ok(generation)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&cli, file_config)?;
    log::debug!("settings: {settings:?}");

    let mut grid = build_grid(&settings.source)?;
    run(&mut grid, &settings, io::stdout().lock())?;
    Ok(())
}
