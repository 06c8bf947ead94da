//! Delimited grid text: one row per line, one integer per cell.
//!
//! ```text
//! 0,0,0
//! 1,1,1
//! 0,0,0
//! ```

use std::path::Path;
use std::str::FromStr;

use crate::error::ParseError;
use crate::grid::{CellState, Grid};

pub const DEFAULT_DELIMITERS: &[char] = &[',', '\t', ';'];

/// Parse grid text, splitting cells on any of `delimiters`.
///
/// A leading byte-order mark is ignored and blank lines are skipped. Each token is trimmed and must be a non-negative
/// integer; zero is dead and anything else is alive. Every row must have as
/// many cells as the first one.
pub fn parse_grid(text: &str, delimiters: &[char]) -> Result<Grid, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut width = None;
    let mut length = 0;
    let mut cells = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;

        let row_start = cells.len();
        for (column, token) in line.split(delimiters).enumerate() {
            let token = token.trim();
            let value: u32 = token.parse().map_err(|_| ParseError::InvalidCell {
                line: line_number,
                column: column + 1,
                token: token.to_string(),
            })?;
            cells.push(CellState::from(value));
        }

        let found = cells.len() - row_start;
        let expected = *width.get_or_insert(found);
        if found != expected {
            return Err(ParseError::RaggedRow {
                line: line_number,
                expected,
                found,
            });
        }
        length += 1;
    }

    let width = width.unwrap_or(0);
    log::debug!("parsed {}x{} grid", width, length);
    Ok(Grid::from_cells(width, length, cells))
}

impl Grid {
    /// Read and parse a grid file. `None` uses [`DEFAULT_DELIMITERS`].
    pub fn load(path: impl AsRef<Path>, delimiters: Option<&[char]>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_grid(&text, delimiters.unwrap_or(DEFAULT_DELIMITERS))
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_grid(text, DEFAULT_DELIMITERS)
    }
}
