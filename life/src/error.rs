//! Error types for grid construction and grid text parsing.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A matrix handed to [`Grid::from_rows`](crate::Grid::from_rows) was not rectangular.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {column}) is outside a {width}x{length} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        width: usize,
        length: usize,
    },

    #[error("a {width}x{length} grid has too many cells")]
    TooLarge { width: usize, length: usize },
}

/// Grid text could not be turned into a grid. No partial grid is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read grid file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}, cell {column}: failed to parse value '{token}'")]
    InvalidCell {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: parsed {found} cells, expected {expected} to match the first row")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}
