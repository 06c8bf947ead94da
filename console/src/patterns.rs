use clap::ValueEnum;
use life::{Grid, GridError};
use serde::Deserialize;

/// Built-in starting patterns, each sized so it has room to evolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Blinker,
    Toad,
    Beacon,
    Glider,
    RPentomino,
}

struct Layout {
    width: usize,
    length: usize,
    cells: &'static [(usize, usize)],
}

impl Pattern {
    fn layout(self) -> Layout {
        match self {
            Pattern::Blinker => Layout {
                width: 5,
                length: 5,
                cells: &[(2, 1), (2, 2), (2, 3)],
            },
            Pattern::Toad => Layout {
                width: 6,
                length: 6,
                cells: &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)],
            },
            Pattern::Beacon => Layout {
                width: 6,
                length: 6,
                cells: &[(1, 1), (1, 2), (2, 1), (2, 2), (3, 3), (3, 4), (4, 3), (4, 4)],
            },
            Pattern::Glider => Layout {
                width: 12,
                length: 12,
                cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            },
            Pattern::RPentomino => Layout {
                width: 40,
                length: 24,
                cells: &[(11, 20), (11, 21), (12, 19), (12, 20), (13, 20)],
            },
        }
    }

    pub fn grid(self) -> Result<Grid, GridError> {
        let layout = self.layout();
        Grid::from_coordinates(layout.width, layout.length, layout.cells.iter().copied())
    }
}
