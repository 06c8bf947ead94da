use crate::error::GridError;
use crate::grid::CellState::{Alive, Dead};
use crate::rules;
use rand::Rng;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    /// Cell coding used by [`Grid::snapshot`]: 0 for dead, 1 for alive.
    pub fn code(self) -> u8 {
        match self {
            Dead => 0,
            Alive => 1,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(cell: CellState) -> Self {
        cell.is_alive()
    }
}

macro_rules! cell_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for CellState {
                /// Zero is dead, anything else is alive.
                fn from(value: $int) -> Self {
                    CellState::from(value != 0)
                }
            }
        )*
    };
}

cell_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// A fixed-size, edge-bounded grid of cells stored row-major.
///
/// Dimensions are set at construction and never change; only
/// [`Grid::transition`] replaces the contents.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    length: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// The empty grid: no rows, no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells in a `width` x `length` grid, or an error when that
    /// many cells could never be allocated.
    pub fn area(width: usize, length: usize) -> Result<usize, GridError> {
        width
            .checked_mul(length)
            .filter(|&area| area <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { width, length })
    }

    pub fn dead(width: usize, length: usize) -> Result<Self, GridError> {
        Self::filled(width, length, Dead)
    }

    fn filled(width: usize, length: usize, state: CellState) -> Result<Self, GridError> {
        Ok(Grid {
            width,
            length,
            cells: vec![state; Self::area(width, length)?],
        })
    }

    pub(crate) fn from_cells(width: usize, length: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * length);
        Grid {
            width,
            length,
            cells,
        }
    }

    /// Build a grid from an explicit matrix of cell values.
    ///
    /// The width is taken from the first row and every other row must match
    /// it. Integers follow the text format: zero is dead, nonzero is alive.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<CellState>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&cell| cell.into()));
        }

        Ok(Self::from_cells(width, rows.len(), cells))
    }

    /// Build a `width` x `length` grid where exactly the listed `(row, column)`
    /// positions are alive.
    pub fn from_coordinates<I>(width: usize, length: usize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::dead(width, length)?;
        for (row, column) in alive {
            if row >= length || column >= width {
                return Err(GridError::OutOfBounds {
                    row,
                    column,
                    width,
                    length,
                });
            }
            grid.cells[row * width + column] = Alive;
        }
        Ok(grid)
    }

    /// Randomly seed a grid so that roughly `alive_target` cells are alive.
    pub fn random(width: usize, length: usize, alive_target: usize) -> Result<Self, GridError> {
        Self::random_with(&mut rand::rng(), width, length, alive_target)
    }

    /// Like [`Grid::random`] but drawing from the given generator.
    ///
    /// Every cell is alive with probability `alive_target / (width * length)`.
    /// A target of zero gives an all-dead grid and a target at or above the
    /// area gives an all-alive grid, both without touching `rng`. Fails only
    /// when the dimensions are too large, see [`Grid::area`].
    pub fn random_with<R: Rng>(
        rng: &mut R,
        width: usize,
        length: usize,
        alive_target: usize,
    ) -> Result<Self, GridError> {
        let area = Self::area(width, length)?;
        if alive_target == 0 {
            return Self::dead(width, length);
        }
        if alive_target >= area {
            return Self::filled(width, length, Alive);
        }

        let probability = alive_target as f64 / area as f64;
        let cells = (0..area)
            .map(|_| CellState::from(rng.random_bool(probability)))
            .collect();
        let grid = Self::from_cells(width, length, cells);
        log::debug!(
            "seeded {}x{} grid: {} alive (target {})",
            width,
            length,
            grid.alive_count(),
            alive_target
        );
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn length(&self) -> usize {
        self.length
    }

    /// True when the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<CellState> {
        if row < self.length && column < self.width {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        (0..self.length).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Copy of the whole grid as rows of 0/1 values.
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }

    /// Advance the grid by one generation.
    ///
    /// Returns `false` when the new generation is identical to the old one.
    pub fn transition(&mut self) -> bool {
        let next = rules::next_generation(&self.cells, self.width, self.length);

        if self.cells == next {
            return false;
        }
        self.cells = next;
        log::trace!("transition: {} alive", self.alive_count());
        true
    }
}
