//! The transition rule and neighbor counting, as pure functions over a
//! row-major cell buffer.

use crate::error::GridError;
use crate::grid::CellState::{self, Alive, Dead};
use crate::grid::Grid;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The state a cell takes in the next generation.
pub fn next_state(cell: CellState, alive_neighbors: usize) -> CellState {
    match (cell, alive_neighbors) {
        (Alive, 0..=1) => Dead,  // Underpopulation
        (Alive, 2..=3) => Alive, // Survives
        (Alive, _) => Dead,      // Overpopulation
        (Dead, 3) => Alive,      // Becomes alive
        (Dead, _) => Dead,
    }
}

/// Count the alive cells around `(row, column)`. Positions past the edges
/// are skipped, not wrapped.
///
/// # Panics
///
/// If `cells` is not a `width` x `length` row-major buffer.
pub fn alive_neighbors(
    cells: &[CellState],
    width: usize,
    length: usize,
    row: usize,
    column: usize,
) -> usize {
    assert_buffer_shape(cells, width, length);
    count_alive_neighbors(cells, width, length, row, column)
}

fn assert_buffer_shape(cells: &[CellState], width: usize, length: usize) {
    assert!(
        width.checked_mul(length) == Some(cells.len()),
        "cell buffer holds {} cells, not {}x{}",
        cells.len(),
        width,
        length
    );
}

fn count_alive_neighbors(
    cells: &[CellState],
    width: usize,
    length: usize,
    row: usize,
    column: usize,
) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let neighbor_row = row.checked_add_signed(dr)?;
            let neighbor_column = column.checked_add_signed(dc)?;
            if neighbor_row < length && neighbor_column < width {
                Some(cells[neighbor_row * width + neighbor_column])
            } else {
                None
            }
        })
        .filter(|cell| cell.is_alive())
        .count()
}

/// Compute the next generation into a fresh buffer. `cells` is only read.
///
/// # Panics
///
/// If `cells` is not a `width` x `length` row-major buffer.
pub fn next_generation(cells: &[CellState], width: usize, length: usize) -> Vec<CellState> {
    assert_buffer_shape(cells, width, length);
    let mut next = vec![Dead; cells.len()];

    for row in 0..length {
        for column in 0..width {
            let index = row * width + column;
            let neighbors = count_alive_neighbors(cells, width, length, row, column);
            next[index] = next_state(cells[index], neighbors);
        }
    }

    next
}

/// One generation step over a plain matrix of `bool`s.
pub fn step_matrix<R: AsRef<[bool]>>(rows: &[R]) -> Result<Vec<Vec<bool>>, GridError> {
    let mut grid = Grid::from_rows(rows)?;
    grid.transition();
    Ok(grid
        .rows()
        .map(|row| row.iter().map(|&cell| cell.is_alive()).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for neighbors in 0..=8 {
            let survives = matches!(neighbors, 2 | 3);
            assert_eq!(next_state(Alive, neighbors).is_alive(), survives, "alive with {neighbors}");
            assert_eq!(next_state(Dead, neighbors).is_alive(), neighbors == 3, "dead with {neighbors}");
        }
    }

    #[test]
    fn corner_has_three_neighbors_at_most() {
        let cells = vec![Alive; 9];
        assert_eq!(alive_neighbors(&cells, 3, 3, 0, 0), 3);
        assert_eq!(alive_neighbors(&cells, 3, 3, 2, 2), 3);
        assert_eq!(alive_neighbors(&cells, 3, 3, 0, 1), 5);
        assert_eq!(alive_neighbors(&cells, 3, 3, 1, 1), 8);
    }

    #[test]
    fn edges_do_not_wrap() {
        // Alive cells on opposite edges of a single row.
        let cells = [Alive, Dead, Dead, Alive];
        assert_eq!(alive_neighbors(&cells, 4, 1, 0, 0), 0);
        assert_eq!(alive_neighbors(&cells, 4, 1, 0, 3), 0);
    }

    #[test]
    fn next_generation_reads_only_previous_state() {
        // Updating in place would change the counts row 1 sees.
        let cells = [Alive, Alive, Alive, Dead, Dead, Dead];
        let next = next_generation(&cells, 3, 2);
        assert_eq!(next, vec![Dead, Alive, Dead, Dead, Alive, Dead]);
        assert_eq!(cells, [Alive, Alive, Alive, Dead, Dead, Dead]);
    }

    #[test]
    #[should_panic(expected = "cell buffer holds 4 cells, not 3x2")]
    fn alive_neighbors_rejects_mismatched_buffer() {
        alive_neighbors(&[Alive; 4], 3, 2, 1, 1);
    }

    #[test]
    #[should_panic(expected = "cell buffer holds 5 cells")]
    fn next_generation_rejects_mismatched_buffer() {
        next_generation(&[Dead; 5], 2, 2);
    }

    #[test]
    fn isolated_cell_dies() {
        let mut cells = vec![Dead; 25];
        cells[12] = Alive;
        assert!(next_generation(&cells, 5, 5).iter().all(|cell| !cell.is_alive()));
    }

    #[test]
    fn step_matrix_flips_blinker() {
        let horizontal = [[false, false, false], [true, true, true], [false, false, false]];
        let vertical = step_matrix(&horizontal).unwrap();
        assert_eq!(
            vertical,
            vec![
                vec![false, true, false],
                vec![false, true, false],
                vec![false, true, false]
            ]
        );
        assert_eq!(step_matrix(&vertical).unwrap(), horizontal.map(Vec::from).to_vec());
    }

    #[test]
    fn step_matrix_rejects_jagged_rows() {
        let rows = vec![vec![true, true], vec![true]];
        assert!(matches!(step_matrix(&rows), Err(GridError::Ragged { row: 1, .. })));
    }
}
