/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The grid is bounded: cells past the edges are not neighbors and nothing wraps.
*/

pub mod error;
pub mod grid;
pub mod parse;
pub mod render;
pub mod rules;

pub use error::{GridError, ParseError};
pub use grid::{CellState, Grid};
pub use parse::{parse_grid, DEFAULT_DELIMITERS};
pub use render::RenderOptions;
