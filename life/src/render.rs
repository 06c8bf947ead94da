use std::fmt;

use crate::grid::{CellState, Grid};

pub const ALIVE_GLYPH: char = '■';
pub const DEAD_GLYPH: char = ' ';

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Separate columns with `|` and rows with `---+---` dividers.
    pub grid_lines: bool,
    /// Frame the grid with a border.
    pub box_lines: bool,
}

fn glyph(cell: CellState) -> char {
    if cell.is_alive() {
        ALIVE_GLYPH
    } else {
        DEAD_GLYPH
    }
}

impl Grid {
    /// Format the grid as text, one line per row, each ending in `\n`.
    ///
    /// A grid with no cells renders as an empty string.
    pub fn render(&self, options: RenderOptions) -> String {
        if self.is_empty() {
            return String::new();
        }

        let column_separator = if options.grid_lines { " | " } else { " " };
        let divider = if options.grid_lines {
            vec!["---"; self.width()].join("+")
        } else {
            "-".repeat(self.width() * 2 + 1)
        };
        let (side, corner) = if options.box_lines { ("|", "+") } else { ("", "") };

        let mut output = String::new();
        if options.box_lines {
            output.push_str(&format!("{corner}{divider}{corner}\n"));
        }

        for (index, row) in self.rows().enumerate() {
            if index > 0 && options.grid_lines {
                output.push_str(&format!("{corner}{divider}{corner}\n"));
            }
            let cells: Vec<String> = row.iter().map(|&cell| glyph(cell).to_string()).collect();
            output.push_str(&format!("{side} {} {side}\n", cells.join(column_separator)));
        }

        if options.box_lines {
            output.push_str(&format!("{corner}{divider}{corner}\n"));
        }
        output
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderOptions::default()))
    }
}
