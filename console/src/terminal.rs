//! All cursor handling lives here; the grid only hands over finished text.

use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";

pub struct Terminal<W: Write> {
    out: W,
    redraw_in_place: bool,
}

impl<W: Write> Terminal<W> {
    /// With `redraw_in_place` every frame is drawn over the previous one;
    /// otherwise frames are printed one after another.
    pub fn new(mut out: W, redraw_in_place: bool) -> io::Result<Self> {
        if redraw_in_place {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        Ok(Self {
            out,
            redraw_in_place,
        })
    }

    pub fn draw(&mut self, generation: u64, frame: &str) -> io::Result<()> {
        if self.redraw_in_place {
            self.out.write_all(CURSOR_HOME.as_bytes())?;
        }
        writeln!(self.out, "Generation {generation}")?;
        self.out.write_all(frame.as_bytes())?;
        if !self.redraw_in_place {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
