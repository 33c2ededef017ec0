use std::io::{BufRead, Write};

use mnk::{Coord, Grid};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Plays the human side of a game.
pub trait Player {
    fn name(&self) -> &str;

    /// Picks the next move. `None` means the player leaves the game.
    fn choose_move(&mut self, grid: &Grid) -> anyhow::Result<Option<Coord>>;
}

/// Reads moves as `x,y` lines, printing the board and a prompt before each one.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn choose_move(&mut self, grid: &Grid) -> anyhow::Result<Option<Coord>> {
        loop {
            writeln!(self.output, "{}", grid)?;
            writeln!(self.output, "Enter a move: x,y")?;
            self.output.flush()?;

            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                // EOF
                return Ok(None);
            }
            match parse_move(&self.buf) {
                Some(coord) => return Ok(Some(coord)),
                None => writeln!(self.output, "Invalid input")?,
            }
        }
    }
}

/// Parses `x,y`. Whether the move is on the board is up to the engine.
pub fn parse_move(line: &str) -> Option<Coord> {
    let (x, y) = line.trim().split_once(',')?;
    Some(Coord::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Plays a uniformly random empty cell.
pub struct RandomPlayer<'a> {
    rng: &'a mut StdRng,
}

impl<'a> RandomPlayer<'a> {
    pub fn new(rng: &'a mut StdRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer<'_> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, grid: &Grid) -> anyhow::Result<Option<Coord>> {
        let cells: Vec<Coord> = grid.empty_cells().collect();
        Ok(cells.choose(&mut *self.rng).copied())
    }
}
