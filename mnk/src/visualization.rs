use std::fmt;

use crate::{Coord, Grid, Mark};

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Draws the board with column numbers on top and row numbers on the left:
///
/// ```text
///   0 1 2
/// 0 X|O|
///   -+-+-
/// 1  |X|
///   -+-+-
/// 2  | |O
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.m() == 0 || self.n() == 0 {
            return write!(f, "(empty board)");
        }
        // Cells are as wide as the widest column number, so that the numbers line up
        let cell_width = num_digits(self.m() - 1);
        let label_width = num_digits(self.n() - 1);

        write!(f, "{:label_width$} ", "")?;
        for x in 0..self.m() {
            if x > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:^cell_width$}", x)?;
        }

        for y in 0..self.n() {
            if y > 0 {
                write!(f, "\n{:label_width$} ", "")?;
                for x in 0..self.m() {
                    if x > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", "-".repeat(cell_width))?;
                }
            }
            write!(f, "\n{:>label_width$} ", y)?;
            for x in 0..self.m() {
                if x > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{:^cell_width$}", self.at(Coord::new(x, y)))?;
            }
        }
        Ok(())
    }
}

fn num_digits(mut num: usize) -> usize {
    let mut digits = 1;
    while num >= 10 {
        num /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_board() {
        let mut grid = Grid::create(3, 3, 3).unwrap();
        grid.set(0, 0, Mark::Player).unwrap();
        grid.set(1, 0, Mark::Ai).unwrap();
        grid.set(1, 1, Mark::Player).unwrap();
        grid.set(2, 2, Mark::Ai).unwrap();
        let expected = [
            "  0 1 2", //
            "0 X|O| ",
            "  -+-+-",
            "1  |X| ",
            "  -+-+-",
            "2  | |O",
        ]
        .join("\n");
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn wide_board_keeps_columns_aligned() {
        let mut grid = Grid::create(11, 2, 4).unwrap();
        grid.set(10, 1, Mark::Ai).unwrap();
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
        assert!(lines[3].trim_end().ends_with('O'));
    }

    #[test]
    fn board_without_cells() {
        assert_eq!(Grid::permissive(0, 0, 3).to_string(), "(empty board)");
    }

    #[test]
    fn marks_pad_to_width() {
        assert_eq!(format!("[{:^3}]", Mark::Player), "[ X ]");
        assert_eq!(Mark::Empty.to_string(), " ");
    }
}
