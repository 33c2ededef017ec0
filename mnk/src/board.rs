mod validate;
mod win;

use tracing::warn;

pub use validate::*;
pub use win::*;

use crate::{ConfigError, OutOfRange};

/// Boards with more cells than this are rejected by [`Grid::create()`].
pub const MAX_CELLS: usize = 1 << 16;

/// What occupies a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    /// The human side, drawn as `X`.
    Player,
    /// The automated side, drawn as `O`.
    Ai,
}

impl Mark {
    /// The mark of the other side. `Empty` stays `Empty`.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Empty => Mark::Empty,
            Mark::Player => Mark::Ai,
            Mark::Ai => Mark::Player,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::Player => "X",
            Mark::Ai => "O",
        }
    }
}

/// A 0-indexed cell address. `x` runs along the `m` axis, `y` along the `n` axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The m x n board together with the run length `k` needed to win.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    m: usize,
    n: usize,
    k: usize,
    /// Row-major, i.e. indexed by `y * m + x`.
    cells: Vec<Mark>,
    /// Derived from `cells`, so that `is_full()` is O(1) during search.
    num_empty: usize,
}

impl Grid {
    /// Creates an empty board.
    pub fn create(m: usize, n: usize, k: usize) -> Result<Self, ConfigError> {
        if m == 0 || n == 0 {
            return Err(ConfigError::ZeroDimension { m, n });
        }
        let num_cells = m
            .checked_mul(n)
            .filter(|&num_cells| num_cells <= MAX_CELLS)
            .ok_or(ConfigError::TooManyCells { m, n })?;
        if k == 0 {
            return Err(ConfigError::ZeroRunLength);
        }
        Ok(Self {
            m,
            n,
            k,
            cells: vec![Mark::Empty; num_cells],
            num_empty: num_cells,
        })
    }

    /// Like [`Self::create()`], but never fails.
    ///
    /// An invalid configuration results in a board on which nobody can ever win:
    /// a board without cells rejects every move, and a run length of 0 is never completed.
    pub fn permissive(m: usize, n: usize, k: usize) -> Self {
        match Self::create(m, n, k) {
            Ok(grid) => grid,
            Err(err @ ConfigError::ZeroRunLength) => {
                warn!(%err, m, n, "Creating a board that cannot be won");
                // create() only reports a zero run length after checking the dimensions
                let num_cells = m * n;
                Self {
                    m,
                    n,
                    k: 0,
                    cells: vec![Mark::Empty; num_cells],
                    num_empty: num_cells,
                }
            }
            Err(err) => {
                warn!(%err, k, "Creating a board without cells");
                Self {
                    m: 0,
                    n: 0,
                    k,
                    cells: Vec::new(),
                    num_empty: 0,
                }
            }
        }
    }

    /// Number of columns, i.e. the exclusive upper bound of `x`.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of rows, i.e. the exclusive upper bound of `y`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Run length needed to win. 0 means the board cannot be won.
    pub fn k(&self) -> usize {
        self.k
    }

    /// `(m, n, k)`
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.m, self.n, self.k)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.m && y < self.n
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Mark, OutOfRange> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Overwrites a cell, whatever it held before.
    pub fn set(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), OutOfRange> {
        let idx = self.index(x, y)?;
        self.write(idx, mark);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.num_empty == 0
    }

    pub fn num_empty(&self) -> usize {
        self.num_empty
    }

    /// The empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells_with_mark(Mark::Empty)
    }

    /// The cells holding `mark`, in row-major order.
    pub fn cells_with_mark(&self, mark: Mark) -> impl Iterator<Item = Coord> + '_ {
        let m = self.m;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == mark)
            .map(move |(idx, _)| Coord::new(idx % m, idx / m))
    }

    /// The neighbor of `from` in `direction`, if it is on the board.
    pub fn step(&self, from: Coord, (dx, dy): (isize, isize)) -> Option<Coord> {
        let x = from.x.checked_add_signed(dx)?;
        let y = from.y.checked_add_signed(dy)?;
        self.contains(x, y).then_some(Coord { x, y })
    }

    // Only valid for coordinates that are known to be on the board.
    pub(crate) fn at(&self, coord: Coord) -> Mark {
        self.cells[coord.y * self.m + coord.x]
    }

    // Only valid for coordinates that are known to be on the board.
    pub(crate) fn put(&mut self, coord: Coord, mark: Mark) {
        self.write(coord.y * self.m + coord.x, mark);
    }

    fn write(&mut self, idx: usize, mark: Mark) {
        let previous = std::mem::replace(&mut self.cells[idx], mark);
        match (previous, mark) {
            (Mark::Empty, Mark::Player | Mark::Ai) => self.num_empty -= 1,
            (Mark::Player | Mark::Ai, Mark::Empty) => self.num_empty += 1,
            _ => {}
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, OutOfRange> {
        if self.contains(x, y) {
            Ok(y * self.m + x)
        } else {
            Err(OutOfRange {
                coord: Coord::new(x, y),
                m: self.m,
                n: self.n,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::GridInput;

    quickcheck! {
        fn num_empty_matches_cells(input: GridInput) -> bool {
            let grid = input.grid;
            grid.num_empty() == grid.empty_cells().count()
                && grid.is_full() == (grid.empty_cells().count() == 0)
        }

        fn get_agrees_with_contains(input: GridInput, x: u8, y: u8) -> bool {
            let (x, y) = (usize::from(x % 8), usize::from(y % 8));
            input.grid.get(x, y).is_ok() == input.grid.contains(x, y)
        }
    }

    #[test]
    fn create_rejects_degenerate_dimensions() {
        assert_eq!(
            Grid::create(0, 3, 3),
            Err(ConfigError::ZeroDimension { m: 0, n: 3 })
        );
        assert_eq!(
            Grid::create(3, 0, 3),
            Err(ConfigError::ZeroDimension { m: 3, n: 0 })
        );
        assert_eq!(Grid::create(3, 3, 0), Err(ConfigError::ZeroRunLength));
        assert_eq!(
            Grid::create(usize::MAX, 2, 3),
            Err(ConfigError::TooManyCells { m: usize::MAX, n: 2 })
        );
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::create(4, 2, 3).unwrap();
        assert_eq!(grid.num_empty(), 8);
        assert!(!grid.is_full());
        assert_eq!(grid.get(3, 1), Ok(Mark::Empty));
        assert_eq!(
            grid.get(1, 3),
            Err(OutOfRange {
                coord: Coord::new(1, 3),
                m: 4,
                n: 2
            })
        );
    }

    #[test]
    fn set_and_fill() {
        let mut grid = Grid::create(2, 2, 2).unwrap();
        grid.set(0, 0, Mark::Player).unwrap();
        grid.set(1, 0, Mark::Ai).unwrap();
        grid.set(0, 1, Mark::Player).unwrap();
        assert!(!grid.is_full());
        assert!(grid.set(2, 1, Mark::Ai).is_err());
        grid.set(1, 1, Mark::Ai).unwrap();
        assert!(grid.is_full());
        // Overwriting a mark with another mark does not change the count
        grid.set(1, 1, Mark::Player).unwrap();
        assert!(grid.is_full());
        grid.set(1, 1, Mark::Empty).unwrap();
        assert_eq!(grid.empty_cells().collect::<Vec<_>>(), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn cells_are_scanned_row_major() {
        let mut grid = Grid::create(3, 2, 2).unwrap();
        grid.set(2, 0, Mark::Ai).unwrap();
        grid.set(0, 1, Mark::Ai).unwrap();
        let ai_cells: Vec<Coord> = grid.cells_with_mark(Mark::Ai).collect();
        assert_eq!(ai_cells, vec![Coord::new(2, 0), Coord::new(0, 1)]);
        assert_eq!(grid.empty_cells().next(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn permissive_never_fails() {
        let grid = Grid::permissive(3, 3, 0);
        assert_eq!(grid.dimensions(), (3, 3, 0));
        assert_eq!(grid.num_empty(), 9);

        let grid = Grid::permissive(0, 5, 3);
        assert!(grid.get(0, 0).is_err());
        assert!(grid.is_full());

        let grid = Grid::permissive(usize::MAX, usize::MAX, 3);
        assert_eq!((grid.m(), grid.n()), (0, 0));
    }

    #[test]
    fn step_stays_on_the_board() {
        let grid = Grid::create(3, 3, 3).unwrap();
        assert_eq!(grid.step(Coord::new(0, 0), (-1, 0)), None);
        assert_eq!(grid.step(Coord::new(0, 2), (1, 1)), None);
        assert_eq!(grid.step(Coord::new(0, 2), (1, -1)), Some(Coord::new(1, 1)));
    }
}
