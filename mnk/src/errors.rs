use crate::{Coord, Mark};

/// The error type for [`Grid::create()`](crate::Grid::create).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroDimension { m: usize, n: usize },
    TooManyCells { m: usize, n: usize },
    ZeroRunLength,
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDimension { m, n } => {
                write!(f, "A {}x{} board has no cells", m, n)
            }
            ConfigError::TooManyCells { m, n } => {
                write!(f, "A {}x{} board has too many cells", m, n)
            }
            ConfigError::ZeroRunLength => write!(f, "The winning run length must be at least 1"),
        }
    }
}

/// A coordinate outside of the board was accessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub coord: Coord,
    pub m: usize,
    pub n: usize,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coordinate ({}) is outside of the {}x{} board",
            self.coord, self.m, self.n
        )
    }
}

/// The error type for [`validate()`](crate::validate), i.e. why a human move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(OutOfRange),
    Occupied { coord: Coord, mark: Mark },
}

impl std::error::Error for InvalidMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidMove::OutOfRange(err) => Some(err),
            InvalidMove::Occupied { .. } => None,
        }
    }
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfRange(_) => write!(f, "Tried to play outside of the board"),
            InvalidMove::Occupied { coord, mark } => {
                write!(f, "Tried to play on ({}), which already holds {}", coord, mark)
            }
        }
    }
}

/// The opponent was asked to move on a board without empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoMovesAvailable;

impl std::error::Error for NoMovesAvailable {}

impl std::fmt::Display for NoMovesAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There is no empty cell left to play on")
    }
}
