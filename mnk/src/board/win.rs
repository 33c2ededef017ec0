use crate::{Coord, Grid, Mark};

/// One direction per axis: horizontal, vertical, diagonal and anti-diagonal.
///
/// The opposite directions are covered by walking each axis both ways.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardState {
    InProgress,
    PlayerWins,
    AiWins,
    CatsGame,
}

impl BoardState {
    pub fn is_terminal(self) -> bool {
        self != BoardState::InProgress
    }
}

/// Length of the run of identical marks through `from` along the axis of `direction`.
///
/// The cell `from` itself is counted. Returns 0 if `from` is not on the board.
pub fn run_length(grid: &Grid, from: Coord, direction: (isize, isize)) -> usize {
    if !grid.contains(from.x, from.y) {
        return 0;
    }
    let mark = grid.at(from);
    let (dx, dy) = direction;
    1 + count_ray(grid, from, mark, (dx, dy)) + count_ray(grid, from, mark, (-dx, -dy))
}

fn count_ray(grid: &Grid, from: Coord, mark: Mark, direction: (isize, isize)) -> usize {
    let mut count = 0;
    let mut cursor = from;
    while let Some(next) = grid.step(cursor, direction) {
        if grid.at(next) != mark {
            break;
        }
        count += 1;
        cursor = next;
    }
    count
}

/// Decides the state of the game after a mark was placed at `last`.
///
/// Only the four lines through `last` are inspected, so this relies on the
/// board not having been won before.
pub fn evaluate_placement(grid: &Grid, last: Coord) -> BoardState {
    let winner = match grid.get(last.x, last.y) {
        Ok(Mark::Player) => Some(BoardState::PlayerWins),
        Ok(Mark::Ai) => Some(BoardState::AiWins),
        Ok(Mark::Empty) | Err(_) => None,
    };
    if let Some(winner) = winner {
        let k = grid.k();
        if k > 0 && DIRECTIONS.iter().any(|&dir| run_length(grid, last, dir) >= k) {
            return winner;
        }
    }
    if grid.is_full() {
        BoardState::CatsGame
    } else {
        BoardState::InProgress
    }
}
