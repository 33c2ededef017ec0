use tracing::debug;

use crate::{
    evaluate_placement, validate, BoardState, ConfigError, Coord, EngineConfig, Grid, Mark,
    Opponent, SearchOpponent,
};

/// Numeric status codes, as reported across the C boundary.
pub const INVALID_MOVE: u8 = 0;
pub const PLAYER_WINS: u8 = 1;
pub const AI_WINS: u8 = 2;
pub const CATS_GAME: u8 = 3;
pub const IN_PROGRESS: u8 = 4;

/// Summarizes the outcome of one call to [`Game::make_move()`].
///
/// `ai_move` is the cell the automated player answered with during that call.
/// It is `None` when the game was already over before the automated player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was rejected. The board is unchanged.
    InvalidMove,
    PlayerWins,
    AiWins { ai_move: Option<Coord> },
    CatsGame { ai_move: Option<Coord> },
    InProgress { ai_move: Coord },
}

impl MoveOutcome {
    fn from_state(state: BoardState, ai_move: Option<Coord>) -> Self {
        match state {
            BoardState::PlayerWins => MoveOutcome::PlayerWins,
            BoardState::AiWins => MoveOutcome::AiWins { ai_move },
            BoardState::CatsGame => MoveOutcome::CatsGame { ai_move },
            BoardState::InProgress => match ai_move {
                Some(ai_move) => MoveOutcome::InProgress { ai_move },
                None => unreachable!("A game in progress always reports the opponent's reply"),
            },
        }
    }

    pub fn status_code(self) -> u8 {
        match self {
            MoveOutcome::InvalidMove => INVALID_MOVE,
            MoveOutcome::PlayerWins => PLAYER_WINS,
            MoveOutcome::AiWins { .. } => AI_WINS,
            MoveOutcome::CatsGame { .. } => CATS_GAME,
            MoveOutcome::InProgress { .. } => IN_PROGRESS,
        }
    }

    pub fn ai_move(self) -> Option<Coord> {
        match self {
            MoveOutcome::InvalidMove | MoveOutcome::PlayerWins => None,
            MoveOutcome::AiWins { ai_move } | MoveOutcome::CatsGame { ai_move } => ai_move,
            MoveOutcome::InProgress { ai_move } => Some(ai_move),
        }
    }

    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            MoveOutcome::PlayerWins | MoveOutcome::AiWins { .. } | MoveOutcome::CatsGame { .. }
        )
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::InvalidMove => write!(f, "Invalid Move"),
            MoveOutcome::PlayerWins => write!(f, "Player Wins!"),
            MoveOutcome::AiWins { ai_move: Some(c) } => {
                write!(f, "Ai places {} at {}. Ai Wins!", Mark::Ai, c)
            }
            MoveOutcome::AiWins { ai_move: None } => write!(f, "Ai Wins!"),
            MoveOutcome::CatsGame { ai_move: Some(c) } => {
                write!(f, "Ai places {} at {}. Cat's game!", Mark::Ai, c)
            }
            MoveOutcome::CatsGame { ai_move: None } => write!(f, "Cat's game!"),
            MoveOutcome::InProgress { ai_move } => {
                write!(f, "Ai places {} at {}", Mark::Ai, ai_move)
            }
        }
    }
}

/// A game between a human and an automated opponent.
///
/// The human moves by calling [`Self::make_move()`], which also lets the
/// opponent answer. Once the game is over, the board does not change anymore.
#[derive(Clone, Debug)]
pub struct Game<O = SearchOpponent> {
    grid: Grid,
    state: BoardState,
    opponent: O,
}

impl Game<SearchOpponent> {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        let grid = Grid::create(config.m, config.n, config.k)?;
        Ok(Self::with_opponent(grid, SearchOpponent::from_config(config)))
    }

    /// Creates a game with the default opponent, accepting any dimensions.
    ///
    /// See [`Grid::permissive()`] for what happens with invalid dimensions.
    pub fn permissive(m: usize, n: usize, k: usize) -> Self {
        Self::with_opponent(Grid::permissive(m, n, k), SearchOpponent::default())
    }
}

impl<O: Opponent> Game<O> {
    /// Starts a game on `grid`, which may already contain marks.
    pub fn with_opponent(grid: Grid, opponent: O) -> Self {
        Self {
            grid,
            state: BoardState::InProgress,
            opponent,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// Plays the human's mark at `(x, y)`, and then the opponent's answer if the game goes on.
    ///
    /// Panics if the opponent fails to produce a legal move while the game is
    /// in progress, since that means the opponent is broken.
    pub fn make_move(&mut self, x: usize, y: usize) -> MoveOutcome {
        if self.state.is_terminal() {
            return MoveOutcome::from_state(self.state, None);
        }

        let coord = match validate(&self.grid, x, y) {
            Ok(coord) => coord,
            Err(err) => {
                debug!(x, y, %err, "Rejected move");
                return MoveOutcome::InvalidMove;
            }
        };
        self.grid.put(coord, Mark::Player);
        self.state = evaluate_placement(&self.grid, coord);
        if self.state.is_terminal() {
            debug!(x, y, state = ?self.state, "Game ended by the player's move");
            return MoveOutcome::from_state(self.state, None);
        }

        // The board cannot be full here, otherwise the state would be terminal
        let ai_move = match self.opponent.select_move(&self.grid) {
            Ok(ai_move) => ai_move,
            Err(err) => panic!("The opponent could not move on an unfinished board: {}", err),
        };
        if let Err(err) = validate(&self.grid, ai_move.x, ai_move.y) {
            panic!("The opponent chose an illegal move: {}", err);
        }
        self.grid.put(ai_move, Mark::Ai);
        self.state = evaluate_placement(&self.grid, ai_move);
        debug!(x, y, ai_x = ai_move.x, ai_y = ai_move.y, state = ?self.state, "Moves played");
        MoveOutcome::from_state(self.state, Some(ai_move))
    }
}

impl<O> std::fmt::Display for Game<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.grid, f)
    }
}
