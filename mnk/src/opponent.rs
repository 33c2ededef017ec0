mod heuristic;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use heuristic::*;

use crate::{evaluate_placement, BoardState, Coord, EngineConfig, Grid, Mark, NoMovesAvailable};

/// Roughly how many cells one reply may read. The search deepens as long as a
/// full-width tree stays within this.
const WORK_BUDGET: u64 = 20_000_000;

const INFINITY: i64 = i64::MAX / 2;

/// The automated player.
pub trait Opponent {
    /// Picks an empty cell to place the automated player's mark on.
    ///
    /// Implementations must not modify the board, and must return the same
    /// cell every time they are given the same board.
    fn select_move(&self, grid: &Grid) -> Result<Coord, NoMovesAvailable>;
}

/// How [`SearchOpponent`] picks its moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The first empty cell in row-major order.
    FirstEmpty,
    /// Full-width minimax.
    Minimax,
    /// Minimax with alpha-beta pruning. Picks the same moves as `Minimax`, only faster.
    #[default]
    AlphaBeta,
}

/// A depth-limited minimax opponent.
///
/// The automated player maximizes and the human minimizes. Decided games score
/// [`WIN_SCORE`] minus the number of plies it took, so quicker wins and slower
/// losses are preferred. Positions at the depth limit are scored with
/// [`heuristic_score()`], which is updated incrementally as the search places
/// marks. Among equally good moves, the first one in row-major order is chosen.
///
/// Without an explicit `max_depth`, the depth follows from [`depth_budget()`],
/// so the work per reply stays bounded on every board size. An explicit
/// `max_depth` is not bounded that way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOpponent {
    pub strategy: Strategy,
    pub max_depth: Option<usize>,
}

impl SearchOpponent {
    pub fn new(strategy: Strategy, max_depth: Option<usize>) -> Self {
        Self {
            strategy,
            max_depth,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.strategy, config.max_depth)
    }
}

impl Opponent for SearchOpponent {
    fn select_move(&self, grid: &Grid) -> Result<Coord, NoMovesAvailable> {
        let pruning = match self.strategy {
            Strategy::FirstEmpty => return grid.empty_cells().next().ok_or(NoMovesAvailable),
            Strategy::Minimax => false,
            Strategy::AlphaBeta => true,
        };
        let mut search = Search::new(grid, self.max_depth, pruning);
        let (coord, score) = search.best_move()?;
        debug!(
            x = coord.x,
            y = coord.y,
            score,
            max_depth = search.max_depth,
            nodes = search.nodes,
            scored = search.total.is_some(),
            "Selected move"
        );
        Ok(coord)
    }
}

/// How many plies can be searched on a board with `num_empty` empty cells
/// when placing a mark costs `node_cost` cell reads, without a full-width tree
/// reading more than 20 million cells.
///
/// Small boards are searched to the end of the game.
pub fn depth_budget(num_empty: usize, node_cost: u64) -> usize {
    let mut depth = 0;
    let mut nodes: u64 = 1;
    while depth < num_empty {
        let branching = (num_empty - depth) as u64;
        let next = nodes.saturating_mul(branching);
        if next.saturating_mul(node_cost) > WORK_BUDGET {
            break;
        }
        nodes = next;
        depth += 1;
    }
    depth.max(1)
}

struct Search {
    /// A private copy of the board. Moves are placed and taken back during the search.
    scratch: Grid,
    max_depth: usize,
    pruning: bool,
    nodes: u64,
    /// [`window_total()`] of `scratch`, kept current while marks are placed and taken back.
    /// `None` when even a single ply of scoring would exceed [`WORK_BUDGET`]; positions
    /// at the depth limit then all score 0.
    total: Option<i64>,
}

impl Search {
    fn new(grid: &Grid, max_depth: Option<usize>, pruning: bool) -> Self {
        // Checking for a win reads about as many cells as scoring the placement
        let node_cost = 2 * placement_cost(grid) + 1;
        let scored = (grid.num_empty() as u64).saturating_mul(node_cost) <= WORK_BUDGET;
        let max_depth = max_depth
            .unwrap_or_else(|| depth_budget(grid.num_empty(), node_cost))
            .max(1);
        if !scored {
            debug!(node_cost, "Not scoring positions on this board");
        }
        Self {
            scratch: grid.clone(),
            max_depth,
            pruning,
            nodes: 0,
            total: scored.then(|| window_total(grid)),
        }
    }

    fn best_move(&mut self) -> Result<(Coord, i64), NoMovesAvailable> {
        let candidates: Vec<Coord> = self.scratch.empty_cells().collect();
        let mut best: Option<(Coord, i64)> = None;
        let mut alpha = -INFINITY;
        for coord in candidates {
            // With pruning, a move that is not better than the best so far comes back
            // as an upper bound <= alpha, so it can never replace the earlier move.
            let score = self.score_move(coord, Mark::Ai, 1, alpha, INFINITY);
            trace!(x = coord.x, y = coord.y, score, "Candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((coord, score));
                if self.pruning {
                    alpha = score;
                }
            }
        }
        best.ok_or(NoMovesAvailable)
    }

    /// Places `mark` at `coord`, scores the resulting position, and takes the mark back.
    fn score_move(&mut self, coord: Coord, mark: Mark, ply: usize, alpha: i64, beta: i64) -> i64 {
        self.nodes += 1;
        self.scratch.put(coord, mark);
        let score = match evaluate_placement(&self.scratch, coord) {
            BoardState::AiWins => WIN_SCORE - ply as i64,
            BoardState::PlayerWins => -WIN_SCORE + ply as i64,
            BoardState::CatsGame => 0,
            BoardState::InProgress => {
                let previous = self.total;
                self.total =
                    previous.map(|total| total + placement_delta(&self.scratch, coord, mark));
                let score = if ply >= self.max_depth {
                    self.total.map_or(0, bounded)
                } else {
                    self.minimax(mark.opponent(), ply, alpha, beta)
                };
                self.total = previous;
                score
            }
        };
        self.scratch.put(coord, Mark::Empty);
        score
    }

    /// Value of the position for the side `to_move`, after `ply` plies were played.
    fn minimax(&mut self, to_move: Mark, ply: usize, mut alpha: i64, mut beta: i64) -> i64 {
        let candidates: Vec<Coord> = self.scratch.empty_cells().collect();
        let maximizing = to_move == Mark::Ai;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for coord in candidates {
            let score = self.score_move(coord, to_move, ply + 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.pruning && alpha >= beta {
                break;
            }
        }
        best
    }
}
