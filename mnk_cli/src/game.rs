use std::io::Write;

use mnk::{Game, MoveOutcome, Opponent};
use tracing::{debug, trace};

use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    PlayerWins,
    AiWins,
    CatsGame,
    /// The player left before the game was decided.
    Abandoned,
}

/// Lets `player` play the human side until the game is decided.
///
/// The outcome of every move is written to `out`. Returns an error only on
/// I/O failure, not when the player makes an invalid move.
pub fn play_game<O: Opponent>(
    game: &mut Game<O>,
    player: &mut impl Player,
    out: &mut impl Write,
) -> anyhow::Result<GameResult> {
    loop {
        let Some(coord) = player.choose_move(game.grid())? else {
            debug!(player = player.name(), "Player left the game");
            return Ok(GameResult::Abandoned);
        };
        let outcome = game.make_move(coord.x, coord.y);
        trace!(player = player.name(), %coord, ?outcome);
        writeln!(out, "{}", outcome)?;
        match outcome {
            MoveOutcome::PlayerWins => return Ok(GameResult::PlayerWins),
            MoveOutcome::AiWins { .. } => return Ok(GameResult::AiWins),
            MoveOutcome::CatsGame { .. } => return Ok(GameResult::CatsGame),
            MoveOutcome::InvalidMove | MoveOutcome::InProgress { .. } => {}
        }
    }
}
