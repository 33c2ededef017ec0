use mnk::{EngineConfig, Game};
use rand::rngs::StdRng;
use tracing::debug;

use crate::game::{play_game, GameResult};
use crate::player::RandomPlayer;

/// How a series of games between a random player and the engine went.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_wins: usize,
    pub ai_wins: usize,
    pub cats_games: usize,
}

impl Tally {
    pub fn num_games(&self) -> usize {
        self.player_wins + self.ai_wins + self.cats_games
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "End result:\n- {} wins by the player\n- {} wins by the Ai\n- {} cat's games",
            self.player_wins, self.ai_wins, self.cats_games
        )
    }
}

/// Plays `num_games` games in which a random player takes the human side.
pub fn spar(config: &EngineConfig, num_games: usize, rng: &mut StdRng) -> anyhow::Result<Tally> {
    let mut tally = Tally::default();
    for game_idx in 0..num_games {
        let mut game = Game::new(config)?;
        let mut player = RandomPlayer::new(rng);
        match play_game(&mut game, &mut player, &mut std::io::sink())? {
            GameResult::PlayerWins => tally.player_wins += 1,
            GameResult::AiWins => tally.ai_wins += 1,
            GameResult::CatsGame => tally.cats_games += 1,
            GameResult::Abandoned => anyhow::bail!("The random player left game {}", game_idx),
        }
        debug!(game_idx, "\n{}", game);
    }
    Ok(tally)
}
