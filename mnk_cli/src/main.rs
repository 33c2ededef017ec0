use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mnk::{EngineConfig, Game, Strategy};
use mnk_cli::{load_config, play_game, spar, HumanPlayer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a JSON engine config. The other options override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of columns
    #[arg(short)]
    m: Option<usize>,

    /// Number of rows
    #[arg(short)]
    n: Option<usize>,

    /// How many marks in a row win
    #[arg(short)]
    k: Option<usize>,

    /// How the opponent picks its moves
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyArg>,

    /// How many plies the opponent looks ahead (default: depends on the board size)
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,

    /// Instead of playing interactively, let a random player play this many games
    #[arg(long)]
    num_games: Option<usize>,

    /// RNG seed for the random player
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    FirstEmpty,
    Minimax,
    AlphaBeta,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FirstEmpty => Strategy::FirstEmpty,
            StrategyArg::Minimax => Strategy::Minimax,
            StrategyArg::AlphaBeta => Strategy::AlphaBeta,
        }
    }
}

impl Args {
    fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EngineConfig::default(),
        };
        config.m = self.m.unwrap_or(config.m);
        config.n = self.n.unwrap_or(config.n);
        config.k = self.k.unwrap_or(config.k);
        config.strategy = self.strategy.map_or(config.strategy, Strategy::from);
        config.max_depth = self.max_depth.or(config.max_depth);
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = args.engine_config()?;
    debug!(?config);

    if let Some(num_games) = args.num_games {
        // Get a random seed
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let tally = spar(&config, num_games, &mut rng)?;
        println!("{}", tally);
        return Ok(());
    }

    let mut game = Game::new(&config)?;
    let mut player = HumanPlayer::new(io::stdin().lock(), io::stdout());
    let result = play_game(&mut game, &mut player, &mut io::stdout())?;
    debug!(?result);
    println!("{}", game);
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
