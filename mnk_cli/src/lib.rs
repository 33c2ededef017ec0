mod config;
mod game;
mod player;
mod spar;
pub use config::*;
pub use game::*;
pub use player::*;
pub use spar::*;
