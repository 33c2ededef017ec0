pub use board::*;
pub use config::*;
pub use errors::*;
pub use game::*;
pub use opponent::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod errors;
mod game;
mod opponent;
mod visualization;
