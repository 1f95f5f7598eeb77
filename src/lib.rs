//! Battleship for the terminal: adjacency-aware ship placement, hit tracking
//! and a hunt/target computer opponent.

mod ai;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
mod placement;
mod player;
mod player_ai;
mod player_cli;
mod ship;
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
