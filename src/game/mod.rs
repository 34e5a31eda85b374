//! Core Four In A Row logic: board, players, chip pool and the turn engine.
//! Nothing in here performs I/O.

mod board;
mod chips;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use chips::{ChipPool, DEFAULT_CHIPS};
pub use engine::{GameEngine, GameOutcome, Position, MAX_TURNS};
pub use player::Player;
