//! # Four In A Row
//!
//! Two players take turns dropping chips into a 6×7 grid until one of them
//! lines up four, or the board fills.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, chip pool, turn engine
//! - [`console`] — Line-oriented text front end and board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
