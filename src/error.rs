use std::path::PathBuf;

use crate::game::Player;

/// Errors raised by the game engine. Every variant is recoverable: the engine
/// state is left exactly as it was before the rejected call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("chip '{0}' is not available")]
    InvalidChip(char),

    #[error("{0} already has a chip")]
    ChipAlreadyAssigned(Player),

    #[error("chips cannot change once play has started")]
    ChipsLocked,

    #[error("{0} has not chosen a chip yet")]
    ChipNotAssigned(Player),

    #[error("column {0} is out of range")]
    OutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("no placement is waiting to be evaluated")]
    NothingToEvaluate,
}

/// Problems with the chip pool / display TOML file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot open {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Errors that end a console session early.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("game error: {0}")]
    Game(#[from] GameError),
}
