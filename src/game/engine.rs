use log::{debug, info};

use super::{Board, ChipPool, Player, COLS, ROWS};
use crate::error::GameError;

/// Placements that fill the board.
pub const MAX_TURNS: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Owns the board, the chip assignment and the turn sequence of one game.
///
/// A turn is two calls: [`GameEngine::place_chip`] drops the active player's
/// chip, then [`GameEngine::evaluate_and_advance`] scores that placement and
/// hands the turn to the other player. [`GameEngine::play_move`] does both.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEngine {
    board: Board,
    active_player: Player,
    outcome: Option<GameOutcome>,
    turns: usize,
    last_move: Option<Position>,
    chips: [Option<char>; 2],
    pool: ChipPool,
    awaiting_evaluation: bool,
}

impl GameEngine {
    /// Create a game using the default chip pool
    pub fn new() -> Self {
        Self::with_pool(ChipPool::default())
    }

    pub fn with_pool(pool: ChipPool) -> Self {
        GameEngine {
            board: Board::new(),
            active_player: Player::One, // Player 1 starts
            outcome: None,
            turns: 0,
            last_move: None,
            chips: [None; 2],
            pool,
            awaiting_evaluation: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Chips placed so far
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn chip(&self, player: Player) -> Option<char> {
        self.chips[player.index()]
    }

    /// Symbols still free to be claimed
    pub fn available_chips(&self) -> &[char] {
        self.pool.remaining()
    }

    /// Columns that still accept a chip; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Bind `symbol` to `player` and remove it from the pool. Only allowed
    /// before the first chip is placed.
    pub fn assign_chip(&mut self, player: Player, symbol: char) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.turns > 0 {
            return Err(GameError::ChipsLocked);
        }
        if self.chips[player.index()].is_some() {
            return Err(GameError::ChipAlreadyAssigned(player));
        }

        let chip = self.pool.take(symbol)?;
        self.chips[player.index()] = Some(chip);
        debug!("{player} plays with '{chip}'");
        Ok(())
    }

    /// Drop the active player's chip into `column` (zero-based).
    ///
    /// Returns the landing position. Nothing is mutated on error.
    pub fn place_chip(&mut self, column: usize) -> Result<Position, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.active_player;
        let chip = self
            .chip(player)
            .ok_or(GameError::ChipNotAssigned(player))?;
        let row = self.board.drop_chip(column, chip)?;

        let position = Position { row, col: column };
        self.turns += 1;
        self.last_move = Some(position);
        self.awaiting_evaluation = true;
        debug!(
            "{player} dropped '{chip}' into column {column}, landed on row {row} (turn {})",
            self.turns
        );

        Ok(position)
    }

    /// Score the last placement. Returns `true` when the game has ended.
    ///
    /// A win is checked before the full-board tie, so a winning 42nd chip is
    /// a win. Otherwise the turn passes to the other player.
    pub fn evaluate_and_advance(&mut self) -> Result<bool, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        let position = match self.last_move {
            Some(position) if self.awaiting_evaluation => position,
            _ => return Err(GameError::NothingToEvaluate),
        };
        self.awaiting_evaluation = false;

        if self.board.check_win(position.row, position.col) {
            self.outcome = Some(GameOutcome::Winner(self.active_player));
            info!("{} wins after {} turns", self.active_player, self.turns);
            return Ok(true);
        }

        if self.turns >= MAX_TURNS {
            debug_assert!(self.board.is_full());
            self.outcome = Some(GameOutcome::Tie);
            info!("board full after {} turns, game tied", self.turns);
            return Ok(true);
        }

        self.active_player = self.active_player.other();
        Ok(false)
    }

    /// Place a chip and evaluate it in one step.
    pub fn play_move(&mut self, column: usize) -> Result<bool, GameError> {
        self.place_chip(column)?;
        self.evaluate_and_advance()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
