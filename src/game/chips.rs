use crate::error::GameError;

/// Symbols offered to the players when no configuration overrides them.
pub const DEFAULT_CHIPS: [char; 6] = ['&', '@', '#', '%', '?', '*'];

/// Ordered pool of chip symbols nobody has claimed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipPool {
    symbols: Vec<char>,
}

impl ChipPool {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        ChipPool {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Remove `symbol` from the pool, keeping the order of the rest.
    pub fn take(&mut self, symbol: char) -> Result<char, GameError> {
        let pos = self
            .symbols
            .iter()
            .position(|&s| s == symbol)
            .ok_or(GameError::InvalidChip(symbol))?;
        Ok(self.symbols.remove(pos))
    }

    pub fn remaining(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for ChipPool {
    fn default() -> Self {
        Self::new(DEFAULT_CHIPS)
    }
}
