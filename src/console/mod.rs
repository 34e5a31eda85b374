//! Line-oriented text front end. Reads chip choices and column numbers from
//! any `BufRead`, writes prompts and the board to any `Write`.

pub mod render;

use std::io::{BufRead, Write};

use log::debug;

use crate::config::AppConfig;
use crate::error::{ConsoleError, GameError};
use crate::game::{GameEngine, GameOutcome, Player};

pub struct Console<R, W> {
    input: R,
    output: W,
    engine: GameEngine,
    empty_cell: char,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        Console {
            input,
            output,
            engine: GameEngine::with_pool(config.chips.to_pool()),
            empty_cell: config.display.empty_cell,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play one full game: chip selection, then turns until a win or tie.
    pub fn run(&mut self) -> Result<GameOutcome, ConsoleError> {
        writeln!(self.output, "Welcome to Four In A Row!\n")?;
        for player in Player::ALL {
            self.choose_chip(player)?;
        }

        let outcome = loop {
            self.print_board()?;
            if let Some(outcome) = self.take_turn()? {
                break outcome;
            }
        };

        self.print_board()?;
        match outcome {
            GameOutcome::Winner(player) => writeln!(self.output, "{player} wins!")?,
            GameOutcome::Tie => writeln!(self.output, "It's a tie!")?,
        }
        self.output.flush()?;
        Ok(outcome)
    }

    fn choose_chip(&mut self, player: Player) -> Result<(), ConsoleError> {
        let choices: Vec<String> = self
            .engine
            .available_chips()
            .iter()
            .map(char::to_string)
            .collect();
        writeln!(self.output, "Choose your chip, {player}:")?;
        writeln!(self.output, "{}", choices.join(" "))?;

        loop {
            let line = self.read_line()?;
            match single_char(&line) {
                Some(symbol) => match self.engine.assign_chip(player, symbol) {
                    Ok(()) => return Ok(()),
                    Err(GameError::InvalidChip(_)) => {}
                    Err(e) => return Err(e.into()),
                },
                None => debug!("rejected chip input {line:?}"),
            }
            writeln!(self.output, "Please enter a valid chip:")?;
        }
    }

    /// Ask the active player for a column until a chip lands, then score it.
    /// Returns the outcome once the game has ended.
    fn take_turn(&mut self) -> Result<Option<GameOutcome>, ConsoleError> {
        let player = self.engine.active_player();
        writeln!(self.output, "Pick a column, {player}!")?;

        loop {
            let line = self.read_line()?;
            let Some(column) = parse_column(&line) else {
                debug!("rejected column input {line:?}");
                writeln!(self.output, "Please enter a valid column:")?;
                continue;
            };

            match self.engine.play_move(column) {
                Ok(true) => return Ok(self.engine.outcome()),
                Ok(false) => return Ok(None),
                Err(GameError::OutOfRange(_)) => {
                    writeln!(self.output, "Please enter a valid column:")?;
                }
                Err(GameError::ColumnFull(_)) => {
                    writeln!(self.output, "Column is full. Try again:")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn print_board(&mut self) -> Result<(), ConsoleError> {
        let board = render::render_board(self.engine.board(), self.empty_cell);
        self.output.write_all(board.as_bytes())?;
        Ok(())
    }

    /// Next input line without its terminator; echoes a blank line like a
    /// prompt acknowledgement. Bytes that are not UTF-8 become U+FFFD, so a
    /// garbled line is rejected like any other bad answer.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        writeln!(self.output)?;
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }
}

/// The only character of `input`, if it holds exactly one.
fn single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Convert a 1-based column number typed by a player to a zero-based index.
/// Numbers past the right edge are passed through for the engine to reject.
fn parse_column(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("1"), Some(0));
        assert_eq!(parse_column("7"), Some(6));
        assert_eq!(parse_column("8"), Some(7));
        assert_eq!(parse_column("0"), None);
        assert_eq!(parse_column("-2"), None);
        assert_eq!(parse_column("three"), None);
        assert_eq!(parse_column(""), None);
    }

    #[test]
    fn test_single_char() {
        assert_eq!(single_char("&"), Some('&'));
        assert_eq!(single_char("&&"), None);
        assert_eq!(single_char(""), None);
    }

    #[test]
    fn test_chip_selection_reprompts() {
        let input = Cursor::new("$\n&&\n&\n&\n@\n");
        let mut output = Vec::new();
        let mut console = Console::new(input, &mut output, &AppConfig::default());

        console.choose_chip(Player::One).unwrap();
        console.choose_chip(Player::Two).unwrap();
        assert_eq!(console.engine().chip(Player::One), Some('&'));
        assert_eq!(console.engine().chip(Player::Two), Some('@'));

        let text = String::from_utf8(output).unwrap();
        // '$' and '&&' for Player 1, then '&' again for Player 2
        assert_eq!(text.matches("Please enter a valid chip:").count(), 3);
        assert!(text.contains("Choose your chip, Player 2:\n@ # % ? *\n"));
    }

    #[test]
    fn test_non_utf8_chip_line_reprompts() {
        let input = Cursor::new(b"\xff\n#\n".to_vec());
        let mut output = Vec::new();
        let mut console = Console::new(input, &mut output, &AppConfig::default());

        console.choose_chip(Player::One).unwrap();
        assert_eq!(console.engine().chip(Player::One), Some('#'));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please enter a valid chip:").count(), 1);
    }

    #[test]
    fn test_input_closed_mid_game() {
        let input = Cursor::new("&\n@\n4\n");
        let mut output = Vec::new();
        let mut console = Console::new(input, &mut output, &AppConfig::default());

        assert!(matches!(console.run(), Err(ConsoleError::InputClosed)));
        assert_eq!(console.engine().turns(), 1);
    }
}
