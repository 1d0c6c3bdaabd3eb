//! Text console for playing Magnetic Cave
//!
//! Reads from any [`BufRead`] and writes to any [`Write`], so the whole
//! menu / game / replay loop can be driven from memory in tests.

use std::io::{BufRead, Write};

use log::{debug, info};

use super::{GameMode, GameSession, Seat};
use crate::engine::AIEngine;
use crate::error::{Error, Result};
use crate::rules::GameStatus;
use crate::search::{Clock, SystemClock};

/// Console front-end over an input, an output and an engine
pub struct Console<R, W, C: Clock = SystemClock> {
    input: R,
    output: W,
    engine: AIEngine<C>,
}

impl<R: BufRead, W: Write, C: Clock> Console<R, W, C> {
    pub fn new(input: R, output: W, engine: AIEngine<C>) -> Self {
        Self {
            input,
            output,
            engine,
        }
    }

    /// Hand back the output, e.g. to inspect what was written
    pub fn into_output(self) -> W {
        self.output
    }

    /// Menu, game and replay loop.
    ///
    /// With `mode` set, the menu is skipped for every round. End of input
    /// ends the loop cleanly.
    pub fn run(&mut self, mode: Option<GameMode>) -> Result<()> {
        self.say("Welcome to Magnetic Cave game!")?;
        loop {
            let round = match mode {
                Some(mode) => Ok(mode),
                None => self.choose_mode(),
            }
            .and_then(|mode| self.play_round(mode));

            match round {
                Ok(_) => {}
                Err(Error::InputClosed) => break,
                Err(e) => return Err(e),
            }

            match self.ask_replay() {
                Ok(true) => continue,
                Ok(false) | Err(Error::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }
        info!("console closed");
        Ok(())
    }

    /// Show the mode menu until a valid choice is entered.
    pub fn choose_mode(&mut self) -> Result<GameMode> {
        self.say("Game mode:")?;
        for mode in [
            GameMode::HumanVsHuman,
            GameMode::HumanVsEngine,
            GameMode::EngineVsHuman,
        ] {
            let n = mode as u8 + 1;
            self.say(&format!("{n}. {mode}"))?;
        }
        loop {
            let choice = self.prompt("Enter your choice (1-2-3): ")?;
            if let Some(mode) = GameMode::from_menu_choice(&choice) {
                return Ok(mode);
            }
            self.say("Invalid choice! Please try again.")?;
        }
    }

    /// Play one game in a fresh session until it is won or drawn.
    pub fn play_round(&mut self, mode: GameMode) -> Result<GameStatus> {
        let mut session = GameSession::new(mode);
        loop {
            self.show_board(&session)?;

            let status = match session.current_seat() {
                Seat::Human => self.human_turn(&mut session)?,
                Seat::Engine => self.engine_turn(&mut session)?,
            };

            match status {
                GameStatus::InProgress => {}
                GameStatus::Win(winner) => {
                    self.show_board(&session)?;
                    self.say(&format!("Player {winner} wins!"))?;
                    return Ok(status);
                }
                GameStatus::Draw => {
                    self.show_board(&session)?;
                    self.say("It's a tie!")?;
                    return Ok(status);
                }
            }
        }
    }

    /// Ask whether to play again. Only `n` quits; any other answer,
    /// including an empty line, starts another round.
    pub fn ask_replay(&mut self) -> Result<bool> {
        let answer = self.prompt("Do you want to play again or quit? y/n \n")?;
        Ok(answer != "n")
    }

    fn human_turn(&mut self, session: &mut GameSession) -> Result<GameStatus> {
        let mark = session.current_turn();
        loop {
            let row = self.prompt(&format!("Player {mark}, enter the row (0-7): "))?;
            let col = self.prompt(&format!("Player {mark}, enter the column (0-7): "))?;

            let played = parse_coord(&row)
                .and_then(|r| parse_coord(&col).map(|c| (r, c)))
                .and_then(|(r, c)| session.play_coords(r, c));

            match played {
                Ok(status) => return Ok(status),
                Err(e) if e.is_invalid_move() => {
                    debug!("rejected human move ({row}, {col}): {e}");
                    self.say("Invalid move! Try again.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn engine_turn(&mut self, session: &mut GameSession) -> Result<GameStatus> {
        self.say("Automatic player is Choosing a move!")?;
        let (result, status) = session.play_engine(&self.engine)?;
        self.say(&format!(
            "Automatic player took {:.2} seconds.",
            result.elapsed.as_secs_f64()
        ))?;
        match result.best_move {
            Some(pos) => debug!("engine played {pos}"),
            // Only reachable on a full board, which already ended the game
            None => {
                return Err(Error::InvalidInput {
                    input: "engine found no move".to_string(),
                })
            }
        }
        Ok(status)
    }

    fn show_board(&mut self, session: &GameSession) -> Result<()> {
        write!(self.output, "{}", session.board()).map_err(|e| Error::io("write board", e))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").map_err(|e| Error::io("write output", e))
    }

    /// Print `text` and read one trimmed line.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}").map_err(|e| Error::io("write prompt", e))?;
        self.output.flush().map_err(|e| Error::io("flush output", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("read input", e))?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

fn parse_coord(text: &str) -> Result<i32> {
    text.trim().parse::<i32>().map_err(|_| Error::InvalidInput {
        input: text.to_string(),
    })
}
