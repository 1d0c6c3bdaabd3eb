//! Game sessions and the console front-end

pub mod console;
pub mod session;

pub use console::Console;
pub use session::GameSession;

use std::fmt;
use std::str::FromStr;

use crate::board::Cell;
use crate::error::Error;

/// Who controls a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Engine,
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans at one console
    #[default]
    HumanVsHuman,
    /// Human plays `MarkA` and opens, engine plays `MarkB`
    HumanVsEngine,
    /// Engine plays `MarkB` and opens, human plays `MarkA`
    EngineVsHuman,
}

impl GameMode {
    /// Mark that makes the first move
    #[inline]
    pub fn opening_mark(self) -> Cell {
        match self {
            GameMode::HumanVsHuman | GameMode::HumanVsEngine => Cell::MarkA,
            GameMode::EngineVsHuman => Cell::MarkB,
        }
    }

    /// Controller of `mark` in this mode
    #[inline]
    pub fn seat(self, mark: Cell) -> Seat {
        match (self, mark) {
            (GameMode::HumanVsHuman, _) => Seat::Human,
            (_, Cell::MarkB) => Seat::Engine,
            _ => Seat::Human,
        }
    }

    /// Parse a menu choice ("1", "2" or "3")
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(GameMode::HumanVsHuman),
            "2" => Some(GameMode::HumanVsEngine),
            "3" => Some(GameMode::EngineVsHuman),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::HumanVsHuman => "Player vs. Player",
            GameMode::HumanVsEngine => "Player vs. Automatic",
            GameMode::EngineVsHuman => "Automatic vs. Player",
        };
        f.write_str(name)
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hvh" => Ok(GameMode::HumanVsHuman),
            "hve" => Ok(GameMode::HumanVsEngine),
            "evh" => Ok(GameMode::EngineVsHuman),
            other => GameMode::from_menu_choice(other).ok_or_else(|| Error::InvalidInput {
                input: s.to_string(),
            }),
        }
    }
}
