//! Error types for the Magnetic Cave crate

use thiserror::Error;

/// Main error type for the Magnetic Cave crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: i32, col: i32 },

    #[error("invalid move: ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("invalid move: only a player mark can be placed")]
    NotAMark,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid input '{input}'")]
    InvalidInput { input: String },

    #[error("input closed")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    /// True for rejections a human can fix by entering another move
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. }
                | Error::Occupied { .. }
                | Error::NotAMark
                | Error::InvalidInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
