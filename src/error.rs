//! Error types for the noughts crate

use thiserror::Error;

/// Reason a move was rejected.
///
/// Rejections are always recoverable: the caller ignores the attempt and the
/// board is left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("position {position} is out of bounds (must be 0-8)")]
    OutOfBounds { position: usize },

    #[error("position {position} is already occupied")]
    Occupied { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is the computer's turn to move")]
    ComputerTurn,
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("the computer is not the player to move")]
    NotComputerTurn,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("invalid board string '{input}': {reason}")]
    InvalidBoardString { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
