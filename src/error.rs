use thiserror::Error;

/// Errors surfaced by the board, the search and the game driver.
///
/// Every variant is a contract violation by the caller; nothing here is transient or retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move: cell ({row}, {col}) is already marked")]
    IllegalMove { row: usize, col: usize },

    #[error("invalid coordinate ({row}, {col}) for a {size}x{size} board")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    #[error("board size must be between 1 and {}", crate::board::MAX_SIZE)]
    InvalidSize,

    #[error("game already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid board shape: expected {expected} cells in every row, got a row of {got}")]
    InvalidBoardShape { expected: usize, got: usize },

    #[error("invalid character '{character}' at ({row}, {col})")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
