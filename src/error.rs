use thiserror::Error;

/// Errors returned by board construction, move application and move selection
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board dimensions {rows}x{cols}, both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("no legal moves remain on a board that is not terminal")]
    NoLegalMoves,

    /// An empty mark was given where a player was expected
    #[error("expected player 1 or player 2, got an empty mark")]
    InvalidPlayer,

    #[error("could not parse '{0}' as a mark, expected 0, 1 or 2")]
    InvalidMark(u8),
}

pub type Result<T> = std::result::Result<T, GameError>;
