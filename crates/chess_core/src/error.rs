use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Unrecognised move notation: {0}")]
    UnknownMove(String),

    #[error("Invalid square: {0}")]
    InvalidSquare(String),
}
