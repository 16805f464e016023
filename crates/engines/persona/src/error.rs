use chess_core::RulesError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Persona not found: {0}")]
    PersonaNotFound(String),

    #[error("Invalid persona catalog: {0}")]
    InvalidCatalog(String),

    #[error("It is not the player's turn")]
    NotPlayersTurn,

    #[error("It is not the engine's turn")]
    NotEnginesTurn,

    #[error("The game is already over")]
    GameOver,

    #[error("No moves to take back")]
    NothingToUndo,

    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
