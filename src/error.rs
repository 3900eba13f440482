use thiserror::Error;

/// Erros devolvidos pela fronteira do jogo (`Game`).
/// O núcleo (posição, geração, busca) não valida nada e não falha.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0}")]
    InvalidNotation(String),

    #[error("no piece on {0}")]
    EmptySquare(String),

    #[error("the piece on {0} does not belong to the side to move")]
    NotYourPiece(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("the game is already over")]
    GameOver,

    #[error("a pawn promotion must be resolved first")]
    PromotionPending,

    #[error("there is no pending promotion")]
    NoPendingPromotion,

    #[error("cannot promote to {0}")]
    InvalidPromotionPiece(char),

    #[error("unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
