//! Error types for board construction and game play

/// Errors raised while building boards or applying moves.
///
/// The state checker and the search never fail; only input handling and
/// the game state machine do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid square '{0}': expected a number from 1 to 9")]
    InvalidSquare(String),

    #[error("square {0} is already taken")]
    SquareTaken(u8),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("invalid cell value {0}: expected -1, 0 or 1..=9")]
    InvalidSentinel(i8),

    #[error("the game is already over")]
    GameOver,

    #[error("it is not the machine's turn")]
    NotMachineTurn,
}

pub type Result<T> = std::result::Result<T, Error>;
