use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout does not match the configured mine count")]
    MineCountMismatch,
    #[error("Mine placed inside the first reveal safe zone")]
    MineInSafeZone,
}

pub type Result<T> = core::result::Result<T, GameError>;
