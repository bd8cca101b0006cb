use thiserror::Error;

use crate::{Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell {coords:?} is outside of a {size}x{size} grid")]
    IndexOutOfBounds { coords: Coord2, size: Coord },
    #[error("Tile value {0} is neither empty nor a power of two")]
    InvalidTileValue(u32),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
