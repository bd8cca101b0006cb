#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use slide::*;
pub use spawner::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod grid;
mod slide;
mod spawner;
mod tile;
mod types;

/// Largest board side a game can be configured with.
pub const MAX_SIZE: Coord = 16;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGameConfig")]
pub struct GameConfig {
    /// Board side length, the board is always square.
    pub size: Coord,
    /// Chance that a spawned tile is a 4 rather than a 2.
    pub four_probability: f64,
    /// Tiles placed on a fresh board.
    pub initial_tiles: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, four_probability: f64, initial_tiles: CellCount) -> Self {
        Self {
            size,
            four_probability,
            initial_tiles,
        }
    }

    pub fn new(size: Coord, four_probability: f64, initial_tiles: CellCount) -> Self {
        let clamped_size = size.clamp(2, MAX_SIZE);
        if clamped_size != size {
            log::warn!("Board size {} out of range, using {}", size, clamped_size);
        }
        let clamped_probability = clamp_probability(four_probability);
        if clamped_probability != four_probability {
            log::warn!(
                "Four probability {} out of range, using {}",
                four_probability,
                clamped_probability
            );
        }
        let initial_tiles = initial_tiles.min(mult(clamped_size, clamped_size));
        Self::new_unchecked(clamped_size, clamped_probability, initial_tiles)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(4, 0.1, 2)
    }
}

/// Deserialized form of `GameConfig`, clamped through `GameConfig::new`.
#[derive(Deserialize)]
#[serde(default)]
struct RawGameConfig {
    size: Coord,
    four_probability: f64,
    initial_tiles: CellCount,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        let GameConfig {
            size,
            four_probability,
            initial_tiles,
        } = GameConfig::default();
        Self {
            size,
            four_probability,
            initial_tiles,
        }
    }
}

impl From<RawGameConfig> for GameConfig {
    fn from(raw: RawGameConfig) -> Self {
        Self::new(raw.size, raw.four_probability, raw.initial_tiles)
    }
}

pub(crate) fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing moved, or the game was already over.
    NoChange,
    Moved { score_delta: Score },
    /// The move was applied and left no further move possible.
    GameOver { score_delta: Score },
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved { .. } => true,
            Self::GameOver { .. } => true,
        }
    }

    pub const fn score_delta(self) -> Score {
        match self {
            Self::NoChange => 0,
            Self::Moved { score_delta } | Self::GameOver { score_delta } => score_delta,
        }
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}
