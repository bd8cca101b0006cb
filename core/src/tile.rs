use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Value stored in a single grid cell, zero marks an empty cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(transparent)]
pub struct Tile(u32);

impl Tile {
    pub const EMPTY: Self = Self(0);
    pub const TWO: Self = Self(2);
    pub const FOUR: Self = Self(4);

    /// Accepts zero or a power of two that is at least 2.
    pub const fn new(value: u32) -> Result<Self> {
        if value == 0 || (value >= 2 && value.is_power_of_two()) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidTileValue(value))
        }
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Tile formed by merging `self` with `other`, if the pair can merge.
    ///
    /// Only equal non-empty tiles merge, and never past the largest `u32` power of two.
    pub const fn merge(self, other: Self) -> Option<Self> {
        if self.is_empty() || self.0 != other.0 {
            return None;
        }
        match self.0.checked_mul(2) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn merges_with(self, other: Self) -> bool {
        self.merge(other).is_some()
    }

    /// Base-2 logarithm of the value, 0 for an empty cell.
    pub const fn exponent(self) -> u32 {
        if self.is_empty() { 0 } else { self.0.trailing_zeros() }
    }
}

impl TryFrom<u32> for Tile {
    type Error = GameError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Tile> for u32 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.pad(".")
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}
