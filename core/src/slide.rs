use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Dense line buffer, sized for the largest board `GameConfig` allows.
type LineBuf = SmallVec<[Tile; MAX_SIZE as usize]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Rows are the lines for horizontal moves, columns for vertical ones.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether tiles pile up at index `size - 1` instead of index 0.
    pub const fn leads_from_end(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    /// Coordinates of the `pos`-th cell of line `line`, counted from the leading edge.
    fn coords(self, line: Coord, pos: Coord, size: Coord) -> Coord2 {
        let pos = if self.leads_from_end() {
            size - 1 - pos
        } else {
            pos
        };
        if self.is_horizontal() {
            (line, pos)
        } else {
            (pos, line)
        }
    }
}

/// Result of sliding a whole grid, the input grid is left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    pub changed: bool,
    pub score_delta: Score,
}

/// Compacts and merges a single line toward index 0.
///
/// Each tile takes part in at most one merge, so `[2, 2, 2, 2]` turns into
/// `[4, 4, 0, 0]`. Returns whether any cell changed and the points earned.
pub fn slide_line(line: &mut [Tile]) -> (bool, Score) {
    let mut dense: LineBuf = line.iter().copied().filter(|tile| !tile.is_empty()).collect();
    let mut score_delta: Score = 0;

    let mut i = 0;
    while i + 1 < dense.len() {
        if let Some(merged) = dense[i].merge(dense[i + 1]) {
            dense[i] = merged;
            dense[i + 1] = Tile::EMPTY;
            score_delta += Score::from(merged.value());
            i += 2;
        } else {
            i += 1;
        }
    }
    dense.retain(|tile| !tile.is_empty());

    let mut changed = false;
    let packed = dense.into_iter().chain(core::iter::repeat(Tile::EMPTY));
    for (cell, tile) in line.iter_mut().zip(packed) {
        if *cell != tile {
            *cell = tile;
            changed = true;
        }
    }
    (changed, score_delta)
}

/// Slides every line of `grid` toward the leading edge of `direction`.
pub fn slide(grid: &Grid, direction: Direction) -> MoveResult {
    let size = grid.size();
    let mut result = grid.clone();
    let mut changed = false;
    let mut score_delta: Score = 0;

    for line in 0..size {
        let mut buf: LineBuf = (0..size)
            .map(|pos| grid[direction.coords(line, pos, size)])
            .collect();

        let (line_changed, line_score) = slide_line(&mut buf);
        if line_changed {
            for (pos, tile) in (0..size).zip(buf) {
                result[direction.coords(line, pos, size)] = tile;
            }
        }
        changed |= line_changed;
        score_delta += line_score;
    }

    MoveResult {
        grid: result,
        changed,
        score_delta,
    }
}

/// Whether sliding toward `direction` would change anything, without building the result.
pub fn can_slide(grid: &Grid, direction: Direction) -> bool {
    let size = grid.size();
    (0..size).any(|line| {
        let mut seen_empty = false;
        let mut previous = Tile::EMPTY;
        for pos in 0..size {
            let tile = grid[direction.coords(line, pos, size)];
            if tile.is_empty() {
                seen_empty = true;
                continue;
            }
            if seen_empty || previous.merges_with(tile) {
                return true;
            }
            previous = tile;
        }
        false
    })
}
