use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of tiles, addressed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Tile>", into = "Array2<Tile>")]
pub struct Grid {
    cells: Array2<Tile>,
}

impl Grid {
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::default((size as usize, size as usize)),
        }
    }

    /// Builds a grid from raw row values, mostly useful for fixtures and embedders.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let size_coord = Coord::try_from(size).map_err(|_| GameError::InvalidBoardShape)?;
        if size == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let mut grid = Self::new(size_coord);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GameError::InvalidBoardShape);
            }
            for (col, &value) in values.iter().enumerate() {
                grid.cells[(row, col)] = Tile::new(value)?;
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> Coord {
        // grids are only built square with a `Coord` side
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::IndexOutOfBounds { coords, size })
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn set(&mut self, coords: Coord2, tile: Tile) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords] = tile;
        Ok(())
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.iter_coords().filter(|&coords| self[coords].is_empty()).collect()
    }

    pub fn empty_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|tile| tile.is_empty())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|tile| !tile.is_empty())
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or_default()
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|tile| u64::from(tile.value())).sum()
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|tile| tile.value()).collect())
            .collect()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}

impl TryFrom<Array2<Tile>> for Grid {
    type Error = GameError;

    fn try_from(cells: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols || rows == 0 || Coord::try_from(rows).is_err() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }
}

impl From<Grid> for Array2<Tile> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>5}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
