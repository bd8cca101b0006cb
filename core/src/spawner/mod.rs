use crate::*;
pub use random::*;

mod random;

/// Places new tiles on the board after an accepted move.
pub trait TileSpawner {
    /// Puts one tile into an empty cell and returns where it went, or `None` when the grid is full.
    fn spawn(&mut self, grid: &mut Grid) -> Option<Coord2>;
}

impl<S: TileSpawner + ?Sized> TileSpawner for &mut S {
    fn spawn(&mut self, grid: &mut Grid) -> Option<Coord2> {
        (**self).spawn(grid)
    }
}
