use rand::prelude::*;

use super::*;

/// Spawner that picks an empty cell uniformly and drops a 2, or a 4 with
/// `four_probability`. Seeded, so the same seed replays the same game.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    rng: SmallRng,
    four_probability: f64,
}

impl RandomSpawner {
    pub fn new(seed: u64, four_probability: f64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            four_probability: clamp_probability(four_probability),
        }
    }

    pub fn from_config(seed: u64, config: &GameConfig) -> Self {
        Self::new(seed, config.four_probability)
    }

    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }
}

impl TileSpawner for RandomSpawner {
    fn spawn(&mut self, grid: &mut Grid) -> Option<Coord2> {
        let empty_cells = grid.empty_cells();
        if empty_cells.is_empty() {
            log::debug!("Grid is full, nothing spawned");
            return None;
        }

        let coords = empty_cells[self.rng.random_range(0..empty_cells.len())];
        let tile = if self.rng.random_bool(self.four_probability) {
            Tile::FOUR
        } else {
            Tile::TWO
        };
        grid[coords] = tile;
        log::debug!("Spawned {} at {:?}", tile, coords);
        Some(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_into_the_only_empty_cell() {
        let mut grid = Grid::from_rows(&[[2u32, 4], [0, 8]]).unwrap();
        let mut spawner = RandomSpawner::new(7, 0.1);

        assert_eq!(spawner.spawn(&mut grid), Some((1, 0)));
        assert!(grid.is_full());
        assert!(matches!(grid[(1, 0)], Tile::TWO | Tile::FOUR));
    }

    #[test]
    fn full_grid_is_left_alone() {
        let mut grid = Grid::from_rows(&[[2u32, 4], [16, 8]]).unwrap();
        let before = grid.clone();
        let mut spawner = RandomSpawner::new(7, 0.1);

        assert_eq!(spawner.spawn(&mut grid), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn probability_extremes_pick_value() {
        let mut grid = Grid::new(4);
        let mut twos = RandomSpawner::new(1, 0.0);
        let mut fours = RandomSpawner::new(1, 1.0);
        for _ in 0..8 {
            let coords = twos.spawn(&mut grid).unwrap();
            assert_eq!(grid[coords], Tile::TWO);
            let coords = fours.spawn(&mut grid).unwrap();
            assert_eq!(grid[coords], Tile::FOUR);
        }
        assert!(grid.is_full());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Grid::new(4);
        let mut b = Grid::new(4);
        let mut spawner_a = RandomSpawner::new(42, 0.1);
        let mut spawner_b = RandomSpawner::new(42, 0.1);
        for _ in 0..16 {
            assert_eq!(spawner_a.spawn(&mut a), spawner_b.spawn(&mut b));
        }
        assert_eq!(a, b);
    }

    #[test]
    fn probability_is_clamped() {
        assert_eq!(RandomSpawner::new(0, 3.0).four_probability(), 1.0);
        assert_eq!(RandomSpawner::new(0, -1.0).four_probability(), 0.0);
        assert_eq!(RandomSpawner::new(0, f64::NAN).four_probability(), 0.0);
    }
}
