use crate::*;

/// Whether any slide is still possible: an empty cell exists, or two
/// orthogonally adjacent cells hold tiles that can merge.
pub fn has_moves(grid: &Grid) -> bool {
    grid.iter_coords().any(|coords| {
        let tile = grid[coords];
        tile.is_empty() || grid.iter_neighbors(coords).any(|pos| tile.merges_with(grid[pos]))
    })
}

/// No slide in any direction can change the grid.
pub fn is_terminal(grid: &Grid) -> bool {
    !has_moves(grid)
}

/// Directions that would change the grid, in `Direction::ALL` order.
pub fn legal_directions(grid: &Grid) -> impl Iterator<Item = Direction> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&direction| can_slide(grid, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn grid(rows: &[[u32; 4]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn any_empty_cell_is_movable() {
        let board = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
        assert!(has_moves(&board));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn full_checkerboard_is_terminal() {
        let board = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_terminal(&board));
        assert_eq!(legal_directions(&board).count(), 0);
    }

    #[test]
    fn horizontal_pair_keeps_game_alive() {
        let board = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(has_moves(&board));
        let legal: Vec<_> = legal_directions(&board).collect();
        assert_eq!(legal, [Direction::Left, Direction::Right]);
    }

    #[test]
    fn vertical_pair_keeps_game_alive() {
        let board = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]]);
        assert!(has_moves(&board));
        let legal: Vec<_> = legal_directions(&board).collect();
        assert_eq!(legal, [Direction::Up, Direction::Down]);
    }

    #[test]
    fn top_tile_pair_is_terminal() {
        let top: u32 = 1 << 31;
        let board = Grid::from_rows(&[[top, top], [2, 4]]).unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn empty_grid_allows_nothing_to_slide() {
        let board = Grid::new(4);
        assert!(has_moves(&board));
        assert_eq!(legal_directions(&board).count(), 0);
    }
}
