//! Random tile placement.

use crate::core::{GameRng, Grid, Position, Tile};

/// Place `value` on an empty cell chosen uniformly at random.
///
/// Returns the position filled, or `None` if the grid was already full.
/// Occupied cells are never touched.
///
/// ```
/// use rust_2048::core::{GameRng, Grid};
/// use rust_2048::engine::spawn;
///
/// let mut grid = Grid::new();
/// let mut rng = GameRng::new(42);
///
/// let pos = spawn(&mut grid, 2, &mut rng).unwrap();
/// assert_eq!(grid[pos], 2);
/// assert_eq!(grid.tile_count(), 1);
/// ```
pub fn spawn(grid: &mut Grid, value: Tile, rng: &mut GameRng) -> Option<Position> {
    let empty = grid.empty_positions();
    let pos = *rng.choose(&empty)?;
    grid.place(pos, value).then_some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_grid_is_noop() {
        let mut grid = Grid::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
        let before = grid.clone();
        let mut rng = GameRng::new(1);

        assert_eq!(spawn(&mut grid, 2, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_last_empty_cell_fills_grid() {
        let mut grid = Grid::from_rows(vec![vec![2, 4], vec![0, 16]]).unwrap();
        let mut rng = GameRng::new(1);

        assert_eq!(spawn(&mut grid, 2, &mut rng), Some(Position::new(1, 0)));
        assert!(grid.is_full());
        assert_eq!(grid.to_rows(), vec![vec![2, 4], vec![2, 16]]);
    }

    #[test]
    fn test_never_overwrites() {
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            let mut grid = Grid::from_rows(vec![
                vec![4, 0, 8, 0],
                vec![0, 16, 0, 32],
                vec![64, 0, 128, 0],
                vec![0, 256, 0, 512],
            ])
            .unwrap();
            let before = grid.clone();
            let pos = spawn(&mut grid, 2, &mut rng).unwrap();

            assert_eq!(before[pos], 0);
            assert_eq!(grid[pos], 2);
            for other in before.positions().filter(|&p| p != pos) {
                assert_eq!(grid[other], before[other]);
            }
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        let mut rng_a = GameRng::new(99);
        let mut rng_b = GameRng::new(99);

        for _ in 0..8 {
            assert_eq!(spawn(&mut a, 2, &mut rng_a), spawn(&mut b, 2, &mut rng_b));
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_over_empty_cells() {
        const TRIALS: usize = 16_000;
        let mut rng = GameRng::new(2048);
        let mut counts = [0usize; 16];

        for _ in 0..TRIALS {
            let mut grid = Grid::new();
            let pos = spawn(&mut grid, 2, &mut rng).unwrap();
            counts[pos.row * 4 + pos.col] += 1;
        }

        // Expected 1000 per cell; allow a wide band against seed luck.
        for (cell, &count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(&count),
                "cell {cell} hit {count} times"
            );
        }
    }
}
