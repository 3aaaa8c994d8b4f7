//! Property tests over arbitrary grids and rows.

use proptest::prelude::*;

use rust_2048::core::{Direction, GameRng, Grid, MAX_TILE};
use rust_2048::engine::{is_game_over, process_row, rotate, slide, spawn};
use rust_2048::games::classic::ClassicGame;
use rust_2048::rules::RulesEngine;

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        4 => (1u32..=11).prop_map(|exp| 1 << exp),
        1 => (27u32..=30).prop_map(|exp| 1 << exp),
    ]
}

fn grid_of(size: usize) -> impl Strategy<Value = Grid> {
    prop::collection::vec(tile(), size * size).prop_map(move |cells| {
        let rows = cells.chunks(size).map(<[u32]>::to_vec).collect();
        Grid::from_rows(rows).unwrap()
    })
}

fn any_grid() -> impl Strategy<Value = Grid> {
    (1usize..=6).prop_flat_map(grid_of)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn rotation_inverse(g in any_grid(), k in -8i32..8) {
        prop_assert_eq!(rotate(&rotate(&g, k), -k), g.clone());
        prop_assert_eq!(rotate(&rotate(&rotate(&rotate(&g, 1), 1), 1), 1), g);
    }

    #[test]
    fn row_conserves_sum_and_never_adds_tiles(row in prop::collection::vec(tile(), 1..8)) {
        let out = process_row(&row);
        let nonzero = |cells: &[u32]| cells.iter().filter(|&&v| v != 0).count();

        prop_assert_eq!(out.cells.len(), row.len());
        let sum = |cells: &[u32]| cells.iter().map(|&v| u64::from(v)).sum::<u64>();
        prop_assert_eq!(sum(&out.cells), sum(&row));
        prop_assert!(out.cells.iter().all(|&v| v <= MAX_TILE));
        prop_assert!(nonzero(&out.cells) <= nonzero(&row));

        // Compacted: no tile after the first gap
        let first_gap = out.cells.iter().position(|&v| v == 0).unwrap_or(out.cells.len());
        prop_assert!(out.cells[first_gap..].iter().all(|&v| v == 0));

        // Each merge removes one tile and scores its result
        let merges = nonzero(&row) - nonzero(&out.cells);
        prop_assert_eq!(merges == 0, out.score == 0);
    }

    #[test]
    fn slide_conserves_sum(g in any_grid(), d in direction()) {
        let out = slide(&g, d);
        prop_assert_eq!(out.grid.sum(), g.sum());
        prop_assert_eq!(out.changed, out.grid != g);
        prop_assert!(out.grid.tile_count() <= g.tile_count());
    }

    #[test]
    fn settled_slide_is_idempotent(g in any_grid(), d in direction()) {
        let mut current = slide(&g, d);
        while current.changed {
            current = slide(&current.grid, d);
        }
        let again = slide(&current.grid, d);
        prop_assert!(!again.changed);
        prop_assert!(again.movements.is_empty());
        prop_assert_eq!(again.grid, current.grid);
    }

    #[test]
    fn movements_replay_to_result(g in any_grid(), d in direction()) {
        let out = slide(&g, d);
        let size = g.size();
        let mut landed = vec![0u64; size * size];
        for pos in g.positions().filter(|&p| g[p] != 0) {
            let dest = out.movements.iter().find(|m| m.from == pos).map_or(pos, |m| m.to);
            landed[dest.row * size + dest.col] += u64::from(g[pos]);
        }
        let cells: Vec<u64> = out.grid.cells().iter().map(|&v| u64::from(v)).collect();
        prop_assert_eq!(landed, cells);

        for m in &out.movements {
            prop_assert!(m.from != m.to);
            prop_assert!(m.from.row == m.to.row || m.from.col == m.to.col);
        }
    }

    #[test]
    fn static_terminal_check_matches_legal_moves(g in any_grid()) {
        // An all-empty board can't move either, but play never reaches one
        prop_assume!(g.tile_count() > 0);
        let rules = ClassicGame::default();
        prop_assert_eq!(is_game_over(&g), rules.legal_moves(&g).is_empty());
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell(g in any_grid(), seed in any::<u64>()) {
        let mut after = g.clone();
        let mut rng = GameRng::new(seed);
        match spawn(&mut after, 2, &mut rng) {
            Some(pos) => {
                prop_assert_eq!(g[pos], 0);
                prop_assert_eq!(after[pos], 2);
                prop_assert_eq!(after.tile_count(), g.tile_count() + 1);
                for other in g.positions().filter(|&p| p != pos) {
                    prop_assert_eq!(after[other], g[other]);
                }
            }
            None => {
                prop_assert!(g.is_full());
                prop_assert_eq!(after, g);
            }
        }
    }
}
