use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rust_2048::core::{Direction, GameRng, Grid};
use rust_2048::engine::{is_game_over, process_row, slide, spawn};
use rust_2048::Session;
use std::hint::black_box;

/// Grids of increasing density from one seeded game.
fn corpus() -> Vec<Grid> {
    let mut session = Session::classic(42);
    let mut grids = vec![Grid::new(), session.grid().clone()];
    for i in 0..200 {
        if session.is_over() {
            break;
        }
        let _ = session.play(Direction::ALL[i % 4]);
        grids.push(session.grid().clone());
    }
    grids
}

fn bench_slide(c: &mut Criterion) {
    let grids = corpus();
    for direction in Direction::ALL {
        c.bench_function(&format!("slide/{direction}"), |bch| {
            bch.iter(|| {
                let mut acc = 0u64;
                for g in &grids {
                    acc = acc.wrapping_add(slide(g, direction).score);
                }
                black_box(acc)
            })
        });
    }
    c.bench_function("row/process", |bch| {
        let rows: Vec<[u32; 4]> = vec![[2, 2, 2, 2], [2, 0, 2, 0], [4, 0, 0, 4], [8, 8, 16, 16]];
        bch.iter(|| {
            let mut acc = 0u64;
            for row in &rows {
                acc = acc.wrapping_add(process_row(black_box(row)).score);
            }
            black_box(acc)
        })
    });
}

fn bench_spawn_and_terminal(c: &mut Criterion) {
    c.bench_function("spawn/fill_board", |bch| {
        bch.iter_batched(
            || (Grid::new(), GameRng::new(7)),
            |(mut g, mut rng)| {
                while spawn(&mut g, 2, &mut rng).is_some() {}
                black_box(g)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("terminal/is_game_over", |bch| {
        let grids = corpus();
        bch.iter(|| {
            let mut over = 0usize;
            for g in &grids {
                over += usize::from(is_game_over(g));
            }
            black_box(over)
        })
    });
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("session/play_to_end", |bch| {
        bch.iter_batched(
            || Session::classic(11),
            |mut session| {
                let mut i = 0;
                while !session.is_over() {
                    let _ = session.play(Direction::ALL[i % 4]);
                    i += 1;
                }
                black_box(session.score())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(engine_ops, bench_slide, bench_spawn_and_terminal, bench_session);
criterion_main!(engine_ops);
