use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{Board, GameState, SimpleRng};
use tui_2048::types::Direction;

fn mixed_board() -> Board {
    Board::from_cells([
        [2, 2, 4, 4],
        [8, 0, 8, 0],
        [16, 16, 2, 2],
        [0, 4, 0, 4],
    ])
    .unwrap()
}

fn bench_slide(c: &mut Criterion) {
    c.bench_function("slide_left", |b| {
        b.iter(|| {
            let mut board = mixed_board();
            board.slide(black_box(Direction::Left))
        })
    });

    c.bench_function("slide_down", |b| {
        b.iter(|| {
            let mut board = mixed_board();
            board.slide(black_box(Direction::Down))
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("spawn_random_tile", |b| {
        b.iter(|| {
            let mut board = mixed_board();
            board.spawn_random_tile(&mut rng)
        })
    });
}

fn bench_game_over_scan(c: &mut Criterion) {
    let board = mixed_board();
    c.bench_function("is_game_over", |b| b.iter(|| black_box(&board).is_game_over()));
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("apply_move_turn", |b| {
        let mut game = GameState::new(12345);
        b.iter(|| {
            for direction in Direction::all() {
                if game.apply_move(black_box(direction)).changed {
                    break;
                }
            }
            if game.status().is_over() {
                game.reset(12345);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_slide,
    bench_spawn,
    bench_game_over_scan,
    bench_full_turn
);
criterion_main!(benches);
