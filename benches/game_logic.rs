use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_rules::core::{
    check_collision, clear_lines, hard_drop_position, random_tetromino, Board, SimpleRng,
    Tetromino,
};
use tetris_rules::engine::{GameAction, GameState};
use tetris_rules::types::{Cell, Color, PieceKind, Position};

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    // Fill bottom 4 rows
    for y in 16..20 {
        for x in 0..10 {
            board = board.with_cell(x, y, Cell::Filled(Color::CYAN));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| clear_lines(black_box(&board)))
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::new().with_cell(5, 10, Cell::Filled(Color::RED));
    let piece = Tetromino::new(PieceKind::T).with_position(Position::new(4, 9));

    c.bench_function("check_collision", |b| {
        b.iter(|| check_collision(black_box(&board), black_box(&piece)))
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_piece", |b| b.iter(|| random_tetromino(&mut rng)));
}

fn bench_hard_drop(c: &mut Criterion) {
    let board = Board::new();
    let piece = Tetromino::new(PieceKind::I);

    c.bench_function("hard_drop_position", |b| {
        b.iter(|| hard_drop_position(black_box(&board), black_box(&piece)))
    });
}

fn bench_game_step(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut state = GameState::new(&mut rng);

    c.bench_function("apply_hard_drop", |b| {
        b.iter(|| {
            state = if state.game_over() {
                state.apply_action(GameAction::Restart, &mut rng)
            } else {
                state.apply_action(GameAction::HardDrop, &mut rng)
            };
        })
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_collision,
    bench_piece_spawn,
    bench_hard_drop,
    bench_game_step
);
criterion_main!(benches);
