use criterion::{black_box, criterion_group, criterion_main, Criterion};
use web_tetris::core::{Board, Engine, EngineConfig, Glyphs};
use web_tetris::types::PieceKind;

fn engine() -> Engine {
    Engine::new(EngineConfig::default().with_seed(12345))
}

fn bench_tick(c: &mut Criterion) {
    let mut game = engine();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !game.tick() {
                game.reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let config = EngineConfig::default().with_seed(12345);

    c.bench_function("new_session", |b| {
        b.iter(|| black_box(Engine::new(black_box(config))))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = engine();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            game.move_left();
            game.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = engine();
    game.tick();
    game.tick();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(game.rotate());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = engine();
    for _ in 0..40 {
        game.tick();
    }

    c.bench_function("render_emoji", |b| {
        b.iter(|| black_box(game.render(&Glyphs::EMOJI)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
