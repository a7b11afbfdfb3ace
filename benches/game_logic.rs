use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dino::core::{sprites_overlap, GameState, CACTUS, DINO};
use tui_dino::term::{FrameBuffer, GameView};
use tui_dino::types::{DINO_COLUMN, GRID_HEIGHT, GRID_WIDTH, GROUND_REST_Y, OBSTACLE_ROW};

fn bench_update(c: &mut Criterion) {
    c.bench_function("update_tick", |b| {
        let mut state = GameState::new();
        b.iter(|| {
            if !state.running() {
                state = GameState::new();
            }
            if !state.dino().is_jumping() {
                state.request_jump();
            }
            state.update();
            black_box(state.obstacle().x());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    c.bench_function("sprites_overlap_hit", |b| {
        b.iter(|| {
            sprites_overlap(
                black_box(DINO.frame(0)),
                DINO_COLUMN,
                GROUND_REST_Y,
                &CACTUS,
                black_box(DINO_COLUMN + 2),
                OBSTACLE_ROW,
            )
        })
    });

    c.bench_function("sprites_overlap_disjoint", |b| {
        b.iter(|| {
            sprites_overlap(
                black_box(DINO.frame(0)),
                DINO_COLUMN,
                GROUND_REST_Y,
                &CACTUS,
                black_box(40),
                OBSTACLE_ROW,
            )
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let view = GameView::default();
    let snap = GameState::new().snapshot();
    let mut fb = FrameBuffer::new(GRID_WIDTH, GRID_HEIGHT);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &mut fb);
        })
    });
}

criterion_group!(benches, bench_update, bench_collision, bench_render);
criterion_main!(benches);
