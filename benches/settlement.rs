use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_crash::core::{GameRng, SessionConfig};
use rust_crash::session::Session;
use rust_crash::settlement::settle;

fn settle_full_table(c: &mut Criterion) {
    let config = SessionConfig::default().with_synthetic_count(254);
    let mut session = Session::with_source(config, GameRng::new(7)).unwrap();
    session.start_round(50, 2.0).unwrap();
    let roster = session.participants().clone();

    c.bench_function("settle_255_participants", |b| {
        b.iter(|| settle(black_box(&roster), black_box(3.0)))
    });
}

fn play_round(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default()).unwrap();

    c.bench_function("start_stop_round", |b| {
        b.iter(|| {
            session.start_round(1, 2.0).unwrap();
            session.stop_round(black_box(3.0)).unwrap()
        })
    });
}

criterion_group!(benches, settle_full_table, play_round);
criterion_main!(benches);
