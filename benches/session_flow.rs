// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use quiz_rush::application::port::NoCelebration;
use quiz_rush::application::session::manual::ManualScheduler;
use quiz_rush::application::session::{SessionConfig, SessionController};
use quiz_rush::infrastructure::questions;
use std::hint::black_box;

fn session_flow_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_flow");
    let set = questions::load_embedded().expect("embedded questions are valid");

    group.bench_function("parse_embedded_questions", |b| {
        b.iter(|| black_box(questions::load_embedded()));
    });

    group.bench_function("answer_every_question", |b| {
        b.iter(|| {
            let mut session = SessionController::with_questions(
                SessionConfig::default(),
                set.clone(),
                ManualScheduler::default(),
                NoCelebration,
            );
            session.set_name("bench");
            let _ = session.start();
            session.run_ticks(session.config().countdown.value());
            while session.stage() == quiz_rush::domain::quiz::Stage::Active {
                session.submit_answer(0);
                session.advance();
            }
            black_box(session.score())
        });
    });

    group.bench_function("time_out_every_question", |b| {
        b.iter(|| {
            let mut session = SessionController::with_questions(
                SessionConfig::default(),
                set.clone(),
                ManualScheduler::default(),
                NoCelebration,
            );
            session.set_name("bench");
            let _ = session.start();
            let config = session.config();
            let total = config.countdown.value()
                + config.question_time.value() * set.len() as u32;
            session.run_ticks(total);
            black_box(session.stage())
        });
    });

    group.finish();
}

criterion_group!(benches, session_flow_benchmark);
criterion_main!(benches);
