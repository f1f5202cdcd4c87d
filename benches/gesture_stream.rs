// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Radians, Vector};
use pinch_lens::ui::state::transform::Message;
use pinch_lens::ui::state::TransformController;
use std::hint::black_box;

/// Samples delivered by a one-second gesture at 120 Hz.
const SAMPLES: usize = 120;

fn gesture_stream_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_stream");

    group.bench_function("pinch_out_and_settle", |b| {
        b.iter(|| {
            let mut transform = TransformController::new();
            for i in 0..SAMPLES {
                let value = 1.0 + i as f32 * 0.05;
                black_box(transform.handle(Message::Magnify(black_box(value))));
            }
            black_box(transform.handle(Message::MagnifyEnded))
        });
    });

    group.bench_function("pan_zoomed_page", |b| {
        b.iter(|| {
            let mut transform = TransformController::new();
            transform.handle(Message::DoubleTap);
            for i in 0..SAMPLES {
                let step = i as f32;
                black_box(transform.handle(Message::Pan(Vector::new(step, -step))));
            }
            black_box(transform.handle(Message::PanEnded))
        });
    });

    group.bench_function("rotate_and_spring_back", |b| {
        b.iter(|| {
            let mut transform = TransformController::new();
            for i in 0..SAMPLES {
                black_box(transform.handle(Message::Rotate(Radians(i as f32 * 0.01))));
            }
            black_box(transform.handle(Message::RotateEnded))
        });
    });

    group.finish();
}

criterion_group!(benches, gesture_stream_benchmark);
criterion_main!(benches);
