//! Benchmarks for the ADSR envelope evaluated at elapsed time.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use drumvoice::dsp::envelope::{Curve, Envelope};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn fill(envelope: &Envelope, buffer: &mut [f32], offset: f32) {
    for (n, out) in buffer.iter_mut().enumerate() {
        *out = envelope.value_at(offset + n as f32 / SAMPLE_RATE);
    }
}

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Attack phase (ramping up)
        let linear = Envelope::adsr(0.1, 0.1, 0.7, 0.2, 0.3);
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| fill(black_box(&linear), black_box(&mut buffer), 0.0))
        });

        // Sustain phase (holding steady)
        group.bench_with_input(BenchmarkId::new("sustain", size), &size, |b, _| {
            b.iter(|| fill(black_box(&linear), black_box(&mut buffer), 0.25))
        });

        // Curved release, the powf path
        let curved = linear.with_curves(
            Curve::new(0.5, 1.0),
            Curve::new(3.0, 0.8),
            Curve::new(2.5, 0.6),
        );
        group.bench_with_input(BenchmarkId::new("curved_release", size), &size, |b, _| {
            b.iter(|| fill(black_box(&curved), black_box(&mut buffer), 0.45))
        });
    }

    group.finish();
}
