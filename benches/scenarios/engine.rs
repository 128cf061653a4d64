//! Benchmarks for the per-block render cycle.
//!
//! A hi-hat on every 8th of a block keeps several hits overlapping, so each
//! block patches new hits and carries older ones.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use drumvoice::{
    io::{AudioOutput, TimeInterval},
    synth::message::Event,
    voices, DrumSynth, EngineConfig,
};

use crate::BLOCK_SIZES;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        let mut engine = match DrumSynth::new(
            EngineConfig::default().with_sample_rate(48_000),
            voices::hihat(),
        ) {
            Ok(engine) => engine,
            Err(_) => continue,
        };
        engine.warm_cache();

        let mut output = AudioOutput::new(2, size);
        let mut interval = TimeInterval::new(0, size);
        let mut events = Vec::with_capacity(8);

        group.bench_with_input(BenchmarkId::new("hihat_roll", size), &size, |b, &size| {
            b.iter(|| {
                events.clear();
                for step in 0..8 {
                    let position = interval.start_sample + (step * size / 8) as u64;
                    events.push(Event::note_on(position, 42, 100));
                }

                output.clear();
                let summary = engine.render(
                    &interval,
                    &[] as &[Vec<f32>],
                    output.buffers.as_mut_slice(),
                    &[&events[..]],
                    &mut [],
                );
                interval = interval.next();
                black_box(summary)
            })
        });
    }

    group.finish();
}
