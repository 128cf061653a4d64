//! Benchmarks for synthesizing complete preset voices.
//!
//! Each iteration renders the whole one-shot, which is what a parameter
//! change costs on the next note-on.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use drumvoice::{
    dsp::mix::WriteMode,
    synth::{VoiceGenerator, WaveProducer},
    voices, MAX_HIT_LENGTH_SAMPLES,
};

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let mut scratch = vec![0.0f32; MAX_HIT_LENGTH_SAMPLES];

    for &name in voices::NAMES {
        let Some(config) = voices::by_name(name) else {
            continue;
        };
        let voice = VoiceGenerator::new(&config);
        let length = voice.length_samples(SAMPLE_RATE).min(scratch.len());

        group.bench_with_input(BenchmarkId::new("synthesize", name), &length, |b, &length| {
            b.iter(|| {
                voice.render(
                    black_box(&mut scratch[..length]),
                    SAMPLE_RATE,
                    0,
                    WriteMode::Replace,
                );
            })
        });
    }

    group.finish();
}
