//! Benchmarks for one-shot oscillator rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use drumvoice::{
    dsp::{envelope::Envelope, mix::WriteMode, oscillator::OscillatorWaveform},
    patch::OscillatorConfig,
    synth::{OneShotOscillator, WaveProducer},
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for waveform in [
            OscillatorWaveform::Sine,
            OscillatorWaveform::Saw,
            OscillatorWaveform::Noise,
        ] {
            let config = OscillatorConfig::new(110.0, 1.0)
                .with_waveform(waveform)
                .with_volume_envelope(Envelope::adsr(0.001, 0.2, 0.0, 0.0, 0.05));
            let osc = OneShotOscillator::new(&config);

            group.bench_with_input(BenchmarkId::new(waveform.name(), size), &size, |b, _| {
                b.iter(|| {
                    osc.render(black_box(&mut buffer), SAMPLE_RATE, 0, WriteMode::Replace);
                })
            });
        }

        // Pitch sweep adds an envelope evaluation and exp2 per sample
        let swept = OscillatorConfig::new(50.0, 1.0)
            .with_volume_envelope(Envelope::adsr(0.001, 0.2, 0.0, 0.0, 0.05))
            .with_pitch_envelope(Envelope::adsr(0.0, 0.04, 0.0, 0.0, 0.0), 19.0);
        let osc = OneShotOscillator::new(&swept);
        group.bench_with_input(BenchmarkId::new("sine_pitch_sweep", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), SAMPLE_RATE, 0, WriteMode::Replace);
            })
        });
    }

    group.finish();
}
