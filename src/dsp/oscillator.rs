#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::TAU;

/*
Waveforms
=========

Every waveform here is a pure function. Periodic shapes read the accumulated
phase (in cycles, so 1.0 is one full period); noise reads the sample index.
No oscillator keeps hidden state, which keeps a rendered hit reproducible:
the same configuration always yields the same samples.

  Sine      phase → sin(2π·phase). The default: a clean drum body.
  Triangle  odd harmonics falling off as 1/n². Softer than square.
  Saw       every harmonic. Bright, buzzy.
  Square    odd harmonics falling off as 1/n. Hollow.
  Noise     white noise from an integer hash of the sample index. Drives
            snares, hats and claps while staying deterministic.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OscillatorWaveform {
    #[default]
    Sine,
    Triangle,
    Saw,
    Square,
    Noise,
}

impl OscillatorWaveform {
    pub const NAMES: &'static [&'static str] = &["sine", "triangle", "saw", "square", "noise"];

    pub fn name(&self) -> &'static str {
        match self {
            OscillatorWaveform::Sine => "sine",
            OscillatorWaveform::Triangle => "triangle",
            OscillatorWaveform::Saw => "saw",
            OscillatorWaveform::Square => "square",
            OscillatorWaveform::Noise => "noise",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sine" => Some(OscillatorWaveform::Sine),
            "triangle" => Some(OscillatorWaveform::Triangle),
            "saw" => Some(OscillatorWaveform::Saw),
            "square" => Some(OscillatorWaveform::Square),
            "noise" => Some(OscillatorWaveform::Noise),
            _ => None,
        }
    }

    /// Sample the waveform at `phase` cycles; `index` feeds the noise source.
    #[inline]
    pub fn sample(&self, phase: f32, index: usize) -> f32 {
        let p = phase - phase.floor();
        match self {
            OscillatorWaveform::Sine => (TAU * p).sin(),
            OscillatorWaveform::Triangle => 1.0 - 4.0 * (p - 0.5).abs(),
            OscillatorWaveform::Saw => 2.0 * p - 1.0,
            OscillatorWaveform::Square => {
                if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            OscillatorWaveform::Noise => hash_noise(index),
        }
    }
}

/// Uniform noise in [-1, 1) from a 32-bit integer hash.
#[inline]
fn hash_noise(index: usize) -> f32 {
    let mut x = (index as u32).wrapping_mul(0x9E37_79B9) ^ 0x85EB_CA6B;
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^= x >> 16;
    (x >> 8) as f32 / (1u32 << 23) as f32 - 1.0
}
