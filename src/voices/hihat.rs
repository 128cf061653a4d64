//! Hi-hat voice (closed).
//!
//! A tight, short burst of noise. Closed hi-hats are the backbone of most
//! drum patterns.
//!
//! # How It Works
//!
//! 1. Noise provides the metallic character
//! 2. A quiet square an octave-ish above adds a little ring
//! 3. Very short envelope for the tight "tss"
//!
//! # Variations
//!
//! - Longer release = open hi-hat
//! - Drop the square layer = softer, shaker-like hat

use crate::{
    dsp::{
        envelope::{Curve, Envelope},
        oscillator::OscillatorWaveform,
    },
    patch::{OscillatorConfig, VoiceConfig},
};

/// Create a closed hi-hat voice.
pub fn hihat() -> VoiceConfig {
    let fast = Envelope::adsr(0.0005, 0.04, 0.0, 0.0, 0.02).with_curves(
        Curve::LINEAR,
        Curve::new(3.0, 1.0),
        Curve::LINEAR,
    );

    let noise = OscillatorConfig::new(1.0, 0.6)
        .with_waveform(OscillatorWaveform::Noise)
        .with_volume_envelope(fast);

    let ring = OscillatorConfig::new(8_000.0, 0.08)
        .with_waveform(OscillatorWaveform::Square)
        .with_volume_envelope(fast);

    VoiceConfig::new("hihat").layer(noise).layer(ring)
}
