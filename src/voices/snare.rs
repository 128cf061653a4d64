//! Snare drum voice.
//!
//! A tonal body layered with noise for the rattle of the snare wires.
//!
//! # How It Works
//!
//! 1. Triangle wave at 180 Hz provides the drum head
//! 2. Noise layer, louder and a little longer, provides the rattle
//! 3. Both decay quickly with no sustain
//!
//! # Variations
//!
//! - More noise = trashy, lo-fi snare
//! - Less noise = more "tom" like
//! - Longer noise decay = looser snare

use crate::{
    dsp::{envelope::Envelope, oscillator::OscillatorWaveform},
    patch::{OscillatorConfig, VoiceConfig},
};

/// Create a snare drum voice.
pub fn snare() -> VoiceConfig {
    let body = OscillatorConfig::new(180.0, 0.5)
        .with_waveform(OscillatorWaveform::Triangle)
        .with_volume_envelope(Envelope::adsr(0.001, 0.08, 0.0, 0.0, 0.05))
        .with_pitch_envelope(Envelope::adsr(0.0, 0.02, 0.0, 0.0, 0.0), 5.0);

    let rattle = OscillatorConfig::new(1.0, 0.7)
        .with_waveform(OscillatorWaveform::Noise)
        .with_volume_envelope(Envelope::adsr(0.001, 0.12, 0.0, 0.0, 0.08));

    VoiceConfig::new("snare").layer(body).layer(rattle)
}
