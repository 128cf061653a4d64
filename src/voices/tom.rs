//! Tom drum voice.
//!
//! A pitched drum similar to the kick but higher. The pitch sweep gives the
//! tom its "boing".
//!
//! # How It Works
//!
//! 1. Sine oscillator at 150 Hz
//! 2. Pitch envelope starts ~15 semitones up (~350 Hz), falls over ~60 ms
//! 3. Volume envelope with instant attack, medium decay
//!
//! # Variations
//!
//! - Higher base frequency (200-300 Hz) = high tom
//! - Lower base frequency (100-150 Hz) = floor tom
//! - Longer decay = more resonant, tribal feel

use crate::{
    dsp::envelope::Envelope,
    patch::{OscillatorConfig, VoiceConfig},
};

/// Create a tom drum voice.
pub fn tom() -> VoiceConfig {
    let body = OscillatorConfig::new(150.0, 1.0)
        .with_volume_envelope(Envelope::adsr(0.001, 0.12, 0.0, 0.0, 0.05))
        .with_pitch_envelope(Envelope::adsr(0.0, 0.06, 0.0, 0.0, 0.0), 14.7);

    VoiceConfig::new("tom").layer(body)
}
