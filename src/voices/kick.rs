//! Kick drum voice.
//!
//! A sine body whose pitch starts high and falls to the fundamental within a
//! few tens of milliseconds, giving the electronic kick its "punch".
//!
//! # How It Works
//!
//! 1. Sine oscillator at 50 Hz provides the body
//! 2. Pitch envelope lifts the start by 19 semitones (~150 Hz) and drops
//!    back over ~40 ms
//! 3. Volume envelope with instant attack and a curved decay
//!
//! # Variations
//!
//! - Longer decay = boomy 808-style kick
//! - More semitones = more "click" on the attack
//! - Layer a short noise burst = more acoustic character

use crate::{
    dsp::envelope::{Curve, Envelope},
    patch::{OscillatorConfig, VoiceConfig},
};

/// Create a kick drum voice.
///
/// The note pitch is ignored; kicks are tuned by the voice itself.
pub fn kick() -> VoiceConfig {
    let pitch_env = Envelope::adsr(0.0, 0.04, 0.0, 0.0, 0.0)
        .with_curves(Curve::LINEAR, Curve::new(3.0, 1.0), Curve::LINEAR);

    let body = OscillatorConfig::new(50.0, 1.0)
        .with_volume_envelope(
            Envelope::adsr(0.001, 0.25, 0.0, 0.0, 0.05)
                .with_curves(Curve::LINEAR, Curve::new(2.0, 0.7), Curve::LINEAR),
        )
        .with_pitch_envelope(pitch_env, 19.0);

    VoiceConfig::new("kick").layer(body)
}
