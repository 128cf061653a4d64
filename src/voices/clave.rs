//! Clave voice: a very short, high sine click.

use crate::{
    dsp::envelope::Envelope,
    patch::{OscillatorConfig, VoiceConfig},
};

/// Create a clave voice.
pub fn clave() -> VoiceConfig {
    let click = OscillatorConfig::new(2_500.0, 0.8)
        .with_volume_envelope(Envelope::adsr(0.0, 0.025, 0.0, 0.0, 0.01));

    VoiceConfig::new("clave").layer(click)
}
