//! Cowbell voice.
//!
//! Two detuned squares at the classic 540/800 Hz pair, with a short decay
//! into a quieter tail.

use crate::{
    dsp::{envelope::Envelope, oscillator::OscillatorWaveform},
    patch::{OscillatorConfig, VoiceConfig},
};

/// Create a cowbell voice.
pub fn cowbell() -> VoiceConfig {
    let envelope = Envelope::adsr(0.001, 0.03, 0.3, 0.02, 0.2);

    let low = OscillatorConfig::new(540.0, 0.35)
        .with_waveform(OscillatorWaveform::Square)
        .with_volume_envelope(envelope);
    let high = OscillatorConfig::new(800.0, 0.35)
        .with_waveform(OscillatorWaveform::Square)
        .with_volume_envelope(envelope);

    VoiceConfig::new("cowbell").layer(low).layer(high)
}
