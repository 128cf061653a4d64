#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{
        envelope::{Curve, Envelope},
        oscillator::OscillatorWaveform,
    },
    error::ConfigError,
};

/// A complete drum sound: oscillator layers in mixing order.
///
/// The first layer establishes the signal, every later layer is added on
/// top of it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceConfig {
    pub name: String,
    pub oscillators: Vec<OscillatorConfig>,
}

/// One layer of a voice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorConfig {
    pub waveform: OscillatorWaveform,
    /// Base frequency in Hz.
    pub frequency: f32,
    /// Linear gain.
    pub volume: f32,
    /// Pitch offset in semitones when the pitch envelope is at 1.0.
    pub pitch_env_semitones: f32,
    pub volume_envelope: Envelope,
    pub pitch_envelope: Envelope,
}

impl VoiceConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            oscillators: Vec::new(),
        }
    }

    pub fn layer(mut self, oscillator: OscillatorConfig) -> Self {
        self.oscillators.push(oscillator);
        self
    }

    /// Check every layer; the first problem found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.oscillators.is_empty() {
            return Err(ConfigError::EmptyVoice);
        }

        for (index, oscillator) in self.oscillators.iter().enumerate() {
            oscillator.validate(index)?;
        }

        Ok(())
    }
}

impl OscillatorConfig {
    /// A sine layer with a short percussive decay and no pitch sweep.
    pub fn new(frequency: f32, volume: f32) -> Self {
        Self {
            waveform: OscillatorWaveform::Sine,
            frequency,
            volume,
            pitch_env_semitones: 0.0,
            volume_envelope: Envelope::default(),
            pitch_envelope: Envelope::silent(),
        }
    }

    pub fn with_waveform(mut self, waveform: OscillatorWaveform) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn with_volume_envelope(mut self, envelope: Envelope) -> Self {
        self.volume_envelope = envelope;
        self
    }

    /// Sweep the pitch by up to `semitones`, scaled by `envelope`.
    pub fn with_pitch_envelope(mut self, envelope: Envelope, semitones: f32) -> Self {
        self.pitch_envelope = envelope;
        self.pitch_env_semitones = semitones;
        self
    }

    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(ConfigError::InvalidFrequency {
                index,
                value: self.frequency,
            });
        }
        if !self.volume.is_finite() {
            return Err(ConfigError::InvalidVolume {
                index,
                value: self.volume,
            });
        }
        if !self.pitch_env_semitones.is_finite() {
            return Err(ConfigError::InvalidPitchDepth {
                index,
                value: self.pitch_env_semitones,
            });
        }

        validate_envelope(index, "volume envelope", &self.volume_envelope)?;
        validate_envelope(index, "pitch envelope", &self.pitch_envelope)
    }
}

fn validate_envelope(index: usize, envelope: &'static str, env: &Envelope) -> Result<(), ConfigError> {
    let durations = [
        ("attack time", env.attack_time),
        ("decay time", env.decay_time),
        ("sustain time", env.sustain_time),
        ("release time", env.release_time),
    ];
    for (field, value) in durations {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::InvalidDuration {
                index,
                envelope,
                field,
                value,
            });
        }
    }

    if !(0.0..=1.0).contains(&env.sustain_level) {
        return Err(ConfigError::InvalidSustainLevel {
            index,
            envelope,
            value: env.sustain_level,
        });
    }

    let curves = [
        ("attack", env.attack_curve),
        ("decay", env.decay_curve),
        ("release", env.release_curve),
    ];
    for (phase, curve) in curves {
        validate_curve(index, envelope, phase, curve)?;
    }

    Ok(())
}

fn validate_curve(
    index: usize,
    envelope: &'static str,
    phase: &'static str,
    curve: Curve,
) -> Result<(), ConfigError> {
    if !(curve.power.is_finite() && curve.power > 0.0) {
        return Err(ConfigError::InvalidCurvePower {
            index,
            envelope,
            phase,
            value: curve.power,
        });
    }
    if !(0.0..=1.0).contains(&curve.ratio) {
        return Err(ConfigError::InvalidCurveRatio {
            index,
            envelope,
            phase,
            value: curve.ratio,
        });
    }
    Ok(())
}
