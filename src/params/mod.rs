//! Parameter storage for a drum voice.
//!
//! Every field of a [`VoiceConfig`] that can change at runtime is exposed as
//! a named parameter with a declared range:
//!
//! ```text
//! osc{N}.frequency                     float  1 - 20000 Hz
//! osc{N}.volume                        float  0 - 4
//! osc{N}.waveform                      enum   sine | triangle | saw | square | noise
//! osc{N}.pitch_env_semitones           float  -48 - 48
//! osc{N}.{env}.attack_time             float  0 - 10 s
//! osc{N}.{env}.decay_time              float  0 - 10 s
//! osc{N}.{env}.sustain_level           float  0 - 1
//! osc{N}.{env}.sustain_time            float  0 - 10 s
//! osc{N}.{env}.release_time            float  0 - 10 s
//! osc{N}.{env}.{phase}_curve_power     float  0.01 - 16
//! osc{N}.{env}.{phase}_curve_ratio     float  0 - 1
//! ```
//!
//! where `{env}` is `volume_env` or `pitch_env` and `{phase}` is `attack`,
//! `decay` or `release`. Rejected writes leave the stored voice untouched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::{
    dsp::{
        envelope::{Curve, Envelope},
        oscillator::OscillatorWaveform,
    },
    error::{ConfigError, ParameterError},
    patch::{OscillatorConfig, VoiceConfig},
};

/// A value carried by a parameter change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Float(f32),
    Enum(String),
}

impl From<f32> for ParameterValue {
    fn from(value: f32) -> Self {
        ParameterValue::Float(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Float(value as f32)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Enum(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Enum(value)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Float(v) => write!(f, "{v}"),
            ParameterValue::Enum(v) => write!(f, "{v}"),
        }
    }
}

/// The values a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterRange {
    Float { min: f32, max: f32 },
    Enum(&'static [&'static str]),
}

impl ParameterRange {
    pub fn check(&self, id: &str, value: &ParameterValue) -> Result<(), ParameterError> {
        match (self, value) {
            (ParameterRange::Float { min, max }, ParameterValue::Float(v)) => {
                if (*min..=*max).contains(v) {
                    Ok(())
                } else {
                    Err(ParameterError::OutOfRange {
                        id: id.to_string(),
                        value: *v,
                        min: *min,
                        max: *max,
                    })
                }
            }
            (ParameterRange::Enum(options), ParameterValue::Enum(v)) => {
                if options.contains(&v.as_str()) {
                    Ok(())
                } else {
                    Err(ParameterError::NotAnOption {
                        id: id.to_string(),
                        value: v.clone(),
                        options: options.join(", "),
                    })
                }
            }
            (ParameterRange::Float { .. }, ParameterValue::Enum(_)) => Err(ParameterError::WrongKind {
                id: id.to_string(),
                expected: "float",
            }),
            (ParameterRange::Enum(_), ParameterValue::Float(_)) => Err(ParameterError::WrongKind {
                id: id.to_string(),
                expected: "enum",
            }),
        }
    }
}

/// A named parameter and its range.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: String,
    pub range: ParameterRange,
}

/// Where the engine sends parameter changes and reads the voice from.
pub trait ParameterStore: Send {
    /// Validate and store one value. On error nothing changes.
    fn set_parameter_value(&mut self, id: &str, value: &ParameterValue) -> Result<(), ParameterError>;

    /// The voice as currently parameterised.
    fn voice_config(&self) -> &VoiceConfig;
}

const TIME_RANGE: ParameterRange = ParameterRange::Float { min: 0.0, max: 10.0 };
const UNIT_RANGE: ParameterRange = ParameterRange::Float { min: 0.0, max: 1.0 };
const POWER_RANGE: ParameterRange = ParameterRange::Float {
    min: 0.01,
    max: 16.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeKind {
    Volume,
    Pitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurvePhase {
    Attack,
    Decay,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeField {
    AttackTime,
    DecayTime,
    SustainLevel,
    SustainTime,
    ReleaseTime,
    CurvePower(CurvePhase),
    CurveRatio(CurvePhase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Frequency,
    Volume,
    Waveform,
    PitchDepth,
    Envelope(EnvelopeKind, EnvelopeField),
}

const ENVELOPE_FIELDS: [(&str, EnvelopeField); 11] = [
    ("attack_time", EnvelopeField::AttackTime),
    ("decay_time", EnvelopeField::DecayTime),
    ("sustain_level", EnvelopeField::SustainLevel),
    ("sustain_time", EnvelopeField::SustainTime),
    ("release_time", EnvelopeField::ReleaseTime),
    ("attack_curve_power", EnvelopeField::CurvePower(CurvePhase::Attack)),
    ("attack_curve_ratio", EnvelopeField::CurveRatio(CurvePhase::Attack)),
    ("decay_curve_power", EnvelopeField::CurvePower(CurvePhase::Decay)),
    ("decay_curve_ratio", EnvelopeField::CurveRatio(CurvePhase::Decay)),
    ("release_curve_power", EnvelopeField::CurvePower(CurvePhase::Release)),
    ("release_curve_ratio", EnvelopeField::CurveRatio(CurvePhase::Release)),
];

impl Target {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "frequency" => return Some(Target::Frequency),
            "volume" => return Some(Target::Volume),
            "waveform" => return Some(Target::Waveform),
            "pitch_env_semitones" => return Some(Target::PitchDepth),
            _ => {}
        }

        let (env, field) = name.split_once('.')?;
        let kind = match env {
            "volume_env" => EnvelopeKind::Volume,
            "pitch_env" => EnvelopeKind::Pitch,
            _ => return None,
        };
        ENVELOPE_FIELDS
            .iter()
            .find(|(n, _)| *n == field)
            .map(|(_, f)| Target::Envelope(kind, *f))
    }

    fn range(&self) -> ParameterRange {
        match self {
            Target::Frequency => ParameterRange::Float {
                min: 1.0,
                max: 20_000.0,
            },
            Target::Volume => ParameterRange::Float { min: 0.0, max: 4.0 },
            Target::Waveform => ParameterRange::Enum(OscillatorWaveform::NAMES),
            Target::PitchDepth => ParameterRange::Float {
                min: -48.0,
                max: 48.0,
            },
            Target::Envelope(_, field) => match field {
                EnvelopeField::SustainLevel => UNIT_RANGE,
                EnvelopeField::CurvePower(_) => POWER_RANGE,
                EnvelopeField::CurveRatio(_) => UNIT_RANGE,
                _ => TIME_RANGE,
            },
        }
    }
}

/// Split `osc3.volume_env.attack_time` into `(3, "volume_env.attack_time")`.
fn split_id(id: &str) -> Option<(usize, &str)> {
    let rest = id.strip_prefix("osc")?;
    let (index, name) = rest.split_once('.')?;
    Some((index.parse().ok()?, name))
}

fn curve_mut(envelope: &mut Envelope, phase: CurvePhase) -> &mut Curve {
    match phase {
        CurvePhase::Attack => &mut envelope.attack_curve,
        CurvePhase::Decay => &mut envelope.decay_curve,
        CurvePhase::Release => &mut envelope.release_curve,
    }
}

fn curve(envelope: &Envelope, phase: CurvePhase) -> Curve {
    match phase {
        CurvePhase::Attack => envelope.attack_curve,
        CurvePhase::Decay => envelope.decay_curve,
        CurvePhase::Release => envelope.release_curve,
    }
}

/// Parameter store backed by an owned [`VoiceConfig`].
#[derive(Debug, Clone)]
pub struct VoiceParameters {
    config: VoiceConfig,
}

impl VoiceParameters {
    pub fn new(config: VoiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Every parameter this voice exposes, in oscillator order.
    pub fn parameters(&self) -> Vec<Parameter> {
        let mut names: Vec<String> = ["frequency", "volume", "waveform", "pitch_env_semitones"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        for env in ["volume_env", "pitch_env"] {
            for (field, _) in ENVELOPE_FIELDS {
                names.push(format!("{env}.{field}"));
            }
        }

        (0..self.config.oscillators.len())
            .flat_map(|index| {
                names.iter().filter_map(move |name| {
                    let target = Target::parse(name)?;
                    Some(Parameter {
                        id: format!("osc{index}.{name}"),
                        range: target.range(),
                    })
                })
            })
            .collect()
    }

    /// Current value of a parameter.
    pub fn get(&self, id: &str) -> Result<ParameterValue, ParameterError> {
        let (index, target) = self.resolve(id)?;
        let osc = &self.config.oscillators[index];

        let value = match target {
            Target::Frequency => ParameterValue::Float(osc.frequency),
            Target::Volume => ParameterValue::Float(osc.volume),
            Target::Waveform => ParameterValue::Enum(osc.waveform.name().to_string()),
            Target::PitchDepth => ParameterValue::Float(osc.pitch_env_semitones),
            Target::Envelope(kind, field) => {
                let env = match kind {
                    EnvelopeKind::Volume => &osc.volume_envelope,
                    EnvelopeKind::Pitch => &osc.pitch_envelope,
                };
                ParameterValue::Float(match field {
                    EnvelopeField::AttackTime => env.attack_time,
                    EnvelopeField::DecayTime => env.decay_time,
                    EnvelopeField::SustainLevel => env.sustain_level,
                    EnvelopeField::SustainTime => env.sustain_time,
                    EnvelopeField::ReleaseTime => env.release_time,
                    EnvelopeField::CurvePower(phase) => curve(env, phase).power,
                    EnvelopeField::CurveRatio(phase) => curve(env, phase).ratio,
                })
            }
        };
        Ok(value)
    }

    fn resolve(&self, id: &str) -> Result<(usize, Target), ParameterError> {
        split_id(id)
            .and_then(|(index, name)| Some((index, Target::parse(name)?)))
            .filter(|(index, _)| *index < self.config.oscillators.len())
            .ok_or_else(|| ParameterError::Unknown(id.to_string()))
    }
}

fn apply(osc: &mut OscillatorConfig, target: Target, value: &ParameterValue) {
    match (target, value) {
        (Target::Waveform, ParameterValue::Enum(name)) => {
            if let Some(waveform) = OscillatorWaveform::from_name(name) {
                osc.waveform = waveform;
            }
        }
        (Target::Frequency, ParameterValue::Float(v)) => osc.frequency = *v,
        (Target::Volume, ParameterValue::Float(v)) => osc.volume = *v,
        (Target::PitchDepth, ParameterValue::Float(v)) => osc.pitch_env_semitones = *v,
        (Target::Envelope(kind, field), ParameterValue::Float(v)) => {
            let env = match kind {
                EnvelopeKind::Volume => &mut osc.volume_envelope,
                EnvelopeKind::Pitch => &mut osc.pitch_envelope,
            };
            match field {
                EnvelopeField::AttackTime => env.attack_time = *v,
                EnvelopeField::DecayTime => env.decay_time = *v,
                EnvelopeField::SustainLevel => env.sustain_level = *v,
                EnvelopeField::SustainTime => env.sustain_time = *v,
                EnvelopeField::ReleaseTime => env.release_time = *v,
                EnvelopeField::CurvePower(phase) => curve_mut(env, phase).power = *v,
                EnvelopeField::CurveRatio(phase) => curve_mut(env, phase).ratio = *v,
            }
        }
        // kinds are checked against the range before apply
        _ => {}
    }
}

impl ParameterStore for VoiceParameters {
    fn set_parameter_value(&mut self, id: &str, value: &ParameterValue) -> Result<(), ParameterError> {
        let (index, target) = self.resolve(id)?;
        target.range().check(id, value)?;
        apply(&mut self.config.oscillators[index], target, value);
        Ok(())
    }

    fn voice_config(&self) -> &VoiceConfig {
        &self.config
    }
}
