//! Error types.
//!
//! `ConfigError` means a voice description can never be rendered and is
//! returned from constructors. `ParameterError` is scoped to one parameter
//! change: the engine reports it and keeps rendering.

/// A voice or engine configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("voice has no oscillators")]
    EmptyVoice,
    #[error("oscillator {index}: frequency must be positive and finite, got {value}")]
    InvalidFrequency { index: usize, value: f32 },
    #[error("oscillator {index}: volume must be finite, got {value}")]
    InvalidVolume { index: usize, value: f32 },
    #[error("oscillator {index}: pitch depth must be finite, got {value}")]
    InvalidPitchDepth { index: usize, value: f32 },
    #[error("oscillator {index}: {envelope} {field} must be finite and non-negative, got {value}")]
    InvalidDuration {
        index: usize,
        envelope: &'static str,
        field: &'static str,
        value: f32,
    },
    #[error("oscillator {index}: {envelope} sustain level must be within 0..=1, got {value}")]
    InvalidSustainLevel {
        index: usize,
        envelope: &'static str,
        value: f32,
    },
    #[error("oscillator {index}: {envelope} {phase} curve power must be positive, got {value}")]
    InvalidCurvePower {
        index: usize,
        envelope: &'static str,
        phase: &'static str,
        value: f32,
    },
    #[error("oscillator {index}: {envelope} {phase} curve ratio must be within 0..=1, got {value}")]
    InvalidCurveRatio {
        index: usize,
        envelope: &'static str,
        phase: &'static str,
        value: f32,
    },
    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(u32),
    #[error("silence threshold must be finite and non-negative, got {0}")]
    InvalidSilenceThreshold(f32),
}

/// A rejected parameter change. The previous value stays in effect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("unknown parameter '{0}'")]
    Unknown(String),
    #[error("parameter '{id}' expects a {expected} value")]
    WrongKind { id: String, expected: &'static str },
    #[error("parameter '{id}' value {value} is out of range {min} - {max}")]
    OutOfRange {
        id: String,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("parameter '{id}' value '{value}' is not one of: {options}")]
    NotAnOption {
        id: String,
        value: String,
        options: String,
    },
}
