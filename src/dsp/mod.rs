//! Low-level DSP primitives used by the oscillators and the engine.
//!
//! These components are allocation-free and pure: every value is a function
//! of elapsed time or sample index, so a voice can be rendered in one pass
//! without carrying state between samples.

/// Attack/decay/sustain/release envelope evaluated at elapsed time.
pub mod envelope;
/// Buffer write modes and silence measurement.
pub mod mix;
/// Oscillator waveforms and noise sources.
pub mod oscillator;

pub use envelope::{Curve, Envelope, EnvelopePhase};
pub use oscillator::OscillatorWaveform;
