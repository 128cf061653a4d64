pub mod dsp;
pub mod engine; // Render cycle, sound cache and hit tracking
pub mod error;
pub mod io;
pub mod params; // Named, range-checked voice parameters
pub mod patch;
pub mod synth; // Oscillators and voice synthesis
pub mod voices;

pub use engine::{DrumSynth, EngineConfig, RenderSummary};
pub use error::{ConfigError, ParameterError};

/// Upper bound on one synthesized hit: ten seconds at 44.1 kHz.
pub const MAX_HIT_LENGTH_SAMPLES: usize = 44_100 * 10;
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_SILENCE_THRESHOLD: f32 = 1e-4;
