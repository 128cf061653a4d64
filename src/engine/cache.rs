use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    dsp::mix::{audible_length, WriteMode},
    synth::WaveProducer,
};

/// The most recently synthesized waveform for a voice.
///
/// A `Valid` waveform is never written to again; invalidation swaps in
/// `Empty` and hits still holding the old waveform keep playing it.
#[derive(Debug, Clone, Default)]
pub enum SoundCache {
    #[default]
    Empty,
    Valid(Arc<[f32]>),
}

impl SoundCache {
    pub fn invalidate(&mut self) {
        *self = SoundCache::Empty;
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, SoundCache::Valid(_))
    }

    pub fn sound(&self) -> Option<&Arc<[f32]>> {
        match self {
            SoundCache::Empty => None,
            SoundCache::Valid(sound) => Some(sound),
        }
    }

    /// Cached length in samples, `None` when empty.
    pub fn length_samples(&self) -> Option<usize> {
        self.sound().map(|sound| sound.len())
    }
}

/// Render `producer` once into `scratch` and keep the audible part.
///
/// The render is capped at `scratch.len()` samples; a longer sound loses its
/// tail. Everything after the last sample at or above `silence_threshold` is
/// dropped.
pub fn synthesize<P: WaveProducer + ?Sized>(
    producer: &P,
    sample_rate: f32,
    scratch: &mut [f32],
    silence_threshold: f32,
) -> Arc<[f32]> {
    let wanted = producer.length_samples(sample_rate);
    let length = wanted.min(scratch.len());
    if wanted > length {
        warn!(
            requested = wanted,
            cap = scratch.len(),
            "Voice is longer than the hit cap, tail clamped"
        );
    }

    let region = &mut scratch[..length];
    producer.render(region, sample_rate, 0, WriteMode::Replace);

    let audible = audible_length(region, silence_threshold);
    debug!(rendered = length, audible, "Voice synthesized");

    Arc::from(&region[..audible])
}
