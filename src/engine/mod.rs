//! The drum synthesis engine: turns per-block events into hits and streams
//! them into output buffers.
//!
//! One render call handles one block:
//!
//! 1. events from every input channel are merged and stably sorted by
//!    sample position,
//! 2. every parameter change goes to the parameter store and, once
//!    accepted, invalidates the sound cache,
//! 3. if the block has note-ons, the cached waveform is fetched once,
//!    synthesizing it first if the cache is empty,
//! 4. each note-on starts a hit on that waveform,
//! 5. new hits followed by hits carried from the previous block are added
//!    into every output,
//! 6. hits with samples left are carried into the next block.
//!
//! All parameter changes of a block land before any of its note-ons, so every
//! hit started in one block plays the same sound: the one left by the block's
//! last parameter change.

pub mod cache;
pub mod hit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    error::{ConfigError, ParameterError},
    io::TimeInterval,
    params::{ParameterStore, ParameterValue, VoiceParameters},
    patch::VoiceConfig,
    synth::{message::Event, VoiceGenerator},
    DEFAULT_SAMPLE_RATE, DEFAULT_SILENCE_THRESHOLD, MAX_HIT_LENGTH_SAMPLES,
};

use self::{
    cache::{synthesize, SoundCache},
    hit::Hit,
};

/// Engine-wide settings fixed at construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Level below which a synthesized tail counts as silence.
    pub silence_threshold: f32,
}

impl EngineConfig {
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_silence_threshold(mut self, threshold: f32) -> Self {
        self.silence_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if !(self.silence_threshold.is_finite() && self.silence_threshold >= 0.0) {
            return Err(ConfigError::InvalidSilenceThreshold(self.silence_threshold));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            silence_threshold: DEFAULT_SILENCE_THRESHOLD,
        }
    }
}

/// What happened during one render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub hits_started: usize,
    pub hits_carried: usize,
    pub rejected_parameters: usize,
    pub resynthesized: bool,
}

/// A one-voice drum synthesizer.
///
/// Each instance owns its voice, cache and hits; instances share nothing.
pub struct DrumSynth<S: ParameterStore = VoiceParameters> {
    config: EngineConfig,
    store: S,
    cache: SoundCache,
    scratch: Vec<f32>,
    /// Hits carried into the next block, offsets already rebased.
    hits: Vec<Hit>,
    working: Vec<Hit>,
    /// (sample position, channel, index) for the current block's events.
    order: Vec<(u64, usize, usize)>,
}

impl DrumSynth<VoiceParameters> {
    /// Build an engine that owns `voice`.
    pub fn new(config: EngineConfig, voice: VoiceConfig) -> Result<Self, ConfigError> {
        Self::with_store(config, VoiceParameters::new(voice)?)
    }
}

impl<S: ParameterStore> DrumSynth<S> {
    pub fn with_store(config: EngineConfig, store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        store.voice_config().validate()?;

        Ok(Self {
            config,
            store,
            cache: SoundCache::Empty,
            scratch: vec![0.0; MAX_HIT_LENGTH_SAMPLES],
            hits: Vec::new(),
            working: Vec::new(),
            order: Vec::new(),
        })
    }

    /// Render one block.
    ///
    /// Hits are added to whatever `stream_outputs` already hold; only the
    /// first `interval.num_samples` samples of each output are touched.
    /// `stream_inputs` and `event_outputs` are accepted for symmetry with
    /// other processors and left alone.
    pub fn render<I, O, E>(
        &mut self,
        interval: &TimeInterval,
        _stream_inputs: &[I],
        stream_outputs: &mut [O],
        event_inputs: &[E],
        _event_outputs: &mut [Vec<Event>],
    ) -> RenderSummary
    where
        I: AsRef<[f32]>,
        O: AsMut<[f32]>,
        E: AsRef<[Event]>,
    {
        let mut summary = RenderSummary::default();
        let block_len = interval.num_samples;

        self.order.clear();
        for (channel, events) in event_inputs.iter().enumerate() {
            for (index, event) in events.as_ref().iter().enumerate() {
                self.order.push((event.sample_position(), channel, index));
            }
        }
        // stable: ties keep channel order, then arrival order
        self.order.sort_by_key(|&(position, _, _)| position);

        for k in 0..self.order.len() {
            let (_, channel, index) = self.order[k];
            if let Event::ParameterValue {
                parameter_id,
                value,
                ..
            } = &event_inputs[channel].as_ref()[index]
            {
                if self.set_parameter_value(parameter_id, value).is_err() {
                    summary.rejected_parameters += 1;
                }
            }
        }

        self.working.clear();
        let mut sound = None;
        for k in 0..self.order.len() {
            let (position, channel, index) = self.order[k];
            if !matches!(event_inputs[channel].as_ref()[index], Event::NoteOn { .. }) {
                continue;
            }

            // at most one synthesis per block
            let sound = sound.get_or_insert_with(|| {
                let (sound, fresh) = self.cached_sound();
                summary.resynthesized = fresh;
                sound
            });

            if let Some(hit) = Hit::new(Arc::clone(sound), interval.offset_of(position)) {
                self.working.push(hit);
                summary.hits_started += 1;
            }
        }

        self.working.append(&mut self.hits);

        for hit in self.working.drain(..) {
            for output in stream_outputs.iter_mut() {
                let output = output.as_mut();
                let len = output.len().min(block_len);
                hit.patch(&mut output[..len]);
            }

            let consumed = hit.patch_length(block_len);
            if let Some(rest) = hit.advance(consumed) {
                self.hits.push(rest.rebase(block_len));
            }
        }

        summary.hits_carried = self.hits.len();
        summary
    }

    /// Apply one parameter change outside of a render call.
    ///
    /// An accepted change always invalidates the cache, even if the value is
    /// unchanged. A rejected one leaves the voice and cache as they were.
    pub fn set_parameter_value(
        &mut self,
        id: &str,
        value: &ParameterValue,
    ) -> Result<(), ParameterError> {
        match self.store.set_parameter_value(id, value) {
            Ok(()) => {
                self.cache.invalidate();
                debug!(parameter = id, %value, "Parameter changed, sound cache invalidated");
                Ok(())
            }
            Err(e) => {
                warn!(parameter = id, %value, error = %e, "Parameter change rejected");
                Err(e)
            }
        }
    }

    /// Synthesize the voice now if the cache is empty; returns its length.
    ///
    /// Lets a host pay the synthesis cost before the first note-on.
    pub fn warm_cache(&mut self) -> usize {
        self.cached_sound().0.len()
    }

    /// Drop every sounding hit and the cached waveform.
    pub fn reset(&mut self) {
        self.hits.clear();
        self.working.clear();
        self.cache.invalidate();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parameters(&self) -> &S {
        &self.store
    }

    /// Hits that will continue in the next block.
    pub fn pending_hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn is_cache_valid(&self) -> bool {
        self.cache.is_valid()
    }

    pub fn cached_length(&self) -> Option<usize> {
        self.cache.length_samples()
    }

    /// The cached waveform, synthesizing it when needed. The flag is true
    /// when this call did the synthesis.
    fn cached_sound(&mut self) -> (Arc<[f32]>, bool) {
        if let Some(sound) = self.cache.sound() {
            return (Arc::clone(sound), false);
        }

        let config = self.store.voice_config();
        let voice = VoiceGenerator::new(config);
        let sound = synthesize(
            &voice,
            self.config.sample_rate as f32,
            &mut self.scratch,
            self.config.silence_threshold,
        );
        debug!(voice = %config.name, length = sound.len(), "Sound cache rebuilt");

        self.cache = SoundCache::Valid(Arc::clone(&sound));
        (sound, true)
    }
}
