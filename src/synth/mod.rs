// Purpose: one-shot sound generation and the events that trigger it
// This layer sits above the dsp primitives and below the engine

pub mod message;
pub mod oneshot;
pub mod voice;

use crate::dsp::mix::WriteMode;

/// Anything that can render a finite one-shot sound into a buffer.
///
/// `start_sample` is where the sound begins inside `buffer`; the producer
/// writes from there to the end of the buffer. A start at or past the end
/// writes nothing.
pub trait WaveProducer: Send {
    fn render(&self, buffer: &mut [f32], sample_rate: f32, start_sample: usize, mode: WriteMode);

    /// Samples after which the producer only emits silence.
    fn length_samples(&self, sample_rate: f32) -> usize;
}

pub use oneshot::OneShotOscillator;
pub use voice::VoiceGenerator;
