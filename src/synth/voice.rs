use crate::{
    dsp::mix::WriteMode,
    patch::VoiceConfig,
    synth::{oneshot::OneShotOscillator, WaveProducer},
};

/// A layered drum voice built from one-shot oscillators.
///
/// Layer 0 always renders in `Replace` mode so whatever the buffer held
/// before is discarded; every later layer is mixed on top. The `mode`
/// passed to [`WaveProducer::render`] therefore never reaches the layers.
#[derive(Debug, Clone)]
pub struct VoiceGenerator {
    oscillators: Vec<OneShotOscillator>,
}

impl VoiceGenerator {
    pub fn new(config: &VoiceConfig) -> Self {
        let oscillators = config.oscillators.iter().map(OneShotOscillator::new).collect();
        Self { oscillators }
    }

    pub fn layers(&self) -> usize {
        self.oscillators.len()
    }
}

impl WaveProducer for VoiceGenerator {
    fn render(&self, buffer: &mut [f32], sample_rate: f32, start_sample: usize, _mode: WriteMode) {
        for (pos, oscillator) in self.oscillators.iter().enumerate() {
            let mode = if pos == 0 {
                WriteMode::Replace
            } else {
                WriteMode::Mix
            };

            oscillator.render(buffer, sample_rate, start_sample, mode);
        }
    }

    fn length_samples(&self, sample_rate: f32) -> usize {
        self.oscillators
            .iter()
            .map(|osc| osc.length_samples(sample_rate))
            .max()
            .unwrap_or(0)
    }
}
