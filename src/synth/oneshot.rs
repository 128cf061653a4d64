use crate::{
    dsp::{envelope::Envelope, mix::WriteMode, oscillator::OscillatorWaveform},
    patch::OscillatorConfig,
    synth::WaveProducer,
};

/*
One-Shot Oscillator
===================

A single drum layer: an oscillator whose loudness and pitch are both driven
by envelopes, rendered once from the trigger until its volume envelope has
run out.

Per local sample n (time t = n / sample_rate):

    amplitude(t) = volume × volume_env(t)
    frequency(t) = frequency × 2^(pitch_env_semitones × pitch_env(t) / 12)
    phase       += frequency(t) / sample_rate
    out[n]       = amplitude(t) × waveform(phase)

Phase is accumulated rather than computed as frequency × t so a pitch sweep
does not produce discontinuities. Accumulation always starts from zero at
the trigger, so the output is still a function of elapsed time alone.

A kick drum is the classic case:

    frequency            50 Hz
    pitch_env_semitones  24       (sweep starts two octaves up, 200 Hz)
    pitch_env            0.001 s attack, 0.05 s decay to 0
    volume_env           0.001 s attack, 0.3 s decay to 0

Once the volume envelope is finished the layer is silent. In Replace mode
the rest of the buffer is zeroed; in Mix mode it is left untouched.
*/

/// One enveloped oscillator layer.
#[derive(Debug, Clone)]
pub struct OneShotOscillator {
    waveform: OscillatorWaveform,
    frequency: f32,
    volume: f32,
    pitch_env_semitones: f32,
    volume_envelope: Envelope,
    pitch_envelope: Envelope,
}

impl OneShotOscillator {
    pub fn new(config: &OscillatorConfig) -> Self {
        Self {
            waveform: config.waveform,
            frequency: config.frequency,
            volume: config.volume,
            pitch_env_semitones: config.pitch_env_semitones,
            volume_envelope: config.volume_envelope,
            pitch_envelope: config.pitch_envelope,
        }
    }

    /// Instantaneous frequency `elapsed` seconds after the trigger.
    #[inline]
    pub fn frequency_at(&self, elapsed: f32) -> f32 {
        if self.pitch_env_semitones == 0.0 {
            return self.frequency;
        }
        let semitones = self.pitch_env_semitones * self.pitch_envelope.value_at(elapsed);
        self.frequency * (semitones / 12.0).exp2()
    }

    /// Amplitude `elapsed` seconds after the trigger.
    #[inline]
    pub fn amplitude_at(&self, elapsed: f32) -> f32 {
        self.volume * self.volume_envelope.value_at(elapsed)
    }
}

impl WaveProducer for OneShotOscillator {
    fn render(&self, buffer: &mut [f32], sample_rate: f32, start_sample: usize, mode: WriteMode) {
        if start_sample >= buffer.len() {
            return;
        }

        let region = &mut buffer[start_sample..];
        let audible = self.length_samples(sample_rate).min(region.len());
        let step = 1.0 / sample_rate as f64;
        let mut phase = 0.0f64;

        for (n, out) in region[..audible].iter_mut().enumerate() {
            let elapsed = (n as f64 * step) as f32;
            let value = self.waveform.sample(phase as f32, n) * self.amplitude_at(elapsed);
            mode.write(out, value);

            phase = (phase + self.frequency_at(elapsed) as f64 * step).fract();
        }

        if mode == WriteMode::Replace {
            region[audible..].fill(0.0);
        }
    }

    fn length_samples(&self, sample_rate: f32) -> usize {
        self.volume_envelope.duration_samples(sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn flat(frequency: f32) -> OscillatorConfig {
        // full level for 0.1s
        OscillatorConfig::new(frequency, 1.0)
            .with_volume_envelope(Envelope::adsr(0.0, 0.0, 1.0, 0.1, 0.0))
    }

    #[test]
    fn sine_follows_frequency() {
        let osc = OneShotOscillator::new(&flat(10.0));
        let mut buffer = vec![0.0; 50];
        osc.render(&mut buffer, SAMPLE_RATE, 0, WriteMode::Replace);

        for (n, &sample) in buffer.iter().enumerate() {
            let expected = (TAU * 10.0 * n as f32 / SAMPLE_RATE).sin();
            assert!((sample - expected).abs() < 1e-3, "n={n}: {sample} vs {expected}");
        }
    }

    #[test]
    fn replace_zeroes_after_envelope_ends() {
        let osc = OneShotOscillator::new(&flat(10.0));
        let mut buffer = vec![0.5; 200];
        osc.render(&mut buffer, SAMPLE_RATE, 0, WriteMode::Replace);

        assert!(buffer[..100].iter().any(|s| s.abs() > 0.5));
        assert!(buffer[100..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn mix_adds_to_existing_content() {
        let osc = OneShotOscillator::new(&flat(10.0));
        let mut alone = vec![0.0; 200];
        osc.render(&mut alone, SAMPLE_RATE, 0, WriteMode::Replace);

        let mut mixed = vec![0.25; 200];
        osc.render(&mut mixed, SAMPLE_RATE, 0, WriteMode::Mix);

        for (a, m) in alone.iter().zip(&mixed) {
            assert!((a + 0.25 - m).abs() < 1e-6);
        }
    }

    #[test]
    fn start_sample_offsets_the_sound() {
        let osc = OneShotOscillator::new(&flat(10.0));
        let mut reference = vec![0.0; 100];
        osc.render(&mut reference, SAMPLE_RATE, 0, WriteMode::Replace);

        let mut offset = vec![0.0; 130];
        osc.render(&mut offset, SAMPLE_RATE, 30, WriteMode::Replace);

        assert!(offset[..30].iter().all(|&s| s == 0.0));
        assert_eq!(&offset[30..], &reference[..]);
    }

    #[test]
    fn start_past_buffer_is_a_no_op() {
        let osc = OneShotOscillator::new(&flat(10.0));
        let mut buffer = vec![0.3; 16];
        osc.render(&mut buffer, SAMPLE_RATE, 16, WriteMode::Replace);
        osc.render(&mut buffer, SAMPLE_RATE, 400, WriteMode::Mix);
        assert!(buffer.iter().all(|&s| s == 0.3));
    }

    #[test]
    fn pitch_envelope_raises_frequency() {
        let config =
            flat(100.0).with_pitch_envelope(Envelope::adsr(0.0, 0.05, 0.0, 0.0, 0.0), 12.0);
        let osc = OneShotOscillator::new(&config);

        assert!((osc.frequency_at(0.0) - 200.0).abs() < 1e-3);
        assert!((osc.frequency_at(0.06) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn volume_scales_amplitude() {
        let mut config = flat(10.0);
        config.volume = 0.5;
        let osc = OneShotOscillator::new(&config);
        assert_eq!(osc.amplitude_at(0.05), 0.5);
        assert_eq!(osc.amplitude_at(0.2), 0.0);
    }
}
