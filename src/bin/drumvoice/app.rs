use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use drumvoice::{
    io::{AudioOutput, TimeInterval},
    patch::VoiceConfig,
    synth::message::{event_queue, Event},
    DrumSynth, EngineConfig,
};
use tracing::{info, warn};

use crate::pattern::FourOnTheFloor;

const BLOCK_SIZE: usize = 512;

/// Semitone offsets applied to the first oscillator, one per bar.
const RETUNE_STEPS: [f32; 4] = [0.0, 2.0, -3.0, 5.0];

pub struct Player {
    voice: VoiceConfig,
    bpm: f64,
}

impl Player {
    pub fn new(voice: VoiceConfig) -> Self {
        Self { voice, bpm: 120.0 }
    }

    pub fn bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    /// Open the default output device and play until interrupted.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let base_frequency = self
            .voice
            .oscillators
            .first()
            .map(|osc| osc.frequency)
            .ok_or_else(|| eyre!("voice {:?} has no oscillators", self.voice.name))?;

        let mut engine = DrumSynth::new(
            EngineConfig::default().with_sample_rate(sample_rate),
            self.voice.clone(),
        )
        .wrap_err("failed to build drum engine")?;
        let length = engine.warm_cache();

        info!(
            voice = %self.voice.name,
            bpm = self.bpm,
            sample_rate,
            channels,
            hit_samples = length,
            "Playing, press Ctrl+C to stop"
        );

        let pattern = FourOnTheFloor::new(self.bpm, sample_rate);
        let samples_per_bar = pattern.samples_per_bar();
        let (mut tx, mut queue) = event_queue();
        let playhead = Arc::new(AtomicU64::new(0));

        let stream_playhead = Arc::clone(&playhead);
        let mut output = AudioOutput::new(1, BLOCK_SIZE);
        let mut events = Vec::new();
        let mut interval = TimeInterval::new(0, BLOCK_SIZE);

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(BLOCK_SIZE);
                    interval.num_samples = frames;

                    queue.drain_block(&interval, &mut events);
                    pattern.fill(&interval, &mut events);

                    output.clear();
                    engine.render(
                        &interval,
                        &[] as &[Vec<f32>],
                        output.buffers.as_mut_slice(),
                        &[&events[..]],
                        &mut [],
                    );

                    // Mono to all channels
                    let out_off = frames_written * channels;
                    for (i, &s) in output.buffers[0][..frames].iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames;
                    interval = interval.next();
                }
                stream_playhead.store(interval.start_sample, Ordering::Relaxed);
            },
            |err| warn!(error = %err, "Audio stream error"),
            None,
        )?;

        stream.play()?;

        let mut bar = 0u64;
        loop {
            let next_bar = (bar + 1) * samples_per_bar;
            while playhead.load(Ordering::Relaxed) + BLOCK_SIZE as u64 * 4 < next_bar {
                thread::sleep(Duration::from_millis(10));
            }
            bar += 1;

            let step = RETUNE_STEPS[bar as usize % RETUNE_STEPS.len()];
            let frequency = base_frequency * 2f32.powf(step / 12.0);
            if tx
                .push(Event::parameter(next_bar, "osc0.frequency", frequency))
                .is_err()
            {
                warn!(bar, "Event queue full, retune dropped");
            }
        }
    }
}
