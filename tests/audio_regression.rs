use std::collections::VecDeque;

use drumvoice::{
    dsp::{envelope::Envelope, oscillator::OscillatorWaveform},
    io::{AudioOutput, TimeInterval},
    patch::{OscillatorConfig, VoiceConfig},
    synth::message::{Event, EventQueue},
    voices, DrumSynth, EngineConfig,
};

const SAMPLE_RATE: u32 = 44_100;

fn engine(voice: VoiceConfig) -> DrumSynth {
    DrumSynth::new(EngineConfig::default().with_sample_rate(SAMPLE_RATE), voice).unwrap()
}

fn tone(frequency: f32) -> VoiceConfig {
    VoiceConfig::new("tone").layer(
        OscillatorConfig::new(frequency, 1.0)
            .with_volume_envelope(Envelope::adsr(0.0, 0.0, 1.0, 0.01, 0.01)),
    )
}

/// Render consecutive blocks of the given sizes into one signal.
fn render_blocks(engine: &mut DrumSynth, sizes: &[usize], events: &[Event]) -> Vec<f32> {
    let mut signal = Vec::new();
    let mut start = 0u64;

    for &size in sizes {
        let interval = TimeInterval::new(start, size);
        let block_events: Vec<Event> = events
            .iter()
            .filter(|e| interval.contains(e.sample_position()))
            .cloned()
            .collect();

        let mut output = AudioOutput::new(1, size);
        engine.render(
            &interval,
            &[] as &[Vec<f32>],
            output.buffers.as_mut_slice(),
            &[block_events],
            &mut [],
        );
        signal.extend_from_slice(&output.buffers[0]);
        start = interval.end();
    }

    signal
}

#[test]
fn sine_hit_spills_into_next_block() {
    let mut engine = engine(tone(440.0));
    let mut output = AudioOutput::new(1, 512);

    let summary = engine.render(
        &TimeInterval::new(0, 512),
        &[] as &[Vec<f32>],
        output.buffers.as_mut_slice(),
        &[vec![Event::note_on(0, 36, 100)]],
        &mut [],
    );

    let block = &output.buffers[0];
    assert!(block.iter().all(|s| s.abs() <= 1.0));
    // sustain at full level for the first 441 samples
    let peak = block[..441].iter().fold(0.0f32, |m, s| m.max(s.abs()));
    assert!(peak > 0.99, "peak {peak}");

    // 20ms at 44.1kHz is longer than one block
    let length = engine.cached_length().unwrap();
    assert!(length > 512 && length <= 882, "length {length}");
    assert_eq!(summary.hits_started, 1);
    assert_eq!(summary.hits_carried, 1);

    let carried = &engine.pending_hits()[0];
    assert_eq!(carried.start_sample_in_hit(), 512);
    assert_eq!(carried.start_sample_in_buffer(), 0);
}

#[test]
fn split_rendering_matches_single_block() {
    let events = [
        Event::note_on(300, 36, 100),
        Event::note_on(1_250, 36, 100),
    ];

    let sizes = [100, 257, 1, 64, 512, 1_000, 9_000];
    let total: usize = sizes.iter().sum();

    let mut whole = engine(voices::snare());
    let reference = render_blocks(&mut whole, &[total], &events);

    let mut split = engine(voices::snare());
    let pieces = render_blocks(&mut split, &sizes, &events);

    assert!(reference.iter().any(|&s| s != 0.0));
    assert_eq!(reference, pieces);
    assert!(split.pending_hits().is_empty());
}

#[test]
fn overlapping_hits_are_order_independent() {
    let a = vec![Event::note_on(10, 36, 100)];
    let b = vec![Event::note_on(40, 36, 100)];
    let interval = TimeInterval::new(0, 2_048);

    let mut forward = engine(voices::tom());
    let mut first = AudioOutput::new(1, 2_048);
    forward.render(
        &interval,
        &[] as &[Vec<f32>],
        first.buffers.as_mut_slice(),
        &[a.clone(), b.clone()],
        &mut [],
    );

    let mut backward = engine(voices::tom());
    let mut second = AudioOutput::new(1, 2_048);
    backward.render(
        &interval,
        &[] as &[Vec<f32>],
        second.buffers.as_mut_slice(),
        &[b, a],
        &mut [],
    );

    for (x, y) in first.buffers[0].iter().zip(&second.buffers[0]) {
        assert!((x - y).abs() < 1e-6);
    }
}

#[test]
fn layers_add_at_first_sample() {
    let square = |volume| {
        OscillatorConfig::new(100.0, volume)
            .with_waveform(OscillatorWaveform::Square)
            .with_volume_envelope(Envelope::adsr(0.0, 0.0, 1.0, 0.01, 0.0))
    };
    let voice = VoiceConfig::new("two")
        .layer(square(0.5))
        .layer(square(0.25));

    let mut engine = engine(voice);
    let signal = render_blocks(&mut engine, &[64], &[Event::note_on(0, 36, 100)]);
    assert!((signal[0] - 0.75).abs() < 1e-6, "got {}", signal[0]);
}

#[test]
fn output_content_is_preserved_and_every_channel_is_written() {
    let mut engine = engine(voices::clave());
    let mut output = AudioOutput::new(2, 256);
    output.buffers[1].fill(0.25);

    let summary = engine.render(
        &TimeInterval::new(0, 256),
        &[] as &[Vec<f32>],
        output.buffers.as_mut_slice(),
        &[vec![Event::note_on(0, 36, 100)]],
        &mut [],
    );

    for (left, right) in output.buffers[0].iter().zip(&output.buffers[1]) {
        assert!((right - (left + 0.25)).abs() < 1e-6);
    }
    // one hit, carried once no matter how many channels
    assert_eq!(summary.hits_started, 1);
    assert_eq!(engine.pending_hits().len(), 1);
}

#[test]
fn parameter_change_applies_to_the_whole_block() {
    let mut engine = engine(tone(440.0));
    let before = engine.warm_cache();

    // the change sits after the first note-on, yet both hits in this block
    // play the new, longer sound
    let signal = render_blocks(
        &mut engine,
        &[4_096, 4_096],
        &[
            Event::note_on(0, 36, 100),
            Event::parameter(10, "osc0.volume_env.sustain_time", 0.05),
            Event::note_on(2_000, 36, 100),
        ],
    );

    let after = engine.cached_length().unwrap();
    assert!(after > before);
    assert!(signal[before..after].iter().any(|&s| s != 0.0));
    assert!(signal[2_000 + after..].iter().all(|&s| s == 0.0));
}

#[test]
fn silenced_voice_drops_note_ons_in_the_same_block() {
    let mut engine = engine(tone(440.0));
    engine.warm_cache();

    let signal = render_blocks(
        &mut engine,
        &[512],
        &[
            Event::note_on(0, 36, 100),
            Event::parameter(10, "osc0.volume", 0.0),
        ],
    );

    assert!(signal.iter().all(|&s| s == 0.0));
    assert!(engine.pending_hits().is_empty());
}

#[test]
fn rejected_parameter_does_not_stop_the_block() {
    let mut engine = engine(tone(440.0));

    let mut output = AudioOutput::new(1, 512);
    let summary = engine.render(
        &TimeInterval::new(0, 512),
        &[] as &[Vec<f32>],
        output.buffers.as_mut_slice(),
        &[vec![
            Event::parameter(0, "osc0.frequency", 0.0),
            Event::note_on(0, 36, 100),
        ]],
        &mut [],
    );

    assert_eq!(summary.rejected_parameters, 1);
    assert_eq!(summary.hits_started, 1);
    assert!(output.buffers[0].iter().any(|&s| s != 0.0));
}

#[test]
fn queued_events_reach_their_block() {
    let mut engine = engine(voices::kick());
    let mut queue = EventQueue::new(VecDeque::from(vec![
        Event::note_on(100, 36, 100),
        Event::note_on(700, 36, 100),
    ]));

    let mut events = Vec::new();
    let mut interval = TimeInterval::new(0, 512);
    let mut started = Vec::new();

    for _ in 0..3 {
        queue.drain_block(&interval, &mut events);
        let mut output = AudioOutput::new(1, 512);
        let summary = engine.render(
            &interval,
            &[] as &[Vec<f32>],
            output.buffers.as_mut_slice(),
            &[&events[..]],
            &mut [],
        );
        started.push(summary.hits_started);
        interval = interval.next();
    }

    assert_eq!(started, vec![1, 1, 0]);
    assert!(!queue.has_held_event());
}
