use crate::{io::midi::MidiEvent, synth::message::Event};

/// Convert a MIDI message into an engine event at `sample_position`.
///
/// Only note-ons (velocity > 0) on `channel_filter` become [`Event::NoteOn`];
/// everything else is passed through as [`Event::Other`] so it still keeps
/// its place in the timeline.
pub fn midi_to_event(midi: MidiEvent, sample_position: u64, channel_filter: Option<u8>) -> Event {
    let on_channel = channel_filter.map_or(true, |channel| midi.channel() == channel);

    match midi {
        MidiEvent::NoteOn { key, velocity, .. } if on_channel && midi.is_note_on() => {
            Event::note_on(sample_position, key, velocity)
        }
        _ => Event::Other { sample_position },
    }
}
