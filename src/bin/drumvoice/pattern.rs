use drumvoice::{io::TimeInterval, synth::message::Event};

/// A note-on on every beat.
pub struct FourOnTheFloor {
    samples_per_beat: f64,
    note: u8,
    velocity: u8,
}

impl FourOnTheFloor {
    pub fn new(bpm: f64, sample_rate: u32) -> Self {
        Self {
            samples_per_beat: 60.0 / bpm * f64::from(sample_rate),
            note: 36,
            velocity: 100,
        }
    }

    pub fn samples_per_bar(&self) -> u64 {
        (self.samples_per_beat * 4.0).round() as u64
    }

    /// Append the beats that fall inside `interval` to `events`.
    pub fn fill(&self, interval: &TimeInterval, events: &mut Vec<Event>) {
        let first = (interval.start_sample as f64 / self.samples_per_beat).ceil() as u64;
        let mut beat = first;
        loop {
            let position = (beat as f64 * self.samples_per_beat).round() as u64;
            if !interval.contains(position) {
                if position >= interval.end() {
                    break;
                }
                beat += 1;
                continue;
            }
            events.push(Event::note_on(position, self.note, self.velocity));
            beat += 1;
        }
    }
}
