use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{io::TimeInterval, params::ParameterValue};

/// A timestamped event delivered to the engine.
///
/// `sample_position` is absolute, on the same timeline as [`TimeInterval`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Trigger one hit. Pitch and velocity are carried but not used for
    /// synthesis; the voice defines the sound.
    NoteOn {
        sample_position: u64,
        note: u8,
        velocity: u8,
    },
    /// Change one parameter of the voice.
    ParameterValue {
        sample_position: u64,
        parameter_id: String,
        value: ParameterValue,
    },
    /// Anything else on the event stream. Ignored by the engine.
    Other { sample_position: u64 },
}

impl Event {
    pub fn note_on(sample_position: u64, note: u8, velocity: u8) -> Self {
        Event::NoteOn {
            sample_position,
            note,
            velocity,
        }
    }

    pub fn parameter(
        sample_position: u64,
        parameter_id: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        Event::ParameterValue {
            sample_position,
            parameter_id: parameter_id.into(),
            value: value.into(),
        }
    }

    pub fn sample_position(&self) -> u64 {
        match self {
            Event::NoteOn {
                sample_position, ..
            }
            | Event::ParameterValue {
                sample_position, ..
            }
            | Event::Other { sample_position } => *sample_position,
        }
    }
}

/// Source of events pushed from outside the render thread.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<Event>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<Event> {
    fn pop(&mut self) -> Option<Event> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for VecDeque<Event> {
    fn pop(&mut self) -> Option<Event> {
        self.pop_front()
    }
}

/// Splits a time-ordered event stream into per-block event channels.
///
/// Events that belong to a later block are held back until that block is
/// drained; events from the past are delivered with the next block and land
/// at its first sample.
pub struct EventQueue<R: MessageReceiver> {
    rx: R,
    held: Option<Event>,
}

impl<R: MessageReceiver> EventQueue<R> {
    pub fn new(rx: R) -> Self {
        Self { rx, held: None }
    }

    /// Replace the contents of `out` with every event before `interval`'s end.
    ///
    /// `out` is reused between blocks so steady-state draining does not
    /// allocate.
    pub fn drain_block(&mut self, interval: &TimeInterval, out: &mut Vec<Event>) {
        out.clear();
        let end = interval.end();

        while let Some(event) = self.held.take().or_else(|| self.rx.pop()) {
            if event.sample_position() >= end {
                self.held = Some(event);
                break;
            }
            out.push(event);
        }
    }

    pub fn has_held_event(&self) -> bool {
        self.held.is_some()
    }
}

#[cfg(feature = "rtrb")]
const EVENT_QUEUE_SIZE: usize = 256;

/// Create a lock-free producer/queue pair for feeding a render thread.
#[cfg(feature = "rtrb")]
pub fn event_queue() -> (Producer<Event>, EventQueue<Consumer<Event>>) {
    let (tx, rx) = RingBuffer::<Event>::new(EVENT_QUEUE_SIZE);
    (tx, EventQueue::new(rx))
}
