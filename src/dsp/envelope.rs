#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
One-Shot ADSR Envelope
======================

This module implements the envelope used by one-shot drum oscillators. Unlike
a keyboard envelope there is no gate: a drum hit is triggered once and every
phase has a fixed duration, including sustain. That makes the envelope a
pure function of the time elapsed since the trigger.

Vocabulary
----------

  elapsed     Seconds since the hit was triggered. The only input.

  phase       Which segment `elapsed` falls into: Attack, Decay, Sustain,
              Release, or Finished once past the release boundary.

  progress    Position inside the current phase, 0.0 at its start and 1.0
              at its end.

  curve       How progress is bent before it drives the ramp. Each ramp
              phase (attack, decay, release) has its own curve.


The Shape
---------

  Level
    1.0 ┐   ╱╲
        │  ╱  ╲
    S   │ ╱    ╲__________
        │╱                ╲
    0.0 └──────────────────╲──→ Time
        A    D      S      R
        |    |      |      |
        a   a+d   a+d+s  a+d+s+r   (phase boundaries)

A phase with a duration of 0 is instantaneous: its boundary coincides with
the previous one and the lookup skips straight past it.


Curves: Linear to Power
-----------------------

Every ramp goes from a start level to an end level:

    level = start + (end - start) × shape(progress)

where shape blends a straight line with a power curve:

    shape(p) = (1 - ratio) × p + ratio × p^power

  ratio = 0.0   pure linear ramp
  ratio = 1.0   pure power curve
  power > 1.0   slow start, fast finish
  power < 1.0   fast start, slow finish

shape(0) = 0 and shape(1) = 1 for any ratio and power, so the envelope is
continuous at every phase boundary no matter how the curves are set.


Pitch Envelopes
---------------

The same envelope drives pitch. Its output is then interpreted as a scale
factor on the oscillator's pitch depth rather than as a gain.
*/

/// Shape of one envelope ramp.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    /// Exponent of the curved component (> 0).
    pub power: f32,
    /// Blend between linear (0.0) and curved (1.0).
    pub ratio: f32,
}

impl Curve {
    pub const LINEAR: Curve = Curve {
        power: 1.0,
        ratio: 0.0,
    };

    pub fn new(power: f32, ratio: f32) -> Self {
        Self { power, ratio }
    }

    /// Map linear progress in [0, 1] through the curve.
    #[inline]
    pub fn shape(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        let shaped = (1.0 - self.ratio) * p + self.ratio * p.powf(self.power);
        shaped.clamp(0.0, 1.0)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::LINEAR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopePhase {
    Attack,
    Decay,
    Sustain,
    Release,
    Finished,
}

/// Stateless attack/decay/sustain/release envelope with fixed phase lengths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub attack_time: f32,
    pub decay_time: f32,
    pub sustain_level: f32,
    pub sustain_time: f32,
    pub release_time: f32,
    pub attack_curve: Curve,
    pub decay_curve: Curve,
    pub release_curve: Curve,
}

impl Envelope {
    /// Linear envelope with the given phase lengths (seconds).
    pub fn adsr(
        attack_time: f32,
        decay_time: f32,
        sustain_level: f32,
        sustain_time: f32,
        release_time: f32,
    ) -> Self {
        Self {
            attack_time,
            decay_time,
            sustain_level,
            sustain_time,
            release_time,
            attack_curve: Curve::LINEAR,
            decay_curve: Curve::LINEAR,
            release_curve: Curve::LINEAR,
        }
    }

    /// An envelope that is finished from the start. Used for "no pitch sweep".
    pub fn silent() -> Self {
        Self::adsr(0.0, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn with_curves(mut self, attack: Curve, decay: Curve, release: Curve) -> Self {
        self.attack_curve = attack;
        self.decay_curve = decay;
        self.release_curve = release;
        self
    }

    /// Total length in seconds; the value is 0 from here on.
    pub fn duration(&self) -> f32 {
        self.attack_time + self.decay_time + self.sustain_time + self.release_time
    }

    /// Total length rounded up to whole samples.
    pub fn duration_samples(&self, sample_rate: f32) -> usize {
        (self.duration() * sample_rate).ceil().max(0.0) as usize
    }

    pub fn phase_at(&self, elapsed: f32) -> EnvelopePhase {
        self.locate(elapsed).0
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        matches!(self.phase_at(elapsed), EnvelopePhase::Finished)
    }

    /// Envelope value at `elapsed` seconds after the trigger, in [0, 1].
    pub fn value_at(&self, elapsed: f32) -> f32 {
        let sustain = self.sustain_level.clamp(0.0, 1.0);
        let (phase, progress) = self.locate(elapsed);

        let level = match phase {
            EnvelopePhase::Attack => self.attack_curve.shape(progress),
            EnvelopePhase::Decay => 1.0 + (sustain - 1.0) * self.decay_curve.shape(progress),
            EnvelopePhase::Sustain => sustain,
            EnvelopePhase::Release => sustain * (1.0 - self.release_curve.shape(progress)),
            EnvelopePhase::Finished => 0.0,
        };

        debug_assert!((0.0..=1.0).contains(&level));
        level
    }

    /// Find the phase containing `elapsed` and the progress through it.
    fn locate(&self, elapsed: f32) -> (EnvelopePhase, f32) {
        let t = elapsed.max(0.0);

        let attack_end = self.attack_time;
        let decay_end = attack_end + self.decay_time;
        let sustain_end = decay_end + self.sustain_time;
        let release_end = sustain_end + self.release_time;

        if t < attack_end {
            (EnvelopePhase::Attack, t / self.attack_time)
        } else if t < decay_end {
            (EnvelopePhase::Decay, (t - attack_end) / self.decay_time)
        } else if t < sustain_end {
            (EnvelopePhase::Sustain, 0.0)
        } else if t < release_end {
            (EnvelopePhase::Release, (t - sustain_end) / self.release_time)
        } else {
            (EnvelopePhase::Finished, 1.0)
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::adsr(0.001, 0.1, 0.0, 0.0, 0.05)
    }
}
