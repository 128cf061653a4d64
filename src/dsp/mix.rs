//! Buffer write modes and additive summing.

/*
Writing Into Shared Buffers
===========================

Drum layers and drum hits all end up in the same buffers, so every writer
has to say how it treats what is already there.

Vocabulary
----------

  replace     Overwrite the destination. The first layer of a voice uses
              this to establish the base signal, whatever the buffer held.

  mix         Add to the destination. Every further layer, and every hit
              patched into an output, uses this.

  summing     Adding signals at equal level, no weighting and no limiting.
              Two full-scale hits summed can reach 2.0; clipping is a
              concern for whoever consumes the output, not this layer.


Why Summing Is Order-Independent
--------------------------------

    out = pre + hit_a + hit_b = pre + hit_b + hit_a

Addition commutes, so the order in which hits are patched does not change
the result beyond floating point rounding. Nothing here reads a sample it
has already written.
*/

/// How a producer treats existing destination content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Replace,
    Mix,
}

impl WriteMode {
    #[inline]
    pub fn write(self, destination: &mut f32, value: f32) {
        match self {
            WriteMode::Replace => *destination = value,
            WriteMode::Mix => *destination += value,
        }
    }
}

/// Add signal B into signal A in-place (summing).
///
/// ⚠️ WARNING: Can exceed [-1.0, +1.0] range!
#[inline]
pub fn sum_in_place(a: &mut [f32], b: &[f32]) {
    debug_assert_eq!(a.len(), b.len());

    for (sa, &sb) in a.iter_mut().zip(b.iter()) {
        *sa += sb;
    }
}

/// Index of the first sample past the last one at or above `threshold`.
///
/// Everything from the returned index onwards is quieter than `threshold`;
/// a buffer that never reaches it yields 0.
pub fn audible_length(signal: &[f32], threshold: f32) -> usize {
    signal
        .iter()
        .rposition(|s| s.abs() >= threshold)
        .map_or(0, |last| last + 1)
}
