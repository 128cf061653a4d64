use std::sync::Arc;

use crate::dsp::mix::sum_in_place;

/*
Hits
====

A hit is one triggered strike that is still sounding. The waveform itself is
shared with the engine's cache; a hit only tracks where it is.

  data                     the whole pre-rendered strike (shared, read-only)
  sample_length            how much of `data` is played
  start_sample_in_hit      samples already emitted in earlier blocks
  start_sample_in_buffer   where the next sample lands in the current block

Patching one hit into one block:

        start_sample_in_buffer
                 │
  block   [......|■■■■■■■■■■■■■■■■■]          (block ends)
  hit            |■■■■■■■■■■■■■■■■■|□□□□□□□□□□□
                 └── patch_length ─┘└ carried ┘

The overlap is added into the block and the cursor advances by exactly the
patch length. A hit whose offset lies past the block end overlaps nothing
and is carried as is.
*/

#[derive(Debug, Clone)]
pub struct Hit {
    data: Arc<[f32]>,
    sample_length: usize,
    start_sample_in_hit: usize,
    start_sample_in_buffer: usize,
}

impl Hit {
    /// A fresh hit playing all of `data` from `start_sample_in_buffer`.
    ///
    /// Returns `None` for an empty waveform; such a hit would have nothing to
    /// emit.
    pub fn new(data: Arc<[f32]>, start_sample_in_buffer: usize) -> Option<Self> {
        let sample_length = data.len();
        if sample_length == 0 {
            return None;
        }

        Some(Self {
            data,
            sample_length,
            start_sample_in_hit: 0,
            start_sample_in_buffer,
        })
    }

    pub fn data(&self) -> &Arc<[f32]> {
        &self.data
    }

    pub fn sample_length(&self) -> usize {
        self.sample_length
    }

    pub fn start_sample_in_hit(&self) -> usize {
        self.start_sample_in_hit
    }

    pub fn start_sample_in_buffer(&self) -> usize {
        self.start_sample_in_buffer
    }

    /// Samples not yet emitted.
    pub fn remaining(&self) -> usize {
        self.sample_length - self.start_sample_in_hit
    }

    /// Overlap between the unplayed part of the hit and a block of `buffer_len`.
    pub fn patch_length(&self, buffer_len: usize) -> usize {
        buffer_len
            .saturating_sub(self.start_sample_in_buffer)
            .min(self.remaining())
    }

    /// Add the overlapping samples into `destination`; returns the overlap.
    ///
    /// The hit itself is not advanced, so the same region can be patched into
    /// several channels.
    pub fn patch(&self, destination: &mut [f32]) -> usize {
        let patch_length = self.patch_length(destination.len());
        if patch_length == 0 {
            return 0;
        }

        let out_start = self.start_sample_in_buffer;
        let hit_start = self.start_sample_in_hit;
        sum_in_place(
            &mut destination[out_start..out_start + patch_length],
            &self.data[hit_start..hit_start + patch_length],
        );

        patch_length
    }

    /// Move the cursor forward by `consumed` samples.
    ///
    /// Returns `None` once every sample has been emitted.
    pub fn advance(mut self, consumed: usize) -> Option<Self> {
        self.start_sample_in_hit += consumed.min(self.remaining());
        (self.start_sample_in_hit < self.sample_length).then_some(self)
    }

    /// Patch into one destination and advance by what was written.
    pub fn apply_to_output(self, destination: &mut [f32]) -> Option<Self> {
        let consumed = self.patch(destination);
        self.advance(consumed)
    }

    /// Re-express the buffer offset relative to the block after one of
    /// `block_len` samples. A hit that already started lands at 0.
    pub fn rebase(mut self, block_len: usize) -> Self {
        self.start_sample_in_buffer = self.start_sample_in_buffer.saturating_sub(block_len);
        self
    }
}
