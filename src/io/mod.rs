// Purpose - block timing, channel buffers, format conversions

pub mod converter;
pub mod midi;

/// The span of absolute sample time covered by one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start_sample: u64,
    pub num_samples: usize,
}

impl TimeInterval {
    pub fn new(start_sample: u64, num_samples: usize) -> Self {
        Self {
            start_sample,
            num_samples,
        }
    }

    /// First sample after this interval.
    pub fn end(&self) -> u64 {
        self.start_sample + self.num_samples as u64
    }

    /// The interval immediately after this one, with the same length.
    pub fn next(&self) -> Self {
        Self::new(self.end(), self.num_samples)
    }

    /// Offset of an absolute position inside this block.
    ///
    /// Positions before the block start map to 0. Offsets too large for
    /// `usize` saturate, so such a position stays past the block end.
    pub fn offset_of(&self, sample_position: u64) -> usize {
        usize::try_from(sample_position.saturating_sub(self.start_sample)).unwrap_or(usize::MAX)
    }

    pub fn contains(&self, sample_position: u64) -> bool {
        (self.start_sample..self.end()).contains(&sample_position)
    }
}

#[derive(Debug, Default)]
pub struct AudioOutput {
    pub buffers: Vec<Vec<f32>>,
}

impl AudioOutput {
    /// `channels` silent buffers of `block_size` samples each.
    pub fn new(channels: usize, block_size: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; block_size]; channels],
        }
    }

    pub fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(0.0);
        }
    }
}
