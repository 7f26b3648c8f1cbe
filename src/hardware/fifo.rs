//! Audio FIFO fed by simulated DMA
//!
//! The real FIFO is a 32-byte hardware queue refilled by a DMA burst each
//! time it drains below half. For synthesis we collapse the burst
//! machinery: the FIFO holds a handle to the source buffer and a read
//! position, and hands out one signed 8-bit sample per timer overflow.
//! Reads past the end of the buffer yield silence, matching the DMA
//! fetching unmapped data after the track's natural end.

use std::sync::Arc;

/// One DirectSound FIFO (channel A or B)
#[derive(Debug, Clone, Default)]
pub struct Fifo {
    data: Option<Arc<[u8]>>,
    pos: usize,
}

impl Fifo {
    /// Create an empty FIFO with no source attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a source buffer and rewind to its start (FIFO reset)
    pub fn reset(&mut self, data: Arc<[u8]>) {
        self.data = Some(data);
        self.pos = 0;
    }

    /// Detach the source buffer
    pub fn clear(&mut self) {
        self.data = None;
        self.pos = 0;
    }

    /// Current read position in samples
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Is a source buffer attached?
    pub fn is_attached(&self) -> bool {
        self.data.is_some()
    }

    /// Pop the next sample as a normalized f32 in [-1.0, 1.0).
    ///
    /// Returns silence once the source is exhausted or detached; the read
    /// position still advances so it mirrors the DMA source register.
    pub fn next_sample(&mut self) -> f32 {
        let sample = match &self.data {
            Some(data) => data
                .get(self.pos)
                .map(|&byte| byte as i8 as f32 / 128.0)
                .unwrap_or(0.0),
            None => 0.0,
        };
        self.pos += 1;
        sample
    }
}
