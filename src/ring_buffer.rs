//! Sample Ring Buffer
//!
//! Decouples the vblank-paced sample producer from the audio-device
//! consumer. Capacity is fixed at creation and rounded up to a power of
//! two; all access goes through one `parking_lot` mutex, which is cheap at
//! the few-hundred-samples-per-refresh rates involved here.

use parking_lot::Mutex;

use crate::{GbaSoundError, Result};

/// 64 MB worth of f32 samples; anything larger is a caller bug
const MAX_CAPACITY: usize = 64 * 1024 * 1024 / std::mem::size_of::<f32>();

struct Inner {
    buffer: Vec<f32>,
    read_pos: usize,
    write_pos: usize,
}

/// Fixed-capacity ring buffer of f32 samples
pub struct RingBuffer {
    inner: Mutex<Inner>,
    capacity: usize,
    mask: usize,
}

impl RingBuffer {
    /// Create a ring buffer; capacity is rounded up to a power of two
    pub fn new(requested_capacity: usize) -> Result<Self> {
        if requested_capacity == 0 {
            return Err(GbaSoundError::ConfigError(
                "ring buffer capacity must be greater than 0".into(),
            ));
        }
        // A capacity of 1 would leave zero usable slots once the free
        // slot is reserved, so 2 is the floor
        let capacity = requested_capacity.next_power_of_two().max(2);
        if capacity > MAX_CAPACITY {
            return Err(GbaSoundError::ConfigError(format!(
                "ring buffer capacity {capacity} exceeds maximum {MAX_CAPACITY}"
            )));
        }

        Ok(RingBuffer {
            inner: Mutex::new(Inner {
                buffer: vec![0.0; capacity],
                read_pos: 0,
                write_pos: 0,
            }),
            capacity,
            mask: capacity - 1,
        })
    }

    /// Usable capacity in samples (one slot is kept free)
    pub fn capacity(&self) -> usize {
        self.capacity - 1
    }

    /// Samples currently available to read
    pub fn available_read(&self) -> usize {
        let inner = self.inner.lock();
        inner.write_pos.wrapping_sub(inner.read_pos) & self.mask
    }

    /// Write samples; returns how many fit
    pub fn write(&self, samples: &[f32]) -> usize {
        let mut inner = self.inner.lock();
        let used = inner.write_pos.wrapping_sub(inner.read_pos) & self.mask;
        let free = self.capacity - 1 - used;
        let to_write = samples.len().min(free);

        for &sample in &samples[..to_write] {
            let idx = inner.write_pos & self.mask;
            inner.buffer[idx] = sample;
            inner.write_pos = inner.write_pos.wrapping_add(1);
        }
        to_write
    }

    /// Read samples into `dest`; returns how many were available
    pub fn read(&self, dest: &mut [f32]) -> usize {
        let mut inner = self.inner.lock();
        let available = inner.write_pos.wrapping_sub(inner.read_pos) & self.mask;
        let to_read = dest.len().min(available);

        for slot in dest[..to_read].iter_mut() {
            let idx = inner.read_pos & self.mask;
            *slot = inner.buffer[idx];
            inner.read_pos = inner.read_pos.wrapping_add(1);
        }
        to_read
    }

    /// Fill level from 0.0 to 1.0
    pub fn fill_percentage(&self) -> f32 {
        self.available_read() as f32 / self.capacity() as f32
    }
}
