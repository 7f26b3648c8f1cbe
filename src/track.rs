//! PCM Track Data
//!
//! The two immutable sample buffers the demo streams: raw signed 8-bit
//! PCM, one buffer per stereo channel, fixed at load time. The track
//! length used for exhaustion tracking is the average of the two buffer
//! sizes; unequal buffers are silently averaged, never rejected, matching
//! the original link-time data contract.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::constants::SAMPLE_RATE;
use crate::Result;

/// A fixed two-channel 8-bit PCM track
#[derive(Debug, Clone)]
pub struct Track {
    left: Arc<[u8]>,
    right: Arc<[u8]>,
    sample_rate: u32,
}

impl Track {
    /// Build a track from raw channel buffers at the nominal 32768 Hz rate
    pub fn from_raw(left: Vec<u8>, right: Vec<u8>) -> Self {
        Track {
            left: Arc::from(left.into_boxed_slice()),
            right: Arc::from(right.into_boxed_slice()),
            sample_rate: SAMPLE_RATE,
        }
    }

    /// Load both channel buffers from raw PCM files
    pub fn load<P: AsRef<Path>>(left_path: P, right_path: P) -> Result<Self> {
        let left = fs::read(left_path)?;
        let right = fs::read(right_path)?;
        Ok(Track::from_raw(left, right))
    }

    /// Generate a stereo test tone so the demo is self-contained.
    ///
    /// The left channel carries a sine, the right the same sine inverted,
    /// both as signed 8-bit PCM at the nominal sample rate.
    pub fn sine(frequency: f32, seconds: f32) -> Self {
        let samples = (seconds * SAMPLE_RATE as f32) as usize;
        let mut left = Vec::with_capacity(samples);
        let mut right = Vec::with_capacity(samples);
        for n in 0..samples {
            let phase = 2.0 * std::f32::consts::PI * frequency * n as f32 / SAMPLE_RATE as f32;
            let value = (phase.sin() * 100.0) as i8;
            left.push(value as u8);
            right.push((-value) as u8);
        }
        Track::from_raw(left, right)
    }

    /// Left channel sample data
    pub fn left(&self) -> Arc<[u8]> {
        Arc::clone(&self.left)
    }

    /// Right channel sample data
    pub fn right(&self) -> Arc<[u8]> {
        Arc::clone(&self.right)
    }

    /// Playback sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total track length in samples: the average of the two channel
    /// buffer sizes.
    pub fn len_samples(&self) -> u32 {
        ((self.left.len() + self.right.len()) / 2) as u32
    }

    /// Does the track contain no sample data?
    pub fn is_empty(&self) -> bool {
        self.len_samples() == 0
    }

    /// Track duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.len_samples() as f32 / self.sample_rate as f32
    }
}
