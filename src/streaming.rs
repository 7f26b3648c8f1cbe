//! Real-time audio output via rodio
//!
//! Drains the sample ring buffer into the system audio device. Underruns
//! play silence rather than ending the stream, so a paused or exhausted
//! track keeps the device alive for the next button press.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rodio::{OutputStream, Sink, Source};

use crate::ring_buffer::RingBuffer;
use crate::{GbaSoundError, Result};

/// Audio source that pulls interleaved stereo samples from the ring buffer
struct RingBufferSource {
    ring_buffer: Arc<RingBuffer>,
    sample_rate: u32,
    finished: Arc<AtomicBool>,
    /// Batch read scratch to keep lock traffic low
    buffer: Vec<f32>,
    buffer_pos: usize,
}

impl RingBufferSource {
    fn new(ring_buffer: Arc<RingBuffer>, sample_rate: u32, finished: Arc<AtomicBool>) -> Self {
        RingBufferSource {
            ring_buffer,
            sample_rate,
            finished,
            buffer: vec![0.0; 2048],
            buffer_pos: 2048,
        }
    }
}

impl Iterator for RingBufferSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.finished.load(Ordering::Relaxed) {
            return None;
        }

        if self.buffer_pos >= self.buffer.len() {
            let read = self.ring_buffer.read(&mut self.buffer);
            if read < self.buffer.len() {
                // Underrun: pad the batch with silence
                self.buffer[read..].fill(0.0);
            }
            self.buffer_pos = 0;
        }

        let sample = self.buffer[self.buffer_pos];
        self.buffer_pos += 1;
        Some(sample)
    }
}

impl Source for RingBufferSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.buffer.len())
    }

    fn channels(&self) -> u16 {
        2
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// Audio playback device draining a shared ring buffer
pub struct AudioDevice {
    _stream: OutputStream,
    sink: Sink,
    finished: Arc<AtomicBool>,
}

impl AudioDevice {
    /// Open the default output device and start draining the ring buffer
    /// at the given sample rate (stereo).
    pub fn new(sample_rate: u32, ring_buffer: Arc<RingBuffer>) -> Result<Self> {
        let (stream, stream_handle) = OutputStream::try_default().map_err(|e| {
            GbaSoundError::AudioDeviceError(format!("failed to create audio stream: {e}"))
        })?;
        let sink = Sink::try_new(&stream_handle).map_err(|e| {
            GbaSoundError::AudioDeviceError(format!("failed to create audio sink: {e}"))
        })?;

        let finished = Arc::new(AtomicBool::new(false));
        sink.append(RingBufferSource::new(
            ring_buffer,
            sample_rate,
            Arc::clone(&finished),
        ));

        Ok(AudioDevice {
            _stream: stream,
            sink,
            finished,
        })
    }

    /// Signal that no more samples will be produced; the stream terminates
    /// instead of playing silence forever.
    pub fn finish(&self) {
        self.finished.store(true, Ordering::Relaxed);
    }
}

impl Drop for AudioDevice {
    fn drop(&mut self) {
        self.finished.store(true, Ordering::Relaxed);
        self.sink.pause();
    }
}
