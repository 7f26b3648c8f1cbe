//! Hardware Audio Sink Seam
//!
//! The narrow interface between the playback state machine and the sound
//! hardware. [`crate::hardware::DirectSound`] implements it with the real
//! register write sequences; tests implement it with a fake that records
//! the calls, so the state machine is testable without any hardware
//! modelling at all.

use std::sync::Arc;

/// Operations the playback controller needs from the sound hardware
pub trait AudioSink {
    /// Arm the hardware for continuous playback of the two channel
    /// buffers at the given sample rate. Re-arming while already playing
    /// restarts from the beginning of the buffers.
    fn start(&mut self, left: Arc<[u8]>, right: Arc<[u8]>, sample_rate: u32);

    /// Tear playback down. Must be safe to call at any time, including
    /// when already stopped.
    fn stop(&mut self);

    /// Is the sample-pacing timer's hardware enable bit set?
    ///
    /// The timing monitor gates its decrement on this rather than on any
    /// software flag, so a stop issued earlier in the same refresh window
    /// suppresses the decrement.
    fn timer_running(&self) -> bool;
}
