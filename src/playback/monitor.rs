//! Vblank Timing Monitor
//!
//! Runs once per display refresh (the system's only timing tick) and
//! approximates how many samples the DMA/timer pair consumed since the
//! previous refresh. The decrement is the fixed rounded ratio of sample
//! rate to refresh rate; termination therefore lands within one refresh
//! period of the hardware's sample-exact exhaustion, never sample-exact.
//!
//! The driver must scan the keypad before any button queries in the same
//! cycle; on the original target that scan lives in this interrupt
//! handler.

use crate::constants::{samples_per_vblank, SAMPLE_RATE};
use crate::playback::{AudioSink, PlaybackController};

/// Per-refresh sample consumption tracker
#[derive(Debug, Clone, Copy)]
pub struct VblankMonitor {
    per_tick: u32,
}

impl VblankMonitor {
    /// Monitor for the nominal 32768 Hz rate (549 samples per refresh)
    pub fn new() -> Self {
        Self::for_sample_rate(SAMPLE_RATE)
    }

    /// Monitor for an explicit sample rate
    pub fn for_sample_rate(sample_rate: u32) -> Self {
        VblankMonitor {
            per_tick: samples_per_vblank(sample_rate),
        }
    }

    /// Samples subtracted per refresh tick
    pub fn per_tick(&self) -> u32 {
        self.per_tick
    }

    /// One refresh tick: decrement the counter and stop playback on
    /// exhaustion. Returns whether playback is still active.
    ///
    /// The decrement is gated on the timer's hardware enable bit, not on
    /// the derived playing flag, so an explicit stop earlier in the same
    /// refresh window cannot race a stale decrement.
    pub fn tick<S: AudioSink>(&self, controller: &mut PlaybackController<S>) -> bool {
        if !controller.sink().timer_running() {
            return false;
        }

        if controller.state_mut().consume(self.per_tick) <= 0 {
            controller.stop();
        }
        controller.is_playing()
    }
}

impl Default for VblankMonitor {
    fn default() -> Self {
        Self::new()
    }
}
