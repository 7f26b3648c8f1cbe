//! Sample-Pacing Timer
//!
//! Models timer 0 as its two registers: the 16-bit reload value
//! (REG_TM0CNT_L) and the control word (REG_TM0CNT_H). The timer counts
//! up from the reload value and requests one FIFO byte per overflow; the
//! overflow rate is what sets the playback sample rate.

use crate::constants::CPU_CLOCK;
use crate::registers::TimerControl;

/// Timer 0 of the sound block
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleTimer {
    /// Reload value (two's complement countdown)
    reload: u16,
    /// Control word
    control: TimerControl,
}

impl SampleTimer {
    /// Create a stopped timer with a zero reload
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reload value register
    pub fn set_reload(&mut self, value: u16) {
        self.reload = value;
    }

    /// Get the reload value register
    pub fn reload(&self) -> u16 {
        self.reload
    }

    /// Set the start bit
    pub fn start(&mut self) {
        self.control.insert(TimerControl::START);
    }

    /// Clear the start bit
    pub fn stop(&mut self) {
        self.control.remove(TimerControl::START);
    }

    /// Is the start bit set? This is the hardware-enable check the timing
    /// monitor gates its decrement on.
    pub fn is_running(&self) -> bool {
        self.control.contains(TimerControl::START)
    }

    /// Overflow frequency in Hz implied by the current reload value, or
    /// `None` while the reload is zero (a full 65536-count period is never
    /// programmed by this crate).
    pub fn overflow_rate(&self) -> Option<u32> {
        let counts = 0x1_0000u32 - self.reload as u32;
        if self.reload == 0 {
            None
        } else {
            Some(CPU_CLOCK / counts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{timer_reload, SAMPLE_RATE};

    #[test]
    fn test_timer_starts_stopped() {
        let timer = SampleTimer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.overflow_rate(), None);
    }

    #[test]
    fn test_start_stop() {
        let mut timer = SampleTimer::new();
        timer.start();
        assert!(timer.is_running());
        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_overflow_rate_round_trip() {
        let mut timer = SampleTimer::new();
        timer.set_reload(timer_reload(SAMPLE_RATE));
        assert_eq!(timer.overflow_rate(), Some(SAMPLE_RATE));
    }
}
