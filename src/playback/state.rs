//! Playback State
//!
//! The single piece of shared mutable state in the system: the signed
//! samples-remaining counter. "Playing" is derived from it, never stored
//! separately. A 32-bit counter matches the native word of the original
//! target, so interrupt-preemption atomicity needs no extra locking there;
//! in this crate the tick runs to completion on the caller's thread.

/// Samples-remaining counter with its derived playing flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    samples_remaining: i32,
}

impl PlaybackState {
    /// Create a stopped state (zero samples remaining)
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples left to stream
    pub fn samples_remaining(&self) -> i32 {
        self.samples_remaining
    }

    /// Is playback active? Derived: more than zero samples remaining.
    pub fn is_playing(&self) -> bool {
        self.samples_remaining > 0
    }

    /// Reset to a full track worth of samples (playback start)
    pub fn reset(&mut self, track_len: u32) {
        self.samples_remaining = track_len as i32;
    }

    /// Force to zero (playback stop)
    pub fn clear(&mut self) {
        self.samples_remaining = 0;
    }

    /// Subtract consumed samples and return the new value, which may go
    /// negative; the caller clears the counter via `stop()` when it does.
    pub fn consume(&mut self, samples: u32) -> i32 {
        self.samples_remaining -= samples as i32;
        self.samples_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_stopped() {
        let state = PlaybackState::new();
        assert!(!state.is_playing());
        assert_eq!(state.samples_remaining(), 0);
    }

    #[test]
    fn test_reset_and_clear() {
        let mut state = PlaybackState::new();
        state.reset(65536);
        assert!(state.is_playing());
        assert_eq!(state.samples_remaining(), 65536);

        state.clear();
        assert!(!state.is_playing());
    }

    #[test]
    fn test_consume_can_go_negative() {
        let mut state = PlaybackState::new();
        state.reset(100);
        assert_eq!(state.consume(549), 100 - 549);
        assert!(!state.is_playing());
    }
}
