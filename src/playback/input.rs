//! Input Loop State Machine
//!
//! Edge-triggered button handling, one poll per refresh cycle:
//!
//! - idle -> playing on a fresh A press, only when not already playing
//! - playing -> idle on a fresh B press, unconditionally (stop while idle
//!   is a harmless no-op)
//!
//! The exhaustion path (playing -> idle without a button) is driven by
//! the timing monitor, not here.

use crate::keypad::{KeyScanner, Keys};
use crate::playback::{AudioSink, PlaybackController};

/// Button-to-transition mapping polled once per refresh
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLoop {
    scanner: KeyScanner,
}

impl InputLoop {
    /// Create an input loop with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// The scanner snapshot from the last poll
    pub fn scanner(&self) -> &KeyScanner {
        &self.scanner
    }

    /// One refresh cycle: latch the raw button state and apply the two
    /// transition rules against the controller.
    pub fn poll<S: AudioSink>(&mut self, raw: Keys, controller: &mut PlaybackController<S>) {
        self.scanner.scan(raw);

        // Play only when not already playing; a held A never re-triggers
        if self.scanner.just_pressed(Keys::A) && !controller.is_playing() {
            controller.start();
        }

        // Stop is always honored
        if self.scanner.just_pressed(Keys::B) {
            controller.stop();
        }
    }
}
