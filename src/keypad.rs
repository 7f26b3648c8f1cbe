//! Keypad Snapshot and Edge Detection
//!
//! Models the button-state snapshot register (REG_KEYINPUT) and the
//! scan/just-pressed split the original demo relies on: the interrupt
//! handler scans the raw state once per refresh and the main loop queries
//! edge-triggered presses from that snapshot.

use bitflags::bitflags;

bitflags! {
    /// Button state snapshot
    ///
    /// Bits follow the hardware layout; a set bit here means "held"
    /// (already inverted from the active-low register encoding).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Keys: u16 {
        /// A button ("play")
        const A = 1 << 0;
        /// B button ("stop")
        const B = 1 << 1;
        /// Select button
        const SELECT = 1 << 2;
        /// Start button
        const START = 1 << 3;
        /// D-pad right
        const RIGHT = 1 << 4;
        /// D-pad left
        const LEFT = 1 << 5;
        /// D-pad up
        const UP = 1 << 6;
        /// D-pad down
        const DOWN = 1 << 7;
        /// R shoulder button
        const R = 1 << 8;
        /// L shoulder button
        const L = 1 << 9;
    }
}

/// Edge-triggered key scanner
///
/// Call [`KeyScanner::scan`] exactly once per refresh before querying;
/// `just_pressed` then reports the keys that went down since the previous
/// scan, mirroring `scanKeys`/`keysDown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyScanner {
    held: Keys,
    pressed: Keys,
}

impl KeyScanner {
    /// Create a scanner with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the raw button state for this refresh cycle
    pub fn scan(&mut self, raw: Keys) {
        self.pressed = raw & !self.held;
        self.held = raw;
    }

    /// Keys currently held down
    pub fn held(&self) -> Keys {
        self.held
    }

    /// Keys that went down between the last two scans
    pub fn keys_down(&self) -> Keys {
        self.pressed
    }

    /// Did this key go down between the last two scans?
    pub fn just_pressed(&self, key: Keys) -> bool {
        self.pressed.contains(key)
    }
}
