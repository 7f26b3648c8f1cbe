//! GBA DirectSound DMA Audio Playback
//!
//! A register-accurate model of the Game Boy Advance DirectSound path:
//! two DMA channels continuously feed the A/B audio FIFOs from fixed PCM
//! buffers, paced by timer 0, while a vblank-rate tick tracks how many
//! samples have been consumed and tears the hardware down when the track
//! is exhausted.
//!
//! # Features
//! - Register-level modelling of sound status, DirectSound control, DMA
//!   descriptors and the sample-pacing timer
//! - Playback controller with hardware-exact start/stop write sequences
//! - Vblank timing monitor with automatic teardown on exhaustion
//! - Edge-triggered keypad scanning (play/stop buttons)
//! - Stereo sample synthesis from current register state
//!
//! # Crate feature flags
//! - `streaming` (opt-in): Real-time audio output for the demo binary
//!   (enables optional `rodio` dep)
//! - `export-wav` (opt-in): Offline WAV rendering via `hound`
//!
//! # Quick start
//! ```no_run
//! use gbasound::hardware::DirectSound;
//! use gbasound::playback::{InputLoop, PlaybackController, VblankMonitor};
//! use gbasound::{Keys, Track};
//!
//! let track = Track::sine(440.0, 2.0);
//! let mut controller = PlaybackController::new(DirectSound::new(), track);
//! let monitor = VblankMonitor::new();
//! let mut input = InputLoop::new();
//!
//! loop {
//!     // once per display refresh
//!     monitor.tick(&mut controller);
//!     input.poll(Keys::A, &mut controller);
//!     # break;
//! }
//! ```

#![warn(missing_docs)]

pub mod constants;
pub mod hardware;
pub mod keypad;
pub mod playback;
pub mod registers;
pub mod ring_buffer;
pub mod track;

#[cfg(feature = "export-wav")]
pub mod export;
#[cfg(feature = "streaming")]
pub mod streaming;

/// Error types for DirectSound playback operations
#[derive(thiserror::Error, Debug)]
pub enum GbaSoundError {
    /// IO error from filesystem or device
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Audio device error
    #[error("Audio device error: {0}")]
    AudioDeviceError(String),

    /// Audio file write error
    #[error("Audio file write error: {0}")]
    AudioFileError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for GbaSoundError {
    fn from(msg: String) -> Self {
        GbaSoundError::Other(msg)
    }
}

impl From<&str> for GbaSoundError {
    fn from(msg: &str) -> Self {
        GbaSoundError::Other(msg.to_string())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, GbaSoundError>;

// Public API exports
pub use hardware::DirectSound;
pub use keypad::{KeyScanner, Keys};
pub use playback::{AudioSink, InputLoop, PlaybackController, PlaybackState, VblankMonitor};
pub use ring_buffer::RingBuffer;
pub use track::Track;

#[cfg(feature = "export-wav")]
pub use export::export_track_to_wav;
#[cfg(feature = "streaming")]
pub use streaming::AudioDevice;
