//! Playback Engine
//!
//! The three cooperating pieces of the demo: the playback controller
//! (owns the samples-remaining counter and drives the hardware start/stop
//! sequences), the vblank timing monitor (approximates sample consumption
//! once per refresh and tears playback down on exhaustion) and the input
//! loop (edge-triggered play/stop transitions).
//!
//! All three share state only through [`PlaybackState`] inside the
//! controller; the monitor and input loop take the controller by mutable
//! reference, preserving the original's run-to-completion, non-reentrant
//! interrupt contract without real interrupts.

pub mod controller;
pub mod input;
pub mod monitor;
pub mod sink;
pub mod state;

pub use controller::PlaybackController;
pub use input::InputLoop;
pub use monitor::VblankMonitor;
pub use sink::AudioSink;
pub use state::PlaybackState;
