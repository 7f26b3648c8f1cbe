//! Playback Controller
//!
//! Owns the samples-remaining counter and the track, and drives the audio
//! sink through the hardware-exact start/stop sequences. Both operations
//! are unconditional register programming with no failure path; calling
//! `start` while already playing restarts the track from the beginning
//! (the counter is reset and the hardware re-armed identically), and
//! `stop` while idle is a harmless no-op.

use crate::playback::{AudioSink, PlaybackState};
use crate::track::Track;

/// Playback controller over an audio sink
#[derive(Debug)]
pub struct PlaybackController<S: AudioSink> {
    sink: S,
    track: Track,
    state: PlaybackState,
}

impl<S: AudioSink> PlaybackController<S> {
    /// Create an idle controller for the given track
    pub fn new(sink: S, track: Track) -> Self {
        PlaybackController {
            sink,
            track,
            state: PlaybackState::new(),
        }
    }

    /// Start playback from the beginning of the track.
    ///
    /// Effects, in hardware order: the counter is set to the full track
    /// length, then the sink enables sound, routes the FIFOs, programs
    /// both DMA channels and starts the pacing timer.
    pub fn start(&mut self) {
        self.state.reset(self.track.len_samples());
        self.sink.start(
            self.track.left(),
            self.track.right(),
            self.track.sample_rate(),
        );
    }

    /// Stop playback.
    ///
    /// The counter is forced to zero first, then the sink stops the timer,
    /// disables both DMA channels and finally disables sound. Idempotent.
    pub fn stop(&mut self) {
        self.state.clear();
        self.sink.stop();
    }

    /// Is playback active? Derived from the counter.
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Samples left to stream
    pub fn samples_remaining(&self) -> i32 {
        self.state.samples_remaining()
    }

    /// The track being played
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// The underlying audio sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the underlying audio sink (sample synthesis)
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub(crate) fn state_mut(&mut self) -> &mut PlaybackState {
        &mut self.state
    }
}
