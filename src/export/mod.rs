//! Offline audio export

mod wav;

pub use wav::export_track_to_wav;
