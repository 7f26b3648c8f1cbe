//! Register-level model of the DirectSound hardware block
//!
//! Aggregates the pieces the playback controller programs: two DMA
//! channels, the sample-pacing timer, the two audio FIFOs and the
//! sound-control registers.

pub mod dma;
pub mod dsound;
pub mod fifo;
pub mod timer;

pub use dma::DmaChannel;
pub use dsound::DirectSound;
pub use fifo::Fifo;
pub use timer::SampleTimer;
