//! DirectSound register block
//!
//! The aggregate the playback controller programs: master sound status,
//! the DirectSound mixer control word, DMA channels 1 and 2, timer 0 and
//! the two audio FIFOs. [`DirectSound`] performs the exact register write
//! sequences the hardware needs and can synthesize the resulting stereo
//! output from its current register state.

use std::sync::Arc;

use crate::constants::timer_reload;
use crate::hardware::{DmaChannel, Fifo, SampleTimer};
use crate::playback::AudioSink;
use crate::registers::{
    DirectSoundControl, DmaControl, SoundStatus, CART_ROM_BASE, FIFO_A_ADDR, FIFO_B_ADDR,
};

/// The DirectSound hardware block
#[derive(Debug, Clone, Default)]
pub struct DirectSound {
    status: SoundStatus,
    control: DirectSoundControl,
    dma1: DmaChannel,
    dma2: DmaChannel,
    timer0: SampleTimer,
    fifo_a: Fifo,
    fifo_b: Fifo,
}

impl DirectSound {
    /// Create a powered-down sound block
    pub fn new() -> Self {
        Self::default()
    }

    /// Master sound status register
    pub fn status(&self) -> SoundStatus {
        self.status
    }

    /// DirectSound mixer control register
    pub fn control(&self) -> DirectSoundControl {
        self.control
    }

    /// DMA channel 1 (feeds FIFO A)
    pub fn dma1(&self) -> &DmaChannel {
        &self.dma1
    }

    /// DMA channel 2 (feeds FIFO B)
    pub fn dma2(&self) -> &DmaChannel {
        &self.dma2
    }

    /// Timer 0 (sample pacing)
    pub fn timer0(&self) -> &SampleTimer {
        &self.timer0
    }

    /// Channel A FIFO
    pub fn fifo_a(&self) -> &Fifo {
        &self.fifo_a
    }

    /// Channel B FIFO
    pub fn fifo_b(&self) -> &Fifo {
        &self.fifo_b
    }

    /// Is the sound subsystem enabled?
    pub fn is_enabled(&self) -> bool {
        self.status.contains(SoundStatus::ENABLE)
    }

    fn channel_gain(&self, full_volume: DirectSoundControl) -> f32 {
        if self.control.contains(full_volume) {
            1.0
        } else {
            0.5
        }
    }

    /// Synthesize interleaved stereo samples (L, R pairs) from the current
    /// register state at the timer's overflow rate.
    ///
    /// While the subsystem is disabled or the timer stopped the output is
    /// silence and the FIFOs do not advance, exactly as the hardware would
    /// receive no DMA requests.
    pub fn generate_samples_into(&mut self, buffer: &mut [f32]) {
        let active = self.is_enabled() && self.timer0.is_running();

        for frame in buffer.chunks_exact_mut(2) {
            if !active {
                frame[0] = 0.0;
                frame[1] = 0.0;
                continue;
            }

            let a = self.fifo_a.next_sample() * self.channel_gain(DirectSoundControl::A_FULL_VOLUME);
            let b = self.fifo_b.next_sample() * self.channel_gain(DirectSoundControl::B_FULL_VOLUME);

            let mut left = 0.0;
            let mut right = 0.0;
            if self.control.contains(DirectSoundControl::A_LEFT) {
                left += a;
            }
            if self.control.contains(DirectSoundControl::A_RIGHT) {
                right += a;
            }
            if self.control.contains(DirectSoundControl::B_LEFT) {
                left += b;
            }
            if self.control.contains(DirectSoundControl::B_RIGHT) {
                right += b;
            }

            frame[0] = left.clamp(-1.0, 1.0);
            frame[1] = right.clamp(-1.0, 1.0);
        }
    }
}

impl AudioSink for DirectSound {
    /// Program the full start sequence: sound enable, mixer routing with
    /// FIFO resets, both DMA channels, then the pacing timer.
    fn start(&mut self, left: Arc<[u8]>, right: Arc<[u8]>, sample_rate: u32) {
        // Enable sound
        self.status.insert(SoundStatus::ENABLE);

        // Mixer: A/B full volume, A left only, B right only, timer 0,
        // reset both FIFOs
        self.control = DirectSoundControl::stereo_timer0();

        // Linked sample data sits back to back in cartridge ROM, right
        // channel word-aligned after the left
        let left_addr = CART_ROM_BASE;
        let right_addr = CART_ROM_BASE + ((left.len() as u32 + 3) & !3);

        self.fifo_a.reset(left);
        self.fifo_b.reset(right);

        self.dma1
            .program(left_addr, FIFO_A_ADDR, DmaControl::fifo_feed());
        self.dma2
            .program(right_addr, FIFO_B_ADDR, DmaControl::fifo_feed());

        // Timer 0 overflows at the sample rate
        self.timer0.set_reload(timer_reload(sample_rate));
        self.timer0.start();
    }

    /// Tear down in the order that avoids FIFO underrun artifacts: timer
    /// and DMA first, sound enable last.
    fn stop(&mut self) {
        self.timer0.stop();
        self.dma1.disable();
        self.dma2.disable();
        self.status.remove(SoundStatus::ENABLE);
    }

    fn timer_running(&self) -> bool {
        self.timer0.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLE_RATE;

    fn buffers() -> (Arc<[u8]>, Arc<[u8]>) {
        (
            Arc::from(vec![0x40u8; 8].into_boxed_slice()),
            Arc::from(vec![0xC0u8; 8].into_boxed_slice()),
        )
    }

    #[test]
    fn test_start_programs_all_registers() {
        let mut ds = DirectSound::new();
        let (left, right) = buffers();
        ds.start(left, right, SAMPLE_RATE);

        assert!(ds.is_enabled(), "sound subsystem should be enabled");
        assert_eq!(ds.control(), DirectSoundControl::stereo_timer0());
        assert!(ds.dma1().is_enabled());
        assert!(ds.dma2().is_enabled());
        assert_eq!(ds.dma1().destination, FIFO_A_ADDR);
        assert_eq!(ds.dma2().destination, FIFO_B_ADDR);
        assert_eq!(ds.dma1().source, CART_ROM_BASE);
        assert_eq!(ds.dma2().source, CART_ROM_BASE + 8);
        assert_eq!(ds.timer0().reload(), 0xFE00);
        assert!(ds.timer_running());
    }

    #[test]
    fn test_stop_disables_everything() {
        let mut ds = DirectSound::new();
        let (left, right) = buffers();
        ds.start(left, right, SAMPLE_RATE);
        ds.stop();

        assert!(!ds.timer_running());
        assert!(!ds.dma1().is_enabled());
        assert!(!ds.dma2().is_enabled());
        assert!(!ds.is_enabled());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ds = DirectSound::new();
        ds.stop();
        ds.stop();
        assert!(!ds.is_enabled());
        assert!(!ds.timer_running());
    }

    #[test]
    fn test_synthesis_routes_a_left_b_right() {
        let mut ds = DirectSound::new();
        let (left, right) = buffers();
        ds.start(left, right, SAMPLE_RATE);

        let mut frame = [0.0f32; 2];
        ds.generate_samples_into(&mut frame);

        // 0x40 = +64 -> 0.5 on the left, 0xC0 = -64 -> -0.5 on the right
        assert!((frame[0] - 0.5).abs() < 1e-6, "left output {}", frame[0]);
        assert!((frame[1] + 0.5).abs() < 1e-6, "right output {}", frame[1]);
    }

    #[test]
    fn test_synthesis_silent_while_stopped() {
        let mut ds = DirectSound::new();
        let (left, right) = buffers();
        ds.start(left, right, SAMPLE_RATE);
        ds.stop();

        let mut buf = [1.0f32; 4];
        ds.generate_samples_into(&mut buf);
        assert_eq!(buf, [0.0; 4]);
        // FIFOs must not advance without DMA requests
        assert_eq!(ds.fifo_a().position(), 0);
    }

    #[test]
    fn test_restart_rewinds_fifos() {
        let mut ds = DirectSound::new();
        let (left, right) = buffers();
        ds.start(Arc::clone(&left), Arc::clone(&right), SAMPLE_RATE);

        let mut buf = [0.0f32; 6];
        ds.generate_samples_into(&mut buf);
        assert_eq!(ds.fifo_a().position(), 3);

        ds.start(left, right, SAMPLE_RATE);
        assert_eq!(ds.fifo_a().position(), 0, "FIFO reset should rewind");
    }
}
