//! DirectSound Register Definitions
//!
//! Bit layouts for the sound-control, DMA-control and timer-control words
//! of the GBA DirectSound path, plus the memory-mapped addresses the DMA
//! destination registers point at.

use bitflags::bitflags;

/// Address of the channel A sample FIFO (REG_FIFO_A)
pub const FIFO_A_ADDR: u32 = 0x0400_00A0;

/// Address of the channel B sample FIFO (REG_FIFO_B)
pub const FIFO_B_ADDR: u32 = 0x0400_00A4;

/// Nominal cartridge ROM base where linked sample data lives
pub const CART_ROM_BASE: u32 = 0x0800_0000;

bitflags! {
    /// Master sound status register (SNDSTAT)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SoundStatus: u16 {
        /// Master enable for the whole sound subsystem
        const ENABLE = 1 << 7;
    }
}

bitflags! {
    /// DirectSound mixer control register (DSOUNDCTRL)
    ///
    /// Routes the two FIFOs to the stereo outputs, selects their pacing
    /// timer and resets the FIFO contents.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirectSoundControl: u16 {
        /// Channel A at full volume (half volume when clear)
        const A_FULL_VOLUME = 1 << 2;
        /// Channel B at full volume (half volume when clear)
        const B_FULL_VOLUME = 1 << 3;
        /// Route channel A to the right output
        const A_RIGHT = 1 << 8;
        /// Route channel A to the left output
        const A_LEFT = 1 << 9;
        /// Channel A paced by timer 1 (timer 0 when clear)
        const A_TIMER1 = 1 << 10;
        /// Reset channel A FIFO
        const A_RESET_FIFO = 1 << 11;
        /// Route channel B to the right output
        const B_RIGHT = 1 << 12;
        /// Route channel B to the left output
        const B_LEFT = 1 << 13;
        /// Channel B paced by timer 1 (timer 0 when clear)
        const B_TIMER1 = 1 << 14;
        /// Reset channel B FIFO
        const B_RESET_FIFO = 1 << 15;
    }
}

bitflags! {
    /// DMA channel control word (REG_DMAxCNT high half)
    ///
    /// The two-bit source and destination address-control fields use the
    /// zero encoding for auto-increment, so an incrementing transfer needs
    /// no bits set for them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DmaControl: u16 {
        /// Repeat the transfer indefinitely
        const REPEAT = 1 << 9;
        /// 32-bit transfer width (16-bit when clear)
        const WIDTH_32 = 1 << 10;
        /// Special start timing: transfer on FIFO DMA request
        const SPECIAL = 3 << 12;
        /// Channel enable
        const ENABLE = 1 << 15;
    }
}

bitflags! {
    /// Timer control word (REG_TMxCNT high half)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TimerControl: u16 {
        /// Timer running
        const START = 1 << 7;
    }
}

impl DirectSoundControl {
    /// The fixed routing the playback controller programs: both FIFOs at
    /// full volume, A to the left output only, B to the right output only,
    /// both paced by timer 0, both FIFOs reset.
    pub fn stereo_timer0() -> Self {
        DirectSoundControl::A_FULL_VOLUME
            | DirectSoundControl::B_FULL_VOLUME
            | DirectSoundControl::A_LEFT
            | DirectSoundControl::B_RIGHT
            | DirectSoundControl::A_RESET_FIFO
            | DirectSoundControl::B_RESET_FIFO
    }
}

impl DmaControl {
    /// Control word for continuous FIFO feeding: enabled, 32-bit, repeat,
    /// FIFO-request triggered. Source and destination address control stay
    /// at their zero (auto-increment) encoding; per FIFO register
    /// semantics the incrementing destination still lands every write on
    /// the same FIFO address.
    pub fn fifo_feed() -> Self {
        DmaControl::ENABLE | DmaControl::WIDTH_32 | DmaControl::SPECIAL | DmaControl::REPEAT
    }
}
