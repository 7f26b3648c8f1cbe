//! DMA Channel Descriptor
//!
//! Models one of the GBA's DMA channels as the three registers the
//! playback controller writes: source address, destination address and
//! control word. Transfers themselves are simulated by the FIFO layer.

use crate::registers::DmaControl;

/// A single DMA channel (REG_DMAxSAD / REG_DMAxDAD / REG_DMAxCNT)
#[derive(Debug, Clone, Copy, Default)]
pub struct DmaChannel {
    /// Source address register
    pub source: u32,
    /// Destination address register
    pub destination: u32,
    /// Control word
    pub control: DmaControl,
}

impl DmaChannel {
    /// Create an idle channel with all registers cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Program the channel for a transfer
    pub fn program(&mut self, source: u32, destination: u32, control: DmaControl) {
        self.source = source;
        self.destination = destination;
        self.control = control;
    }

    /// Clear the enable bit, halting the channel
    pub fn disable(&mut self) {
        self.control.remove(DmaControl::ENABLE);
    }

    /// Is the channel enabled?
    pub fn is_enabled(&self) -> bool {
        self.control.contains(DmaControl::ENABLE)
    }
}
