//! GBA Hardware Timing Constants
//!
//! Fixed clocks of the AGB platform and the values derived from them that
//! pace DirectSound playback. The per-vblank sample decrement is a rounded
//! approximation: every refresh is assumed to consume the same number of
//! samples, which keeps exhaustion tracking within one refresh period of
//! the hardware's actual position.

/// DirectSound output sample rate in Hz
pub const SAMPLE_RATE: u32 = 32_768;

/// AGB CPU clock in Hz (16.777216 MHz)
pub const CPU_CLOCK: u32 = 16_777_216;

/// CPU cycles per display refresh (one vblank period)
pub const REFRESH_CYCLES: f64 = 280_896.0;

/// Display refresh rate in Hz (~59.73)
pub const REFRESH_RATE: f64 = CPU_CLOCK as f64 / REFRESH_CYCLES;

/// Samples consumed by the DMA/timer pair between two vblanks, rounded
/// to the nearest integer.
///
/// At the fixed 32768 Hz rate this works out to 549 samples per refresh.
pub fn samples_per_vblank(sample_rate: u32) -> u32 {
    (sample_rate as f64 / REFRESH_RATE).round() as u32
}

/// Timer 0 reload value for a target sample rate.
///
/// The timer counts up from the reload value and overflows at 0x10000, so
/// the reload is the two's complement of the cycles-per-sample quotient:
/// `-(CPU_CLOCK / sample_rate)` as a 16-bit value.
pub fn timer_reload(sample_rate: u32) -> u16 {
    (CPU_CLOCK / sample_rate).wrapping_neg() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_refresh_rate_matches_hardware() {
        assert_relative_eq!(REFRESH_RATE, 59.7275, epsilon = 1e-3);
    }

    #[test]
    fn test_samples_per_vblank_at_nominal_rate() {
        // round(32768 / 59.7275) = 549
        assert_eq!(samples_per_vblank(SAMPLE_RATE), 549);
    }

    #[test]
    fn test_timer_reload_at_nominal_rate() {
        // 16777216 / 32768 = 512 cycles per sample -> reload 0xFE00
        assert_eq!(timer_reload(SAMPLE_RATE), 0xFE00);
    }

    #[test]
    fn test_timer_reload_overflow_rate() {
        // Reloading at 0xFE00 leaves 512 counts until overflow, which at the
        // CPU clock is exactly the target sample rate again.
        let counts = 0x1_0000u32 - timer_reload(SAMPLE_RATE) as u32;
        assert_eq!(CPU_CLOCK / counts, SAMPLE_RATE);
    }
}
