//! Busy-wait Delay
//!
//! SCM3C has no free-running timer the executor could use, so short waits
//! spin on the core clock.

use embedded_hal_async::delay::DelayNs;

use crate::config::CORE_CLOCK_HZ;

/// Cycle-counting delay
#[derive(Clone, Copy, Debug)]
pub struct BusyDelay {
    core_clock_hz: u32,
}

impl BusyDelay {
    /// Delay calibrated for the given core clock
    #[must_use]
    pub const fn new(core_clock_hz: u32) -> Self {
        Self { core_clock_hz }
    }

    /// Core cycles covering `ns` nanoseconds (rounded up, saturating)
    #[must_use]
    pub const fn cycles_for_ns(&self, ns: u32) -> u32 {
        let cycles = (ns as u64 * self.core_clock_hz as u64).div_ceil(1_000_000_000);
        if cycles > u32::MAX as u64 {
            u32::MAX
        } else {
            #[allow(clippy::cast_possible_truncation)]
            {
                cycles as u32
            }
        }
    }
}

impl Default for BusyDelay {
    fn default() -> Self {
        Self::new(CORE_CLOCK_HZ)
    }
}

impl DelayNs for BusyDelay {
    async fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay(self.cycles_for_ns(ns));
    }
}

impl defmt::Format for BusyDelay {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "BusyDelay({}Hz)", self.core_clock_hz);
    }
}
