//! SCM3C Power Domains

use super::bsp;
use crate::power::PowerControl;

/// Power domain switch of the mote
#[derive(Default)]
pub struct Scm3cPower {
    _private: (),
}

impl Scm3cPower {
    /// Take the power switch
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl PowerControl for Scm3cPower {
    fn enter_low_power(&mut self) {
        // SAFETY: scan-chain write inside the BSP, no memory is shared.
        unsafe { bsp::low_power_mode() };
    }

    fn exit_low_power(&mut self) {
        // SAFETY: as above.
        unsafe { bsp::normal_power_mode() };
    }
}
