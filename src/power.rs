//! Power Management
//!
//! Low-power switching for motes running from a solar cell. Between tuning
//! points the mote drops into low power for a short dwell so the storage
//! capacitor can recharge.

use embedded_hal_async::delay::DelayNs;

/// Power domain state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerMode {
    /// All analog domains on
    #[default]
    Normal,
    /// Radio and analog domains gated
    Low,
}

#[cfg(feature = "embedded")]
impl defmt::Format for PowerMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Normal => defmt::write!(f, "NORMAL"),
            Self::Low => defmt::write!(f, "LOW"),
        }
    }
}

/// Switch between normal and low power
pub trait PowerControl {
    /// Gate the analog domains
    fn enter_low_power(&mut self);

    /// Restore normal operation
    fn exit_low_power(&mut self);
}

impl<T: PowerControl + ?Sized> PowerControl for &mut T {
    fn enter_low_power(&mut self) {
        T::enter_low_power(self);
    }

    fn exit_low_power(&mut self) {
        T::exit_low_power(self);
    }
}

/// One low-power dip: enter, wait, exit
pub struct LowPowerCycle<P, D> {
    power: P,
    delay: D,
    dwell_us: u32,
    mode: PowerMode,
    cycles: u32,
}

impl<P: PowerControl, D: DelayNs> LowPowerCycle<P, D> {
    /// Create a cycle helper with the given dwell time
    #[must_use]
    pub const fn new(power: P, delay: D, dwell_us: u32) -> Self {
        Self {
            power,
            delay,
            dwell_us,
            mode: PowerMode::Normal,
            cycles: 0,
        }
    }

    /// Current power mode as last switched by this helper
    #[must_use]
    pub const fn mode(&self) -> PowerMode {
        self.mode
    }

    /// Number of completed dips
    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Dwell time in microseconds
    #[must_use]
    pub const fn dwell_us(&self) -> u32 {
        self.dwell_us
    }

    /// Drop into low power for the dwell time, then come back
    pub async fn dip(&mut self) {
        self.power.enter_low_power();
        self.mode = PowerMode::Low;

        self.delay.delay_us(self.dwell_us).await;

        self.power.exit_low_power();
        self.mode = PowerMode::Normal;
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Give back the power switch and delay
    pub fn release(self) -> (P, D) {
        (self.power, self.delay)
    }
}

#[cfg(feature = "embedded")]
impl<P, D> defmt::Format for LowPowerCycle<P, D> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "LowPower({}, dwell={}us, n={})", self.mode, self.dwell_us, self.cycles);
    }
}
