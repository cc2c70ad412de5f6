//! Sweep / Fixed Repetition Controller
//!
//! Walks the coarse/mid/fine tuning space and issues one radio operation
//! per repeat at each point. A run either stops after an exact number of
//! operations or goes on forever, restarting the walk from its first point
//! every time the range is exhausted.
//!
//! ```text
//! loop {
//!     for coarse in range.coarse {
//!         for mid in range.mid {
//!             for fine in range.fine {
//!                 [low-power dip]
//!                 repeat packets_per_point: send | receive, counter += 1
//!             }
//!         }
//!     }
//! }
//! ```

use embedded_hal_async::delay::DelayNs;

use super::driver::RadioDriver;
use crate::power::{LowPowerCycle, PowerControl};
use crate::types::{Direction, PacketLimit, RepeatMode, RunRequest, TuningPoint, TuningRange, TxPacket};

/// Controller settings
///
/// Nothing here is validated: inverted bounds or zero repeats produce an
/// empty walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Point used by fixed transmit runs
    pub fixed_tx: TuningPoint,
    /// Point used by fixed receive runs
    pub fixed_rx: TuningPoint,
    /// First point of the sweep grid
    pub sweep_start: TuningPoint,
    /// Exclusive coarse bound of the sweep grid
    pub sweep_coarse_stop: u8,
    /// Exclusive mid and fine bound of the sweep grid
    pub steps_per_config: u8,
    /// Radio operations per tuning point
    pub packets_per_point: u32,
    /// Dip into low power before every tuning point
    pub low_power: bool,
    /// Length of each low-power dip
    pub low_power_dwell_us: u32,
}

impl SweepConfig {
    /// Tuning range for a run
    ///
    /// Fixed runs use the direction's fixed point; sweeps use the same grid
    /// in both directions.
    #[must_use]
    pub fn range_for(&self, request: RunRequest) -> TuningRange {
        match (request.mode, request.direction) {
            (RepeatMode::Fixed, Direction::Transmit) => self.fixed_tx.as_range(),
            (RepeatMode::Fixed, Direction::Receive) => self.fixed_rx.as_range(),
            (RepeatMode::Sweep, _) => self.sweep_range(),
        }
    }

    /// The sweep grid
    #[must_use]
    pub const fn sweep_range(&self) -> TuningRange {
        TuningRange {
            coarse: self.sweep_start.coarse..self.sweep_coarse_stop,
            mid: self.sweep_start.mid..self.steps_per_config,
            fine: self.sweep_start.fine..self.steps_per_config,
        }
    }

    /// Set the low-power flag (returns new config)
    #[must_use]
    pub const fn with_low_power(self, low_power: bool) -> Self {
        Self { low_power, ..self }
    }

    /// Set the repeats per point (returns new config)
    #[must_use]
    pub const fn with_packets_per_point(self, packets_per_point: u32) -> Self {
        Self {
            packets_per_point,
            ..self
        }
    }

    /// Set the mid/fine sweep bound (returns new config)
    #[must_use]
    pub const fn with_steps_per_config(self, steps_per_config: u8) -> Self {
        Self {
            steps_per_config,
            ..self
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        crate::config::default_sweep_config()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SweepConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Sweep(tx={}, rx={}, grid={}, n/cfg={}, lp={})",
            self.fixed_tx,
            self.fixed_rx,
            self.sweep_range(),
            self.packets_per_point,
            self.low_power
        );
    }
}

/// Drives the radio through a sweep or fixed run
///
/// The packet counter and the outgoing packet live inside [`run`], so
/// consecutive runs never share state.
///
/// [`run`]: SweepController::run
pub struct SweepController<R, P, D> {
    radio: R,
    power: LowPowerCycle<P, D>,
    config: SweepConfig,
}

impl<R, P, D> SweepController<R, P, D>
where
    R: RadioDriver,
    P: PowerControl,
    D: DelayNs,
{
    /// Create a controller over a radio, power switch and delay
    #[must_use]
    pub const fn new(radio: R, power: P, delay: D, config: SweepConfig) -> Self {
        Self {
            radio,
            power: LowPowerCycle::new(power, delay, config.low_power_dwell_us),
            config,
        }
    }

    /// Current configuration
    #[must_use]
    pub const fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Access the radio driver
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Low-power helper (exposes the dip count)
    #[must_use]
    pub const fn power(&self) -> &LowPowerCycle<P, D> {
        &self.power
    }

    /// Repeatedly send or receive as requested.
    ///
    /// Returns the number of radio operations performed, which equals the
    /// bound for [`PacketLimit::Count`]. With [`PacketLimit::Unbounded`]
    /// this never returns.
    pub async fn run(&mut self, request: RunRequest, limit: PacketLimit) -> u32 {
        let range = self.config.range_for(request);

        match request.mode {
            RepeatMode::Fixed => info!("Fixed {} at {}", request.direction, range.start()),
            RepeatMode::Sweep => info!("Sweeping {}", request.direction),
        }

        let mut counter: u32 = 0;
        if limit.is_reached(counter) {
            return counter;
        }

        loop {
            for point in range.points() {
                if self.config.low_power {
                    self.power.dip().await;
                }

                if request.mode == RepeatMode::Sweep {
                    info!("coarse={}, middle={}, fine={}", point.coarse, point.mid, point.fine);
                }

                for _ in 0..self.config.packets_per_point {
                    match request.direction {
                        Direction::Receive => self.radio.receive(point).await,
                        Direction::Transmit => {
                            let packet = TxPacket::new(counter, point);
                            self.radio.send(point, packet.as_ref()).await;
                        }
                    }

                    counter = counter.wrapping_add(1);
                    if limit.is_reached(counter) {
                        return counter;
                    }
                }
            }
        }
    }

    /// Give back the radio, power switch and delay
    pub fn release(self) -> (R, P, D) {
        let (power, delay) = self.power.release();
        (self.radio, power, delay)
    }
}
