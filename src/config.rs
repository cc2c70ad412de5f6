//! System configuration and build-time constants
//!
//! Every knob of the sweep application is a compile-time constant here.
//! The `const fn` builders at the bottom turn them into the runtime values
//! the controller and the boot sequence consume.

use crate::app::{AppMode, RunPlan};
use crate::calibration::{CalibrationMethod, ManualCalibration};
use crate::radio::sweep::SweepConfig;
use crate::types::{RepeatMode, TuningPoint};

/// Calibrate through the optical programmer (`true`) or with the manual values below
pub const OPTICAL_CALIBRATE: bool = true;

/// HF clock coarse code
pub const HF_COARSE: u8 = 3;

/// HF clock fine code
pub const HF_FINE: u8 = 26;

/// LC oscillator code
pub const LC_CODE: u16 = 721;

/// 2 MHz RC oscillator coarse code
pub const RC2M_COARSE: u8 = 22;

/// 2 MHz RC oscillator fine code
pub const RC2M_FINE: u8 = 14;

/// 2 MHz RC oscillator superfine code
pub const RC2M_SUPERFINE: u8 = 15;

/// IF clock coarse code
pub const IF_COARSE: u8 = 22;

/// IF clock fine code
pub const IF_FINE: u8 = 14;

/// Which runs the application performs after calibration
pub const APP_MODE: AppMode = AppMode::TransmitThenReceive;

/// Power-cycle between tuning points (mote running from a solar cell)
pub const SOLAR_MODE: bool = false;

/// Repeat mode for transmit runs
pub const TX_REPEAT_MODE: RepeatMode = RepeatMode::Fixed;

/// Repeat mode for receive runs
pub const RX_REPEAT_MODE: RepeatMode = RepeatMode::Fixed;

/// Packets sent before switching to receive in [`AppMode::TransmitThenReceive`]
pub const TX_THEN_RX_PACKETS: u32 = 100;

/// Fixed receive coarse code
pub const FIXED_LC_COARSE_RX: u8 = 22;

/// Fixed receive mid code
pub const FIXED_LC_MID_RX: u8 = 22;

/// Fixed receive fine code
pub const FIXED_LC_FINE_RX: u8 = 22;

/// Fixed transmit coarse code
pub const FIXED_LC_COARSE_TX: u8 = 22;

/// Fixed transmit mid code
pub const FIXED_LC_MID_TX: u8 = 23;

/// Fixed transmit fine code
pub const FIXED_LC_FINE_TX: u8 = 4;

/// Radio operations per tuning point
pub const NUMPKT_PER_CFG: u32 = 1;

/// Upper (exclusive) bound of the mid and fine sweep axes
pub const STEPS_PER_CONFIG: u8 = 32;

/// First coarse code of the sweep grid
pub const SWEEP_COARSE_START: u8 = 22;

/// Coarse code where the sweep grid stops (exclusive)
pub const SWEEP_COARSE_STOP: u8 = 23;

/// First mid code of the sweep grid
pub const SWEEP_MID_START: u8 = 20;

/// First fine code of the sweep grid
pub const SWEEP_FINE_START: u8 = 0;

/// Time spent in low power at each tuning point in solar mode
pub const LOW_POWER_DWELL_US: u32 = 2_000;

/// Cortex-M0 core clock after calibration (HCLK)
pub const CORE_CLOCK_HZ: u32 = 5_000_000;

/// Maximum number of runs in one plan
pub const MAX_RUN_STEPS: usize = 4;

/// Program image layout
pub mod image {
    //! Location of the image footer written by the optical programmer

    /// Base address of the instruction SRAM holding the program
    pub const BASE_ADDR: usize = 0x0000_0000;

    /// Size of the code region, footer included
    pub const SIZE: usize = 0x1_0000;

    /// Offset of the code length word
    pub const CODE_LENGTH_OFFSET: usize = 0xFFF8;

    /// Offset of the expected checksum word
    pub const CRC_OFFSET: usize = 0xFFFC;
}

/// Fixed transmit tuning point
#[must_use]
pub const fn fixed_tx_point() -> TuningPoint {
    TuningPoint::new(FIXED_LC_COARSE_TX, FIXED_LC_MID_TX, FIXED_LC_FINE_TX)
}

/// Fixed receive tuning point
#[must_use]
pub const fn fixed_rx_point() -> TuningPoint {
    TuningPoint::new(FIXED_LC_COARSE_RX, FIXED_LC_MID_RX, FIXED_LC_FINE_RX)
}

/// Controller configuration built from the constants above
#[must_use]
pub const fn default_sweep_config() -> SweepConfig {
    SweepConfig {
        fixed_tx: fixed_tx_point(),
        fixed_rx: fixed_rx_point(),
        sweep_start: TuningPoint::new(SWEEP_COARSE_START, SWEEP_MID_START, SWEEP_FINE_START),
        sweep_coarse_stop: SWEEP_COARSE_STOP,
        steps_per_config: STEPS_PER_CONFIG,
        packets_per_point: NUMPKT_PER_CFG,
        low_power: SOLAR_MODE,
        low_power_dwell_us: LOW_POWER_DWELL_US,
    }
}

/// Manual calibration settings built from the constants above
#[must_use]
pub const fn default_manual_calibration() -> ManualCalibration {
    ManualCalibration {
        hf_coarse: HF_COARSE,
        hf_fine: HF_FINE,
        lc_code: LC_CODE,
        rc2m_coarse: RC2M_COARSE,
        rc2m_fine: RC2M_FINE,
        rc2m_superfine: RC2M_SUPERFINE,
        if_coarse: IF_COARSE,
        if_fine: IF_FINE,
    }
}

/// Calibration method selected at build time
#[must_use]
pub const fn default_calibration() -> CalibrationMethod {
    if OPTICAL_CALIBRATE {
        CalibrationMethod::Optical
    } else {
        CalibrationMethod::Manual(default_manual_calibration())
    }
}

/// Run plan selected at build time
#[must_use]
pub fn default_run_plan() -> RunPlan {
    RunPlan::from_mode(APP_MODE, TX_REPEAT_MODE, RX_REPEAT_MODE)
}
