//! SCM Frequency Sweep Firmware Library
//!
//! Test firmware for the Single Chip Mote (SCM3C). After validating the
//! loaded program and calibrating the analog front end, the mote loops
//! sending or receiving packets, either on one fixed LC setting or across
//! a grid of coarse/mid/fine settings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Boot sequence  │  Run plan  │  Sweep / fixed controller     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    COLLABORATOR TRAITS                       │
//! │  RadioDriver  │  Calibrator  │  PowerControl  │  DelayNs     │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 HAL / BSP FFI (target only)                  │
//! │  radio  │  optical / manual calibration  │  power domains    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything above the HAL builds on the host with `--features std` and is
//! exercised against test doubles.

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Must come first so the logging macros are visible to every module below
#[macro_use]
mod fmt;

// Re-export dependencies needed by the firmware binary (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_sync;

/// Hardware Abstraction Layer
///
/// Bindings to the SCM3C board support package.
#[cfg(feature = "embedded")]
pub mod hal;

/// Radio Control Logic
///
/// Driver interface, receive hook and the sweep controller.
pub mod radio;

/// Power Management
///
/// Low-power dips for solar operation.
pub mod power;

/// Analog calibration
pub mod calibration;

/// Program image integrity check
pub mod integrity;

/// Boot sequence and run plans
pub mod app;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::app::{boot, run_plan, AppMode, BootError, Mote, RunPlan, RunStep};
    pub use crate::calibration::{CalibrationMethod, Calibrator, ManualCalibration};
    pub use crate::config::*;
    pub use crate::power::{LowPowerCycle, PowerControl, PowerMode};
    pub use crate::radio::driver::{RadioDriver, RxCallback};
    pub use crate::radio::sweep::{SweepConfig, SweepController};
    pub use crate::types::*;

    // Timer seam
    pub use embedded_hal_async::delay::DelayNs;

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
