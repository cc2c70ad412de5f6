//! SCM Frequency Sweep Firmware
//!
//! Entry point for the SCM3C sweep test firmware.
//! Validates the image, calibrates, then runs the configured plan.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use freq_sweep::hal::calibration::Scm3cCalibrator;
use freq_sweep::hal::delay::BusyDelay;
use freq_sweep::hal::mote::Scm3cMote;
use freq_sweep::hal::power::Scm3cPower;
use freq_sweep::hal::radio::Scm3cRadio;
use freq_sweep::prelude::*;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("SCM freq sweep v{}", env!("CARGO_PKG_VERSION"));
    info!("Initializing...");

    let mut mote = Scm3cMote::new();
    let mut radio = Scm3cRadio::new();
    let mut calibrator = Scm3cCalibrator::new();

    if let Err(err) = boot(&mut mote, &mut radio, &mut calibrator, default_calibration()) {
        error!("{} - Halting Execution", err);
        loop {
            cortex_m::asm::wfe();
        }
    }

    let config = default_sweep_config();
    info!("Controller: {}", config);

    let mut controller = SweepController::new(radio, Scm3cPower::new(), BusyDelay::default(), config);
    let plan = default_run_plan();
    info!("Mode {}: {} run(s)", APP_MODE, plan.steps().len());

    let total = run_plan(&mut controller, &plan).await;
    info!("Plan finished after {} packets", total);

    loop {
        cortex_m::asm::wfe();
    }
}
