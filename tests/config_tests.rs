//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test config_tests

use freq_sweep::app::{AppMode, RunPlan};
use freq_sweep::calibration::CalibrationMethod;
use freq_sweep::config::*;
use freq_sweep::radio::sweep::SweepConfig;
use freq_sweep::types::{PacketLimit, RepeatMode, TuningPoint};

// =============================================================================
// Tuning Point Tests
// =============================================================================

#[test]
fn fixed_points() {
    assert_eq!(fixed_tx_point(), TuningPoint::new(22, 23, 4));
    assert_eq!(fixed_rx_point(), TuningPoint::new(22, 22, 22));
}

#[test]
fn codes_fit_five_bits() {
    // LC DAC codes are 5 bits wide
    for point in [fixed_tx_point(), fixed_rx_point()] {
        assert!(point.coarse < 32 && point.mid < 32 && point.fine < 32);
    }
    assert!(STEPS_PER_CONFIG <= 32);
    assert!(SWEEP_COARSE_STOP <= 32);
}

#[test]
fn sweep_grid_not_empty() {
    assert!(SWEEP_COARSE_START < SWEEP_COARSE_STOP);
    assert!(SWEEP_MID_START < STEPS_PER_CONFIG);
    assert!(SWEEP_FINE_START < STEPS_PER_CONFIG);
    assert!(NUMPKT_PER_CFG > 0);
}

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn default_sweep_config_matches_constants() {
    let config = default_sweep_config();
    assert_eq!(config.fixed_tx, fixed_tx_point());
    assert_eq!(config.fixed_rx, fixed_rx_point());
    assert_eq!(config.sweep_start, TuningPoint::new(22, 20, 0));
    assert_eq!(config.sweep_coarse_stop, 23);
    assert_eq!(config.steps_per_config, 32);
    assert_eq!(config.packets_per_point, 1);
    assert_eq!(config.low_power, SOLAR_MODE);
    assert_eq!(config.low_power_dwell_us, LOW_POWER_DWELL_US);
    assert_eq!(SweepConfig::default(), config);
}

#[test]
fn default_grid_size() {
    let range = default_sweep_config().sweep_range();
    assert_eq!(range.len(), 12 * 32);
}

#[test]
fn default_calibration_follows_flag() {
    let method = default_calibration();
    if OPTICAL_CALIBRATE {
        assert_eq!(method, CalibrationMethod::Optical);
    } else {
        assert_eq!(method, CalibrationMethod::Manual(default_manual_calibration()));
    }
}

#[test]
fn default_run_plan_follows_mode() {
    let plan = default_run_plan();
    assert_eq!(plan, RunPlan::from_mode(APP_MODE, TX_REPEAT_MODE, RX_REPEAT_MODE));
    assert!(!plan.is_bounded());
    assert!(plan.steps().len() <= MAX_RUN_STEPS);
}

#[test]
fn transmit_burst_before_receive() {
    assert_eq!(APP_MODE, AppMode::TransmitThenReceive);
    let plan = default_run_plan();
    assert_eq!(plan.steps()[0].limit, PacketLimit::Count(TX_THEN_RX_PACKETS));
    assert_eq!(plan.steps()[0].request.mode, TX_REPEAT_MODE);
    assert_eq!(plan.steps()[1].request.mode, RX_REPEAT_MODE);
    assert_eq!(TX_REPEAT_MODE, RepeatMode::Fixed);
}

// =============================================================================
// Image Layout Tests
// =============================================================================

#[test]
fn footer_at_end_of_region() {
    assert_eq!(image::BASE_ADDR, 0);
    assert_eq!(image::SIZE, 64 * 1024);
    assert_eq!(image::CRC_OFFSET + 4, image::SIZE);
    assert_eq!(image::CODE_LENGTH_OFFSET + 4, image::CRC_OFFSET);
}

// =============================================================================
// Clock Tests
// =============================================================================

#[test]
fn core_clock_valid() {
    assert_eq!(CORE_CLOCK_HZ, 5_000_000);
    assert_eq!(CORE_CLOCK_HZ % 1_000_000, 0);
}
