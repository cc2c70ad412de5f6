//! SCM3C Calibration Routines

use super::bsp;
use crate::calibration::{Calibrator, ManualCalibration};

/// Calibration routines of the BSP
#[derive(Default)]
pub struct Scm3cCalibrator {
    _private: (),
}

impl Scm3cCalibrator {
    /// Take the calibrator
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Calibrator for Scm3cCalibrator {
    fn optical_calibrate(&mut self) {
        // SAFETY: blocks until the optical routine has locked all codes.
        unsafe { bsp::optical_calibrate() };
    }

    fn manual_calibrate(&mut self, settings: &ManualCalibration) {
        // SAFETY: plain scan-chain writes of the given codes.
        unsafe {
            bsp::manual_calibrate(
                settings.hf_coarse,
                settings.hf_fine,
                settings.lc_code,
                settings.rc2m_coarse,
                settings.rc2m_fine,
                settings.rc2m_superfine,
                settings.if_coarse,
                settings.if_fine,
            );
        }
    }
}
