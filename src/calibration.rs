//! Analog Calibration
//!
//! One-time calibration of the mote's clocks and LC oscillator, run before
//! any sweep. Either the optical programmer supplies reference pulses and
//! the BSP tunes itself against them, or known-good codes are written
//! directly.

/// Codes written by a manual calibration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualCalibration {
    /// HF clock coarse code
    pub hf_coarse: u8,
    /// HF clock fine code
    pub hf_fine: u8,
    /// LC oscillator code
    pub lc_code: u16,
    /// 2 MHz RC oscillator coarse code
    pub rc2m_coarse: u8,
    /// 2 MHz RC oscillator fine code
    pub rc2m_fine: u8,
    /// 2 MHz RC oscillator superfine code
    pub rc2m_superfine: u8,
    /// IF clock coarse code
    pub if_coarse: u8,
    /// IF clock fine code
    pub if_fine: u8,
}

impl Default for ManualCalibration {
    fn default() -> Self {
        crate::config::default_manual_calibration()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ManualCalibration {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "HF={}/{} LC={} RC2M={}/{}/{} IF={}/{}",
            self.hf_coarse,
            self.hf_fine,
            self.lc_code,
            self.rc2m_coarse,
            self.rc2m_fine,
            self.rc2m_superfine,
            self.if_coarse,
            self.if_fine
        );
    }
}

/// How the mote is calibrated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationMethod {
    /// Tune against the optical programmer's reference
    Optical,
    /// Write fixed codes
    Manual(ManualCalibration),
}

#[cfg(feature = "embedded")]
impl defmt::Format for CalibrationMethod {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Optical => defmt::write!(f, "optical"),
            Self::Manual(settings) => defmt::write!(f, "manual({})", settings),
        }
    }
}

/// Calibration routines provided by the board support package
pub trait Calibrator {
    /// Run the optical calibration; returns once the codes are locked
    fn optical_calibrate(&mut self);

    /// Apply manual calibration codes
    fn manual_calibrate(&mut self, settings: &ManualCalibration);
}

impl<T: Calibrator + ?Sized> Calibrator for &mut T {
    fn optical_calibrate(&mut self) {
        T::optical_calibrate(self);
    }

    fn manual_calibrate(&mut self, settings: &ManualCalibration) {
        T::manual_calibrate(self, settings);
    }
}

/// Calibrate with the selected method
pub fn calibrate<C: Calibrator>(calibrator: &mut C, method: CalibrationMethod) {
    match method {
        CalibrationMethod::Optical => {
            info!("Optical calibration");
            calibrator.optical_calibrate();
        }
        CalibrationMethod::Manual(settings) => {
            info!("Manual calibration: {}", settings);
            calibrator.manual_calibrate(&settings);
        }
    }
}
