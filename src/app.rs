//! Application Sequence
//!
//! Boot (image check, mote bring-up, callback registration, calibration)
//! followed by a plan of controller runs.

use core::fmt;

use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::calibration::{calibrate, CalibrationMethod, Calibrator};
use crate::config::{MAX_RUN_STEPS, TX_THEN_RX_PACKETS};
use crate::integrity::{verify_image, ImageSource, IntegrityError};
use crate::power::PowerControl;
use crate::radio::driver::RadioDriver;
use crate::radio::rx::ON_RX;
use crate::radio::sweep::SweepController;
use crate::types::{PacketLimit, RepeatMode, RunRequest};

/// Which runs follow calibration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Transmit forever
    Transmit,
    /// Receive forever
    Receive,
    /// Send a burst, then receive forever
    TransmitThenReceive,
}

#[cfg(feature = "embedded")]
impl defmt::Format for AppMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Transmit => defmt::write!(f, "TX"),
            Self::Receive => defmt::write!(f, "RX"),
            Self::TransmitThenReceive => defmt::write!(f, "TX->RX"),
        }
    }
}

/// One controller run in a plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStep {
    /// What to run
    pub request: RunRequest,
    /// When to stop
    pub limit: PacketLimit,
}

impl RunStep {
    /// Create a run step
    #[must_use]
    pub const fn new(request: RunRequest, limit: PacketLimit) -> Self {
        Self { request, limit }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RunStep {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} ({})", self.request, self.limit);
    }
}

/// Plan is full
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanFull;

/// Ordered list of runs
///
/// Steps after an unbounded one are never reached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunPlan {
    steps: Vec<RunStep, MAX_RUN_STEPS>,
}

impl RunPlan {
    /// Empty plan
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Plan for one of the classic application modes
    #[must_use]
    pub fn from_mode(mode: AppMode, tx_mode: RepeatMode, rx_mode: RepeatMode) -> Self {
        let tx = RunRequest::transmit(tx_mode);
        let rx = RunRequest::receive(rx_mode);

        let mut plan = Self::new();
        // at most two steps, always below MAX_RUN_STEPS
        let _ = match mode {
            AppMode::Transmit => plan.push(RunStep::new(tx, PacketLimit::Unbounded)),
            AppMode::Receive => plan.push(RunStep::new(rx, PacketLimit::Unbounded)),
            AppMode::TransmitThenReceive => plan
                .push(RunStep::new(tx, PacketLimit::Count(TX_THEN_RX_PACKETS)))
                .and_then(|()| plan.push(RunStep::new(rx, PacketLimit::Unbounded))),
        };
        plan
    }

    /// Append a step
    ///
    /// # Errors
    ///
    /// [`PlanFull`] once `MAX_RUN_STEPS` steps are queued.
    pub fn push(&mut self, step: RunStep) -> Result<(), PlanFull> {
        self.steps.push(step).map_err(|_| PlanFull)
    }

    /// Queued steps in order
    #[must_use]
    pub fn steps(&self) -> &[RunStep] {
        &self.steps
    }

    /// Check if every step terminates
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.steps
            .iter()
            .all(|step| step.limit != PacketLimit::Unbounded)
    }
}

/// Board bring-up provided by the board support package
pub trait Mote {
    /// Where the loaded program can be read back
    type Image: ImageSource + ?Sized;

    /// Program the analog scan chain and bring up the mote
    fn initialize(&mut self);

    /// The loaded program image (the whole code region, footer included)
    fn program_image(&self) -> &Self::Image;
}

/// Boot failure; the firmware halts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootError {
    /// Program image failed its checksum
    Integrity(IntegrityError),
}

impl From<IntegrityError> for BootError {
    fn from(err: IntegrityError) -> Self {
        Self::Integrity(err)
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integrity(err) => write!(f, "programming error: {err}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BootError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Integrity(err) => defmt::write!(f, "Programming Error - {}", err),
        }
    }
}

/// Validate the image and prepare the mote for controller runs
///
/// # Errors
///
/// [`BootError::Integrity`] if the program image does not match its
/// footer. Nothing else is touched in that case.
pub fn boot<M, R, C>(
    mote: &mut M,
    radio: &mut R,
    calibrator: &mut C,
    method: CalibrationMethod,
) -> Result<(), BootError>
where
    M: Mote,
    R: RadioDriver,
    C: Calibrator,
{
    info!("Validating program integrity...");
    let footer = verify_image(mote.program_image())?;
    info!("CRC OK ({} bytes)", footer.code_length);

    mote.initialize();
    radio.register_rx_callback(ON_RX);
    calibrate(calibrator, method);

    Ok(())
}

/// Execute every step of the plan in order
///
/// Returns the total number of radio operations, which is only reachable
/// when [`RunPlan::is_bounded`] holds.
pub async fn run_plan<R, P, D>(controller: &mut SweepController<R, P, D>, plan: &RunPlan) -> u32
where
    R: RadioDriver,
    P: PowerControl,
    D: DelayNs,
{
    let mut total: u32 = 0;
    for step in plan.steps() {
        let performed = controller.run(step.request, step.limit).await;
        total = total.wrapping_add(performed);
    }
    total
}
