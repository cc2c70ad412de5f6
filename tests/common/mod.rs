//! Test doubles shared by the integration tests
//!
//! Every double appends to one shared event log so tests can check the
//! relative order of radio, power and delay activity.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal_async::delay::DelayNs;
use freq_sweep::app::Mote;
use freq_sweep::calibration::{Calibrator, ManualCalibration};
use freq_sweep::config::image;
use freq_sweep::integrity::ImageFooter;
use freq_sweep::power::PowerControl;
use freq_sweep::radio::driver::{RadioDriver, RxCallback};
use freq_sweep::radio::sweep::{SweepConfig, SweepController};
use freq_sweep::types::TuningPoint;

/// Something a double saw
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Send(TuningPoint, Vec<u8>),
    Receive(TuningPoint),
    EnterLowPower,
    ExitLowPower,
    Delay(u32),
    Initialize,
    RegisterCallback,
    OpticalCalibrate,
    ManualCalibrate(ManualCalibration),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Radio that records every call
///
/// With `stall_after = Some(n)` the radio stops completing operations once
/// `n` have been recorded, which lets tests observe runs that never return.
pub struct MockRadio {
    pub log: Log,
    pub callback: Option<RxCallback>,
    pub stall_after: Option<usize>,
    ops: usize,
}

impl MockRadio {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            callback: None,
            stall_after: None,
            ops: 0,
        }
    }

    pub fn stalling_after(log: Log, n: usize) -> Self {
        Self {
            stall_after: Some(n),
            ..Self::new(log)
        }
    }

    pub fn ops(&self) -> usize {
        self.ops
    }

    async fn gate(&mut self) {
        if self.stall_after.is_some_and(|n| self.ops >= n) {
            core::future::pending::<()>().await;
        }
        self.ops += 1;
    }
}

impl RadioDriver for MockRadio {
    async fn send(&mut self, point: TuningPoint, packet: &[u8]) {
        self.gate().await;
        self.log.borrow_mut().push(Event::Send(point, packet.to_vec()));
    }

    async fn receive(&mut self, point: TuningPoint) {
        self.gate().await;
        self.log.borrow_mut().push(Event::Receive(point));
    }

    fn register_rx_callback(&mut self, callback: RxCallback) {
        self.callback = Some(callback);
        self.log.borrow_mut().push(Event::RegisterCallback);
    }
}

pub struct MockPower {
    pub log: Log,
}

impl PowerControl for MockPower {
    fn enter_low_power(&mut self) {
        self.log.borrow_mut().push(Event::EnterLowPower);
    }

    fn exit_low_power(&mut self) {
        self.log.borrow_mut().push(Event::ExitLowPower);
    }
}

pub struct MockDelay {
    pub log: Log,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns));
    }
}

pub struct MockCalibrator {
    pub log: Log,
}

impl Calibrator for MockCalibrator {
    fn optical_calibrate(&mut self) {
        self.log.borrow_mut().push(Event::OpticalCalibrate);
    }

    fn manual_calibrate(&mut self, settings: &ManualCalibration) {
        self.log.borrow_mut().push(Event::ManualCalibrate(*settings));
    }
}

pub struct MockMote {
    pub log: Log,
    pub image: Vec<u8>,
}

impl Mote for MockMote {
    type Image = [u8];

    fn initialize(&mut self) {
        self.log.borrow_mut().push(Event::Initialize);
    }

    fn program_image(&self) -> &[u8] {
        &self.image
    }
}

pub type Controller<'a> = SweepController<&'a mut MockRadio, MockPower, MockDelay>;

/// Controller over a borrowed mock radio
pub fn controller<'a>(radio: &'a mut MockRadio, config: SweepConfig) -> Controller<'a> {
    let log = radio.log.clone();
    SweepController::new(
        radio,
        MockPower { log: log.clone() },
        MockDelay { log },
        config,
    )
}

/// Radio operations in the log, in order
pub fn radio_events(log: &Log) -> Vec<Event> {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::Send(..) | Event::Receive(_)))
        .cloned()
        .collect()
}

/// Tuning points of the radio operations in the log, in order
pub fn visited_points(log: &Log) -> Vec<TuningPoint> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Send(point, _) | Event::Receive(point) => Some(*point),
            _ => None,
        })
        .collect()
}

/// Payloads of the sends in the log, in order
pub fn sent_packets(log: &Log) -> Vec<Vec<u8>> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Send(_, packet) => Some(packet.clone()),
            _ => None,
        })
        .collect()
}

/// Full code region with a valid footer over `code_length` bytes of pattern
pub fn valid_image(code_length: u32) -> Vec<u8> {
    let mut image = vec![0xFFu8; image::SIZE];
    for (i, byte) in image.iter_mut().take(code_length as usize).enumerate() {
        *byte = (i.wrapping_mul(31) ^ (i >> 8)) as u8;
    }
    let footer = ImageFooter::for_code(image.as_slice(), code_length).unwrap();
    footer.write(&mut image).unwrap();
    image
}
