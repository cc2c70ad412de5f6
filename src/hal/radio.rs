//! SCM3C Radio Driver
//!
//! Transmission is blocking inside the BSP. Reception is interrupt driven:
//! the BSP arms the receiver and later calls back from the RF interrupt,
//! which is bridged to the awaiting task with a [`Signal`].

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use super::bsp;
use crate::radio::driver::{RadioDriver, RxCallback};
use crate::types::TuningPoint;

/// Application callback forwarded to from the interrupt
static RX_CALLBACK: Mutex<CriticalSectionRawMutex, Cell<Option<RxCallback>>> =
    Mutex::new(Cell::new(None));

/// Raised when a receive completes
static RX_DONE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Called by the BSP from the RF interrupt for each received packet
extern "C" fn rx_trampoline(packet: *mut u8, packet_len: u8) {
    if !packet.is_null() {
        // SAFETY: the BSP passes its receive buffer holding `packet_len`
        // bytes, valid until this callback returns.
        let data = unsafe { core::slice::from_raw_parts(packet, usize::from(packet_len)) };
        if let Some(callback) = RX_CALLBACK.lock(Cell::get) {
            callback(data);
        }
    }
    RX_DONE.signal(());
}

/// The mote's 2.4 GHz radio
pub struct Scm3cRadio {
    _private: (),
}

impl Scm3cRadio {
    /// Take the radio
    ///
    /// The receive path uses module statics, so only one instance should
    /// exist.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for Scm3cRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioDriver for Scm3cRadio {
    async fn send(&mut self, point: TuningPoint, packet: &[u8]) {
        let len = u8::try_from(packet.len()).unwrap_or(u8::MAX);
        trace!("tx {} bytes at {}", len, point);
        // SAFETY: `packet` outlives the call and holds at least `len` bytes;
        // the BSP only reads from it.
        unsafe { bsp::send_packet(point.coarse, point.mid, point.fine, packet.as_ptr(), len) };
    }

    async fn receive(&mut self, point: TuningPoint) {
        RX_DONE.reset();
        trace!("rx at {}", point);
        // SAFETY: plain register configuration inside the BSP.
        unsafe { bsp::receive_packet(point.coarse, point.mid, point.fine) };
        RX_DONE.wait().await;
    }

    fn register_rx_callback(&mut self, callback: RxCallback) {
        RX_CALLBACK.lock(|slot| slot.set(Some(callback)));
        // SAFETY: `rx_trampoline` matches the BSP's callback signature and
        // is valid for the program's lifetime.
        unsafe { bsp::radio_set_callbacks(rx_trampoline) };
    }
}
