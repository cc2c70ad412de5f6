//! Radio Driver Interface
//!
//! The controller talks to the radio only through [`RadioDriver`]. Each
//! call tunes the LC oscillator to the given point before acting, and
//! completes only when the operation (or its end-of-frame interrupt) has.

use crate::types::TuningPoint;

/// Callback invoked by the driver for every complete received packet
///
/// The slice is only valid for the duration of the call.
pub type RxCallback = fn(&[u8]);

/// Send/receive primitives of the radio
///
/// Operations are fire-and-forget from the caller's side: a failed
/// transmission or a missed packet is not reported back.
#[allow(async_fn_in_trait)]
pub trait RadioDriver {
    /// Tune to `point` and transmit `packet`
    async fn send(&mut self, point: TuningPoint, packet: &[u8]);

    /// Tune to `point` and listen for one packet
    async fn receive(&mut self, point: TuningPoint);

    /// Register the packet receive callback
    fn register_rx_callback(&mut self, callback: RxCallback);
}

impl<T: RadioDriver + ?Sized> RadioDriver for &mut T {
    async fn send(&mut self, point: TuningPoint, packet: &[u8]) {
        T::send(self, point, packet).await;
    }

    async fn receive(&mut self, point: TuningPoint) {
        T::receive(self, point).await;
    }

    fn register_rx_callback(&mut self, callback: RxCallback) {
        T::register_rx_callback(self, callback);
    }
}
