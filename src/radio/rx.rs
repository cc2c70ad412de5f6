//! Packet receive hook

use super::driver::RxCallback;

/// Called by the radio driver for each received packet.
///
/// Currently inert. The buffer belongs to the driver and must not be kept.
pub fn on_rx(packet: &[u8]) {
    let _ = packet;
}

/// [`on_rx`] as a registrable callback
pub const ON_RX: RxCallback = on_rx;
