//! Raw BSP entry points

/// Receive-complete callback as the BSP invokes it
pub type RawRxCallback = extern "C" fn(packet: *mut u8, packet_len: u8);

extern "C" {
    /// Program the analog scan chain with the default mote configuration
    pub fn initialize_mote();

    /// Register the receive-complete callback
    #[link_name = "radio_setCallbacks"]
    pub fn radio_set_callbacks(rx_cb: RawRxCallback);

    /// Tune the LC oscillator and transmit; returns after end of frame
    pub fn send_packet(coarse: u8, mid: u8, fine: u8, packet: *const u8, packet_len: u8);

    /// Tune the LC oscillator and arm the receiver; returns immediately
    pub fn receive_packet(coarse: u8, mid: u8, fine: u8);

    /// Calibrate against the optical programmer's reference pulses
    pub fn optical_calibrate();

    /// Write fixed calibration codes
    #[allow(clippy::too_many_arguments)]
    pub fn manual_calibrate(
        hf_coarse: u8,
        hf_fine: u8,
        lc_code: u16,
        rc2m_coarse: u8,
        rc2m_fine: u8,
        rc2m_superfine: u8,
        if_coarse: u8,
        if_fine: u8,
    );

    /// Gate the radio and analog domains
    pub fn low_power_mode();

    /// Restore the radio and analog domains
    pub fn normal_power_mode();
}
