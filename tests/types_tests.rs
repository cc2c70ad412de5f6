//! Shared Types Tests
//!
//! Tests for tuning points, tuning ranges, packet limits and the packet layout.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test types_tests

use freq_sweep::types::{
    Direction, PacketLimit, RepeatMode, RunRequest, TuningPoint, TuningRange, TxPacket,
};

// =============================================================================
// Tuning Point Tests
// =============================================================================

#[test]
fn tuning_point_new() {
    let p = TuningPoint::new(22, 23, 4);
    assert_eq!(p.coarse, 22);
    assert_eq!(p.mid, 23);
    assert_eq!(p.fine, 4);
}

#[test]
fn tuning_point_as_range_is_single_point() {
    let p = TuningPoint::new(22, 22, 22);
    let range = p.as_range();
    assert_eq!(range.coarse, 22..23);
    assert_eq!(range.mid, 22..23);
    assert_eq!(range.fine, 22..23);
    assert_eq!(range.points().collect::<Vec<_>>(), vec![p]);
}

#[test]
fn tuning_point_debug_format() {
    let p = TuningPoint::new(1, 2, 3);
    assert_eq!(format!("{p:?}"), "c:1 m:2 f:3");
}

// =============================================================================
// Tuning Range Tests
// =============================================================================

fn grid(coarse: core::ops::Range<u8>, mid: core::ops::Range<u8>, fine: core::ops::Range<u8>) -> TuningRange {
    TuningRange { coarse, mid, fine }
}

#[test]
fn range_iterates_fine_innermost() {
    let range = grid(1..3, 5..7, 0..2);
    let points: Vec<_> = range.points().collect();
    let expected = vec![
        TuningPoint::new(1, 5, 0),
        TuningPoint::new(1, 5, 1),
        TuningPoint::new(1, 6, 0),
        TuningPoint::new(1, 6, 1),
        TuningPoint::new(2, 5, 0),
        TuningPoint::new(2, 5, 1),
        TuningPoint::new(2, 6, 0),
        TuningPoint::new(2, 6, 1),
    ];
    assert_eq!(points, expected);
}

#[test]
fn range_points_are_strictly_ascending() {
    let range = grid(22..24, 20..32, 0..32);
    let points: Vec<_> = range.points().collect();
    assert!(points.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn range_len_matches_iteration() {
    let range = grid(22..23, 20..32, 0..32);
    assert_eq!(range.len(), 12 * 32);
    assert_eq!(range.points().count(), range.len());
    assert!(!range.is_empty());
}

#[test]
fn range_start() {
    let range = grid(22..23, 20..32, 0..32);
    assert_eq!(range.start(), TuningPoint::new(22, 20, 0));
    assert_eq!(range.points().next(), Some(range.start()));
}

#[test]
fn range_inverted_axis_is_empty() {
    let range = grid(22..23, 40..32, 0..32);
    assert!(range.is_empty());
    assert_eq!(range.points().next(), None);
}

#[test]
fn range_contains() {
    let range = grid(22..23, 20..32, 0..32);
    assert!(range.contains(TuningPoint::new(22, 20, 0)));
    assert!(range.contains(TuningPoint::new(22, 31, 31)));
    assert!(!range.contains(TuningPoint::new(22, 19, 0)));
    assert!(!range.contains(TuningPoint::new(23, 20, 0)));
    assert!(!range.contains(TuningPoint::new(22, 20, 32)));
}

#[test]
fn range_reaching_top_code() {
    // Bounds at the top of u8 must not overflow while stepping
    let range = grid(254..255, 253..255, 250..255);
    assert_eq!(range.points().count(), 2 * 5);
    assert_eq!(range.points().last(), Some(TuningPoint::new(254, 254, 254)));
}

// =============================================================================
// Run Selector Tests
// =============================================================================

#[test]
fn run_request_constructors() {
    let tx = RunRequest::transmit(RepeatMode::Sweep);
    assert_eq!(tx.direction, Direction::Transmit);
    assert_eq!(tx.mode, RepeatMode::Sweep);

    let rx = RunRequest::receive(RepeatMode::Fixed);
    assert_eq!(rx.direction, Direction::Receive);
    assert_eq!(rx.mode, RepeatMode::Fixed);
}

#[test]
fn direction_names() {
    assert_eq!(Direction::Transmit.as_str(), "transmit");
    assert_eq!(Direction::Receive.as_str(), "receive");
}

#[test]
fn repeat_mode_default_is_fixed() {
    assert_eq!(RepeatMode::default(), RepeatMode::Fixed);
}

// =============================================================================
// Packet Limit Tests
// =============================================================================

#[test]
fn packet_limit_negative_is_unbounded() {
    assert_eq!(PacketLimit::from_signed(-1), PacketLimit::Unbounded);
    assert_eq!(PacketLimit::from(i32::MIN), PacketLimit::Unbounded);
}

#[test]
fn packet_limit_non_negative_is_exact() {
    assert_eq!(PacketLimit::from_signed(0), PacketLimit::Count(0));
    assert_eq!(PacketLimit::from(100), PacketLimit::Count(100));
    assert_eq!(PacketLimit::from(i32::MAX), PacketLimit::Count(i32::MAX as u32));
}

#[test]
fn packet_limit_is_reached() {
    let limit = PacketLimit::Count(3);
    assert!(!limit.is_reached(2));
    assert!(limit.is_reached(3));
    assert!(PacketLimit::Count(0).is_reached(0));
    assert!(!PacketLimit::Unbounded.is_reached(u32::MAX));
}

// =============================================================================
// Outgoing Packet Tests
// =============================================================================

#[test]
fn tx_packet_layout() {
    let packet = TxPacket::new(7, TuningPoint::new(22, 23, 4));
    assert_eq!(packet.as_bytes(), &[7, 22, 23, 4]);
    assert_eq!(packet.as_ref().len(), TxPacket::LEN);
    assert_eq!(TxPacket::LEN, 4);
}

#[test]
fn tx_packet_sequence_wraps() {
    let point = TuningPoint::new(1, 2, 3);
    assert_eq!(TxPacket::new(255, point).sequence(), 255);
    assert_eq!(TxPacket::new(256, point).sequence(), 0);
    assert_eq!(TxPacket::new(300, point).sequence(), 44);
}

#[test]
fn tx_packet_point_roundtrip() {
    let point = TuningPoint::new(22, 31, 17);
    assert_eq!(TxPacket::new(0, point).point(), point);
}
