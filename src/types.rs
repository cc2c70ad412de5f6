//! Shared types used across the sweep firmware
//!
//! Tuning points, tuning ranges, run selectors and the outgoing packet
//! layout. These are plain `Copy` values; nothing here touches hardware.

use core::fmt;
use core::ops::Range;

/// One analog configuration of the radio's LC oscillator.
///
/// Coarse, mid and fine are three nested resolution levels of the same
/// capacitor bank; each is a 5-bit code on SCM3C.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TuningPoint {
    /// Coarse code
    pub coarse: u8,
    /// Mid code
    pub mid: u8,
    /// Fine code
    pub fine: u8,
}

impl TuningPoint {
    /// Create a tuning point from its three codes
    #[must_use]
    pub const fn new(coarse: u8, mid: u8, fine: u8) -> Self {
        Self { coarse, mid, fine }
    }

    /// Degenerate range that visits only this point
    #[must_use]
    pub const fn as_range(self) -> TuningRange {
        TuningRange {
            coarse: self.coarse..self.coarse.wrapping_add(1),
            mid: self.mid..self.mid.wrapping_add(1),
            fine: self.fine..self.fine.wrapping_add(1),
        }
    }
}

impl fmt::Debug for TuningPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c:{} m:{} f:{}", self.coarse, self.mid, self.fine)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TuningPoint {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "c:{} m:{} f:{}", self.coarse, self.mid, self.fine);
    }
}

/// Rectangular block of tuning points
///
/// Each axis is a half-open interval. Bounds are taken as given: an
/// inverted axis simply yields no points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TuningRange {
    /// Coarse codes, outermost loop
    pub coarse: Range<u8>,
    /// Mid codes
    pub mid: Range<u8>,
    /// Fine codes, innermost loop
    pub fine: Range<u8>,
}

impl TuningRange {
    /// First point of the range (the start of every axis)
    #[must_use]
    pub const fn start(&self) -> TuningPoint {
        TuningPoint::new(self.coarse.start, self.mid.start, self.fine.start)
    }

    /// Number of points visited in one pass
    #[must_use]
    pub fn len(&self) -> usize {
        self.coarse.len() * self.mid.len() * self.fine.len()
    }

    /// Check if a pass visits no points at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a point lies inside the range
    #[must_use]
    pub fn contains(&self, point: TuningPoint) -> bool {
        self.coarse.contains(&point.coarse)
            && self.mid.contains(&point.mid)
            && self.fine.contains(&point.fine)
    }

    /// Iterate one pass: coarse outermost, then mid, then fine, all ascending
    #[must_use]
    pub fn points(&self) -> TuningPoints {
        TuningPoints {
            range: self.clone(),
            next: if self.is_empty() { None } else { Some(self.start()) },
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TuningRange {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "c:[{},{}) m:[{},{}) f:[{},{})",
            self.coarse.start,
            self.coarse.end,
            self.mid.start,
            self.mid.end,
            self.fine.start,
            self.fine.end
        );
    }
}

/// Iterator over one pass of a [`TuningRange`]
#[derive(Clone, Debug)]
pub struct TuningPoints {
    range: TuningRange,
    next: Option<TuningPoint>,
}

impl Iterator for TuningPoints {
    type Item = TuningPoint;

    fn next(&mut self) -> Option<TuningPoint> {
        let current = self.next?;
        let mut following = current;

        following.fine += 1;
        if following.fine >= self.range.fine.end {
            following.fine = self.range.fine.start;
            following.mid += 1;
            if following.mid >= self.range.mid.end {
                following.mid = self.range.mid.start;
                following.coarse += 1;
            }
        }

        self.next = (following.coarse < self.range.coarse.end).then_some(following);
        Some(current)
    }
}

/// Radio direction for a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Send packets
    Transmit,
    /// Listen for packets
    Receive,
}

impl Direction {
    /// Lower-case name used in log lines
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transmit => "transmit",
            Self::Receive => "receive",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Direction {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// How the tuning space is walked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Walk the whole sweep grid
    Sweep,
    /// Stay on one configured point
    #[default]
    Fixed,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RepeatMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Sweep => defmt::write!(f, "SWEEP"),
            Self::Fixed => defmt::write!(f, "FIXED"),
        }
    }
}

/// What a single controller run does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRequest {
    /// Send or receive
    pub direction: Direction,
    /// Sweep or fixed
    pub mode: RepeatMode,
}

impl RunRequest {
    /// Transmit run
    #[must_use]
    pub const fn transmit(mode: RepeatMode) -> Self {
        Self {
            direction: Direction::Transmit,
            mode,
        }
    }

    /// Receive run
    #[must_use]
    pub const fn receive(mode: RepeatMode) -> Self {
        Self {
            direction: Direction::Receive,
            mode,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RunRequest {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} {}", self.mode, self.direction);
    }
}

/// Bound on the number of radio operations in one run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacketLimit {
    /// Run forever
    Unbounded,
    /// Stop after exactly this many operations
    Count(u32),
}

impl PacketLimit {
    /// Build from the legacy signed count, where any negative value means forever
    #[must_use]
    pub const fn from_signed(total_packets: i32) -> Self {
        if total_packets < 0 {
            Self::Unbounded
        } else {
            Self::Count(total_packets.unsigned_abs())
        }
    }

    /// Check whether `performed` operations satisfy the bound
    #[must_use]
    pub const fn is_reached(self, performed: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Count(total) => performed >= total,
        }
    }
}

impl From<i32> for PacketLimit {
    fn from(total_packets: i32) -> Self {
        Self::from_signed(total_packets)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PacketLimit {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Unbounded => defmt::write!(f, "unbounded"),
            Self::Count(n) => defmt::write!(f, "{} packets", n),
        }
    }
}

/// Outgoing test packet: sequence byte followed by the tuning codes it was sent on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxPacket([u8; TxPacket::LEN]);

impl TxPacket {
    /// Packet length in bytes
    pub const LEN: usize = 4;

    /// Build the packet for operation number `counter` at `point`
    #[must_use]
    pub const fn new(counter: u32, point: TuningPoint) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let seq = counter as u8;
        Self([seq, point.coarse, point.mid, point.fine])
    }

    /// Sequence byte (counter mod 256)
    #[must_use]
    pub const fn sequence(&self) -> u8 {
        self.0[0]
    }

    /// Tuning point recorded in the packet
    #[must_use]
    pub const fn point(&self) -> TuningPoint {
        TuningPoint::new(self.0[1], self.0[2], self.0[3])
    }

    /// Raw bytes as handed to the radio
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for TxPacket {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxPacket {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "#{} @ {}", self.sequence(), self.point());
    }
}
