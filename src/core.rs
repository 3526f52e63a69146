//! Core types for the robotic arm telemetry protocol

use crate::layout::{AXIS_COUNT, SYNC_MARKER};
use crate::units::{current_to_amps, position_to_degrees, speed_to_deg_per_sec};

/// One axis's instantaneous telemetry, as carried on the wire
///
/// Values stay in their raw fixed-point form; physical units are derived
/// on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSample {
    /// Position in hundredths of a degree
    pub position_raw: i16,
    /// Speed in tenths of a degree/second
    pub speed_raw: i16,
    /// Motor current in milliamps
    pub current_raw: u16,
}

impl AxisSample {
    /// Create a new axis sample from raw values
    pub fn new(position_raw: i16, speed_raw: i16, current_raw: u16) -> Self {
        AxisSample {
            position_raw,
            speed_raw,
            current_raw,
        }
    }

    /// Position in degrees
    pub fn position_deg(&self) -> f32 {
        position_to_degrees(self.position_raw)
    }

    /// Speed in degrees/second
    pub fn speed_deg_per_sec(&self) -> f32 {
        speed_to_deg_per_sec(self.speed_raw)
    }

    /// Current in amperes
    pub fn current_amps(&self) -> f32 {
        current_to_amps(self.current_raw)
    }
}

impl std::fmt::Display for AxisSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} deg | {:.1} deg/s | {:.3} A",
            self.position_deg(),
            self.speed_deg_per_sec(),
            self.current_amps()
        )
    }
}

/// A single telemetry frame
///
/// Wire format (39 bytes, little-endian):
/// - Byte 0: sync high (0xAA)
/// - Byte 1: sync low (0x55)
/// - Byte 2: sequence number (wraps 255 -> 0)
/// - Bytes 3-38: 6 axis blocks of position (i16), speed (i16), current (u16)
///
/// A decoded frame is not assumed valid; see [`Frame::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Sync marker bytes as read from the wire
    pub sync_marker: [u8; 2],
    /// Producer-assigned sequence number
    pub sequence: u8,
    /// Axis samples in axis order 1..6
    pub axes: [AxisSample; AXIS_COUNT],
}

impl Frame {
    /// Create a new frame carrying the protocol sync marker
    pub fn new(sequence: u8, axes: [AxisSample; AXIS_COUNT]) -> Self {
        Frame {
            sync_marker: SYNC_MARKER,
            sequence,
            axes,
        }
    }

    /// Create a frame with an arbitrary marker
    ///
    /// Use with caution - only for constructing malformed test data or for
    /// inspecting bytes that were never matched by the sync scanner
    pub fn with_marker(sync_marker: [u8; 2], sequence: u8, axes: [AxisSample; AXIS_COUNT]) -> Self {
        Frame {
            sync_marker,
            sequence,
            axes,
        }
    }

    /// Check the framing of this frame
    ///
    /// Only the sync marker is considered. Sequence and axis values are data,
    /// so out-of-range readings never invalidate a frame.
    pub fn is_valid(&self) -> bool {
        self.sync_marker == SYNC_MARKER
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame(seq={}, marker={:02X?})", self.sequence, self.sync_marker)
    }
}

/// Free-function form of [`Frame::is_valid`]
pub fn is_valid(frame: &Frame) -> bool {
    frame.is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation_is_valid() {
        let frame = Frame::new(42, [AxisSample::default(); AXIS_COUNT]);
        assert_eq!(frame.sync_marker, [0xAA, 0x55]);
        assert!(frame.is_valid());
        assert!(is_valid(&frame));
    }

    #[test]
    fn test_frame_wrong_marker_is_invalid() {
        let axes = [AxisSample::default(); AXIS_COUNT];
        assert!(!Frame::with_marker([0xAA, 0x54], 0, axes).is_valid());
        assert!(!Frame::with_marker([0x55, 0xAA], 0, axes).is_valid());
    }

    #[test]
    fn test_out_of_range_values_stay_valid() {
        let wild = AxisSample::new(i16::MAX, i16::MIN, u16::MAX);
        let frame = Frame::new(255, [wild; AXIS_COUNT]);
        assert!(frame.is_valid());
    }

    #[test]
    fn test_axis_derived_units() {
        let axis = AxisSample::new(-9_000, 1_250, 2_500);
        assert_eq!(axis.position_deg(), -90.0);
        assert_eq!(axis.speed_deg_per_sec(), 125.0);
        assert_eq!(axis.current_amps(), 2.5);
        assert_eq!(axis.to_string(), "-90.00 deg | 125.0 deg/s | 2.500 A");
    }

    #[test]
    fn test_frame_display() {
        let frame = Frame::new(7, [AxisSample::default(); AXIS_COUNT]);
        assert_eq!(frame.to_string(), "Frame(seq=7, marker=[AA, 55])");
    }
}
