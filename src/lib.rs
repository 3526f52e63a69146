//! # Robotic Arm Telemetry Parser
//!
//! Recovers and decodes telemetry frames from the byte stream of a 6-axis robotic
//! arm controller.
//!
//! The controller emits fixed 39-byte frames, each starting with the sync marker
//! `0xAA 0x55`, but the stream may carry noise between frames. This library provides:
//!
//! - Sync marker scanning over untrusted buffers
//! - Little-endian frame decoding and encoding
//! - Per-axis current alert classification
//! - A single-pass stream walker that separates frames from noise
//! - Statistics with a wraparound-aware lost-frame estimate
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use arm_telemetry_parser::{encode_frame, AnalyzerBuilder, AxisSample, Frame};
//!
//! let frame = Frame::new(5, [AxisSample::new(1000, -25, 500); 6]);
//! let mut stream = vec![0x01, 0x02];
//! stream.extend_from_slice(&encode_frame(&frame));
//!
//! let analyzer = AnalyzerBuilder::new().with_alert_threshold(5.0).build()?;
//! let stats = analyzer.analyze(&stream)?;
//! assert_eq!(stats.noise_bytes, 2);
//! assert_eq!(stats.valid_frames, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod alert;
pub mod core;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod report;
pub mod stats;
pub mod sync;
pub mod units;
pub mod walker;

pub use alert::{frame_has_alert, is_axis_alert};
pub use crate::core::{is_valid, AxisSample, Frame};
pub use encoding::{decode_frame, encode_frame, FrameDecoder, FrameEncoder};
pub use error::{ParseError, Result};
pub use parser::{Analyzer, AnalyzerBuilder, AnalyzerConfig};
pub use report::{AxisReport, FrameReport, NullSink, ReportSink, Summary};
pub use stats::{LossEstimate, SequenceRange, Statistics};
pub use sync::find_sync;
pub use units::{current_to_amps, position_to_degrees, speed_to_deg_per_sec};
pub use walker::{StreamEvent, StreamWalker};

/// Wire layout constants of the telemetry protocol
pub mod layout {
    /// First sync byte
    pub const SYNC_HIGH: u8 = 0xAA;

    /// Second sync byte
    pub const SYNC_LOW: u8 = 0x55;

    /// Full sync marker as it appears on the wire
    pub const SYNC_MARKER: [u8; 2] = [SYNC_HIGH, SYNC_LOW];

    /// Number of axes reported in every frame
    pub const AXIS_COUNT: usize = 6;

    /// Size of one axis block: position (2) + speed (2) + current (2)
    pub const AXIS_BLOCK_SIZE: usize = 6;

    /// Header size: sync high + sync low + sequence
    pub const HEADER_SIZE: usize = 3;

    /// Total frame size in bytes
    pub const FRAME_SIZE: usize = HEADER_SIZE + AXIS_COUNT * AXIS_BLOCK_SIZE; // 39

    /// Number of distinct sequence values before the counter wraps
    pub const SEQUENCE_MODULUS: usize = 256;

    /// Default alert current threshold in amperes
    pub const DEFAULT_ALERT_THRESHOLD_AMPS: f32 = 5.0;
}
