//! Report values handed to the output collaborator

use crate::alert::is_axis_alert;
use crate::core::{AxisSample, Frame};
use crate::layout::AXIS_COUNT;
use crate::stats::{LossEstimate, Statistics};

/// Converted values of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisReport {
    /// Axis number, 1-based
    pub axis: u8,
    /// Position in degrees
    pub position_deg: f32,
    /// Speed in degrees/second
    pub speed_deg_per_sec: f32,
    /// Current in amperes
    pub current_amps: f32,
    /// Current strictly above the alert threshold
    pub alert: bool,
}

impl AxisReport {
    fn from_sample(index: usize, sample: &AxisSample, threshold: f32) -> Self {
        AxisReport {
            axis: index as u8 + 1,
            position_deg: sample.position_deg(),
            speed_deg_per_sec: sample.speed_deg_per_sec(),
            current_amps: sample.current_amps(),
            alert: is_axis_alert(sample, threshold),
        }
    }
}

/// Everything the report sink needs about one valid frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameReport {
    /// Byte offset of the frame's sync marker in the input
    pub offset: usize,
    /// Sequence number
    pub sequence: u8,
    /// Axes in axis order
    pub axes: [AxisReport; AXIS_COUNT],
}

impl FrameReport {
    /// Build a report for `frame` found at `offset`
    pub fn new(offset: usize, frame: &Frame, threshold: f32) -> Self {
        FrameReport {
            offset,
            sequence: frame.sequence,
            axes: std::array::from_fn(|i| AxisReport::from_sample(i, &frame.axes[i], threshold)),
        }
    }

    /// Whether any axis is in alert
    pub fn has_alert(&self) -> bool {
        self.axes.iter().any(|axis| axis.alert)
    }
}

/// Final snapshot of a run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Alert threshold in amperes used for the run
    pub alert_threshold_amps: f32,
    /// Accumulated counters
    pub statistics: Statistics,
    /// Lost-frame estimate, present once a frame was seen
    pub loss: Option<LossEstimate>,
}

impl Summary {
    /// Build a summary from finished statistics
    pub fn new(statistics: Statistics, alert_threshold_amps: f32) -> Self {
        Summary {
            alert_threshold_amps,
            loss: statistics.lost_frames(),
            statistics,
        }
    }

    /// Serialize the summary as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::ParseError::serialization(e.to_string()))
    }
}

/// Receiver for per-frame reports and the final summary
///
/// Formatting and output-stream selection belong to implementors.
pub trait ReportSink {
    /// Called once per valid frame, in stream order
    fn on_frame(&mut self, report: &FrameReport);

    /// Called once at the end of a run
    fn on_summary(&mut self, _summary: &Summary) {}
}

impl ReportSink for Vec<FrameReport> {
    fn on_frame(&mut self, report: &FrameReport) {
        self.push(report.clone());
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn on_frame(&mut self, _report: &FrameReport) {}
}
