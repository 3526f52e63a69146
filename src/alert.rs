//! Motor current alert classification

use crate::core::{AxisSample, Frame};
use crate::layout::AXIS_COUNT;
use crate::units::current_to_amps;

/// Whether an axis draws more current than `threshold` amperes
///
/// The comparison is strict: a current exactly at the threshold is not an alert.
pub fn is_axis_alert(axis: &AxisSample, threshold: f32) -> bool {
    current_to_amps(axis.current_raw) > threshold
}

/// Whether any axis of `frame` is in alert
pub fn frame_has_alert(frame: &Frame, threshold: f32) -> bool {
    frame.axes.iter().any(|axis| is_axis_alert(axis, threshold))
}

/// Per-axis alert flags in axis order
pub fn axis_alerts(frame: &Frame, threshold: f32) -> [bool; AXIS_COUNT] {
    frame.axes.map(|axis| is_axis_alert(&axis, threshold))
}
