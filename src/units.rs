//! Fixed-point to physical unit conversions

/// Raw position units per degree (hundredths of a degree)
pub const POSITION_SCALE: f32 = 100.0;

/// Raw speed units per degree/second (tenths of a degree/second)
pub const SPEED_SCALE: f32 = 10.0;

/// Raw current units per ampere (milliamps)
pub const CURRENT_SCALE: f32 = 1000.0;

/// Convert a raw position (hundredths of a degree) to degrees
pub fn position_to_degrees(raw: i16) -> f32 {
    raw as f32 / POSITION_SCALE
}

/// Convert a raw speed (tenths of a degree/second) to degrees/second
pub fn speed_to_deg_per_sec(raw: i16) -> f32 {
    raw as f32 / SPEED_SCALE
}

/// Convert a raw current (milliamps) to amperes
pub fn current_to_amps(raw: u16) -> f32 {
    raw as f32 / CURRENT_SCALE
}
