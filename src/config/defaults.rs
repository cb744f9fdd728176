//! Default values for serde deserialization.

/// Minimum clearance radius in cells.
pub fn threshold() -> u32 {
    8
}

/// Basis point separation as a multiple of the threshold.
pub fn separation_factor() -> f32 {
    1.8
}

/// Enabled flag default.
pub fn enabled() -> bool {
    true
}
