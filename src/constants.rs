//! Numeric constants shared by the conversion formulas.

/// Scale between a unit scalar and an 8-bit channel
pub const BYTE_SCALE: f64 = 255.0;

/// Fully opaque alpha byte
pub const OPAQUE: u8 = 0xFF;

/// Upper bound of the hue domain, in degrees
pub const HUE_MAX: f64 = 360.0;

/// Width of one hue sextant, in degrees
pub const SEXTANT_DEGREES: f64 = 60.0;

/// Upper bound of the hue domain accepted by the luma/chroma/hue composer
pub const LUMA_HUE_MAX: f64 = 359.0;

/// Red weight of Rec. 601 luma
pub const LUMA_RED: f64 = 0.30;

/// Green weight of Rec. 601 luma
pub const LUMA_GREEN: f64 = 0.59;

/// Blue weight of Rec. 601 luma
pub const LUMA_BLUE: f64 = 0.11;
