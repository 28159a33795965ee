//! Constants module for vector calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a complete circle
pub const FULL_CIRCLE_DEG: f64 = 360.0;
/// Degrees in a half circle
pub const HALF_CIRCLE_DEG: f64 = 180.0;
/// Compass angle of the positive y axis
pub const POSITIVE_Y_DEG: f64 = 90.0;
/// Compass angle of the negative y axis
pub const NEGATIVE_Y_DEG: f64 = 270.0;

// Output formatting
/// Magnitudes at or above this value are rendered in scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1e8;
/// Nonzero magnitudes below this value are rendered in scientific notation
pub const SCIENTIFIC_LOWER: f64 = 1e-8;
/// Decimal places used for results unless configured otherwise
pub const DEFAULT_DECIMALS: u32 = 2;
/// Mantissa digits in scientific notation
pub const SCIENTIFIC_DECIMALS: usize = 2;

// Session policy
/// Minimum number of vectors a session needs before it calculates
pub const DEFAULT_MIN_VECTORS: usize = 2;
