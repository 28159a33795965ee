//! # Polar Vector Module
//!
//! A vector entered by a user is an angle in degrees (0° on the positive x
//! axis, counter-clockwise) and a magnitude. This module converts that form
//! into Cartesian components.
//!
//! Magnitudes are not normalized: a negative magnitude is valid and points the
//! vector the opposite way, exactly as the trigonometric identities give it.
//!
//! ```rust
//! use physvek::vectors::polar::decompose;
//!
//! let components = decompose(0.0, 10.0);
//! assert_eq!(components.x, 10.0);
//! assert_eq!(components.y, 0.0);
//! ```

use log::trace;
use serde::{Deserialize, Serialize};

use crate::constants::DEG2RAD;
use crate::vectors::cartesian::CartesianComponents;

/// A vector given as an angle in degrees and a magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarVector {
    /// Direction in degrees, counter-clockwise from the positive x axis
    pub angle_degrees: f64,
    /// Length; negative values flip the direction
    pub magnitude: f64,
}

impl PolarVector {
    /// Creates a new polar vector
    pub fn new(angle_degrees: f64, magnitude: f64) -> Self {
        PolarVector {
            angle_degrees,
            magnitude,
        }
    }

    /// Returns the angle in radians
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees * DEG2RAD
    }

    /// Converts to Cartesian components
    pub fn to_cartesian(&self) -> CartesianComponents {
        decompose(self.angle_degrees, self.magnitude)
    }
}

impl From<PolarVector> for CartesianComponents {
    fn from(vector: PolarVector) -> Self {
        vector.to_cartesian()
    }
}

/// Decomposes a vector into its x and y components
///
/// - `x = cos(angle) * magnitude`
/// - `y = sin(angle) * magnitude`
///
/// Never fails. NaN or infinite inputs produce NaN or infinite components.
pub fn decompose(angle_degrees: f64, magnitude: f64) -> CartesianComponents {
    let angle_radians = angle_degrees * DEG2RAD;
    let (sin, cos) = angle_radians.sin_cos();
    let components = CartesianComponents::new(cos * magnitude, sin * magnitude);
    trace!(
        "decomposed {}° × {} into ({}, {})",
        angle_degrees,
        magnitude,
        components.x,
        components.y
    );
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_decompose_on_axes() {
        let east = decompose(0.0, 10.0);
        assert_eq!(east.x, 10.0);
        assert_eq!(east.y, 0.0);

        let north = decompose(90.0, 10.0);
        assert_abs_diff_eq!(north.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(north.y, 10.0, epsilon = 1e-12);

        let west = decompose(180.0, 2.0);
        assert_abs_diff_eq!(west.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(west.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_decompose_zero_magnitude() {
        let c = decompose(123.0, 0.0);
        assert_eq!(c.x, 0.0);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn test_negative_magnitude_flips_direction() {
        let forward = decompose(30.0, 4.0);
        let backward = decompose(30.0, -4.0);
        assert_relative_eq!(forward.x, -backward.x);
        assert_relative_eq!(forward.y, -backward.y);
    }

    #[test]
    fn test_magnitude_is_preserved() {
        for &(angle, magnitude) in &[(17.0, 3.5), (200.0, 12.0), (-45.0, 7.0), (721.0, -9.25)] {
            let c = decompose(angle, magnitude);
            assert_relative_eq!(c.magnitude(), f64::abs(magnitude), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(decompose(f64::NAN, 1.0).x.is_nan());
        assert!(decompose(0.0, f64::NAN).y.is_nan());
        assert!(decompose(0.0, f64::INFINITY).x.is_infinite());
    }

    #[test]
    fn test_polar_vector_conversion() {
        let v = PolarVector::new(90.0, 3.0);
        assert_relative_eq!(v.angle_radians(), std::f64::consts::FRAC_PI_2);
        let c: CartesianComponents = v.into();
        assert_abs_diff_eq!(c.y, 3.0, epsilon = 1e-12);
    }
}
