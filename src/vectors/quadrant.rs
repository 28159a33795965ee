//! Quadrant classification of a resultant's summed components.
//!
//! `atan(y / x)` only spans (-90°, 90°). Mapping it onto a 0°–360° compass
//! angle depends on the signs of `x` and `y`; every sign combination is a
//! variant here and the correction for each lives in one `match`.

use crate::constants::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG, NEGATIVE_Y_DEG, POSITIVE_Y_DEG, RAD2DEG};

/// Where a point `(x, y)` lies relative to the axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// x > 0, y > 0
    First,
    /// x < 0, y > 0
    Second,
    /// x < 0, y < 0
    Third,
    /// x > 0, y < 0
    Fourth,
    /// x > 0, y == 0
    PositiveX,
    /// x < 0, y == 0
    NegativeX,
    /// x == 0, y > 0
    PositiveY,
    /// x == 0, y < 0
    NegativeY,
    /// x == 0, y == 0
    Origin,
}

impl Quadrant {
    /// Classifies a point by the signs of its components
    ///
    /// Returns `None` when either component is NaN. Negative zero counts as
    /// zero.
    pub fn of(x: f64, y: f64) -> Option<Quadrant> {
        use std::cmp::Ordering::*;

        let quadrant = match (x.partial_cmp(&0.0)?, y.partial_cmp(&0.0)?) {
            (Greater, Greater) => Quadrant::First,
            (Less, Greater) => Quadrant::Second,
            (Less, Less) => Quadrant::Third,
            (Greater, Less) => Quadrant::Fourth,
            (Greater, Equal) => Quadrant::PositiveX,
            (Less, Equal) => Quadrant::NegativeX,
            (Equal, Greater) => Quadrant::PositiveY,
            (Equal, Less) => Quadrant::NegativeY,
            (Equal, Equal) => Quadrant::Origin,
        };
        Some(quadrant)
    }

    /// True when the point lies on neither axis
    pub fn is_interior(&self) -> bool {
        matches!(
            self,
            Quadrant::First | Quadrant::Second | Quadrant::Third | Quadrant::Fourth
        )
    }

    /// Compass angle in degrees for a point in this quadrant
    ///
    /// The y-axis cases return fixed angles without dividing by `x`. Finite
    /// results lie in [0, 360). Returns `None` for [`Quadrant::Origin`], whose
    /// direction is undefined.
    pub fn compass_angle(&self, x: f64, y: f64) -> Option<f64> {
        let base = || (y / x).atan() * RAD2DEG;

        let angle = match self {
            Quadrant::First | Quadrant::PositiveX => base(),
            Quadrant::Second | Quadrant::Third | Quadrant::NegativeX => base() + HALF_CIRCLE_DEG,
            Quadrant::Fourth => base() + FULL_CIRCLE_DEG,
            Quadrant::PositiveY => POSITIVE_Y_DEG,
            Quadrant::NegativeY => NEGATIVE_Y_DEG,
            Quadrant::Origin => return None,
        };

        // A vanishing negative base rounds up to a full turn
        if angle >= FULL_CIRCLE_DEG {
            Some(0.0)
        } else {
            Some(angle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 1.0, Quadrant::First)]
    #[case(-1.0, 1.0, Quadrant::Second)]
    #[case(-1.0, -1.0, Quadrant::Third)]
    #[case(1.0, -1.0, Quadrant::Fourth)]
    #[case(2.0, 0.0, Quadrant::PositiveX)]
    #[case(-2.0, 0.0, Quadrant::NegativeX)]
    #[case(0.0, 3.0, Quadrant::PositiveY)]
    #[case(0.0, -3.0, Quadrant::NegativeY)]
    #[case(0.0, 0.0, Quadrant::Origin)]
    #[case(-0.0, 0.0, Quadrant::Origin)]
    #[case(2.0, -0.0, Quadrant::PositiveX)]
    fn test_classification(#[case] x: f64, #[case] y: f64, #[case] expected: Quadrant) {
        assert_eq!(Quadrant::of(x, y), Some(expected));
    }

    #[test]
    fn test_nan_has_no_quadrant() {
        assert_eq!(Quadrant::of(f64::NAN, 1.0), None);
        assert_eq!(Quadrant::of(1.0, f64::NAN), None);
    }

    #[test]
    fn test_interior() {
        assert!(Quadrant::Third.is_interior());
        assert!(!Quadrant::NegativeY.is_interior());
        assert!(!Quadrant::Origin.is_interior());
    }

    #[rstest]
    #[case(1.0, 1.0, 45.0)]
    #[case(-1.0, 1.0, 135.0)]
    #[case(-1.0, -1.0, 225.0)]
    #[case(1.0, -1.0, 315.0)]
    #[case(5.0, 0.0, 0.0)]
    #[case(-5.0, 0.0, 180.0)]
    #[case(0.0, 5.0, 90.0)]
    #[case(0.0, -5.0, 270.0)]
    #[case(1.0, -1e-20, 0.0)]
    fn test_compass_angle(#[case] x: f64, #[case] y: f64, #[case] expected: f64) {
        let quadrant = Quadrant::of(x, y).unwrap();
        assert_relative_eq!(quadrant.compass_angle(x, y).unwrap(), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1.0, -1e-20)]
    #[case(1e300, -1e-300)]
    #[case(5.0, -f64::MIN_POSITIVE)]
    fn test_fourth_quadrant_wraps_below_full_turn(#[case] x: f64, #[case] y: f64) {
        let angle = Quadrant::Fourth.compass_angle(x, y).unwrap();
        assert!(
            (0.0..360.0).contains(&angle),
            "angle {} not in [0, 360)",
            angle
        );
    }

    #[test]
    fn test_origin_has_no_angle() {
        assert_eq!(Quadrant::Origin.compass_angle(0.0, 0.0), None);
    }

    #[test]
    fn test_infinite_components() {
        // atan(±inf) is ±90°, so axis-adjacent infinities still land correctly
        let q = Quadrant::of(1.0, f64::INFINITY).unwrap();
        assert_relative_eq!(q.compass_angle(1.0, f64::INFINITY).unwrap(), 90.0);
        let q = Quadrant::of(f64::NEG_INFINITY, 0.0).unwrap();
        assert_relative_eq!(q.compass_angle(f64::NEG_INFINITY, 0.0).unwrap(), 180.0);
    }
}
