//! Display formatting for results
//!
//! Angles and magnitudes are rounded to a configurable number of decimal
//! places. Very large or very small magnitudes switch to scientific notation
//! with a signed, two-digit exponent (`1.50e+09`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_DECIMALS, SCIENTIFIC_DECIMALS, SCIENTIFIC_LOWER, SCIENTIFIC_UPPER};
use crate::vectors::Resultant;
use crate::{PhysvekError, Result};

/// Largest supported number of decimal places
pub const MAX_DECIMALS: u32 = 15;

/// How results are rendered for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Decimal places for angles
    pub angle_decimals: u32,
    /// Decimal places for magnitudes in plain notation
    pub magnitude_decimals: u32,
    /// Magnitudes at or above this switch to scientific notation
    pub scientific_upper: f64,
    /// Nonzero magnitudes below this switch to scientific notation
    pub scientific_lower: f64,
    /// Mantissa digits in scientific notation
    pub scientific_decimals: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            angle_decimals: DEFAULT_DECIMALS,
            magnitude_decimals: DEFAULT_DECIMALS,
            scientific_upper: SCIENTIFIC_UPPER,
            scientific_lower: SCIENTIFIC_LOWER,
            scientific_decimals: SCIENTIFIC_DECIMALS,
        }
    }
}

impl FormatConfig {
    /// Sets both angle and magnitude decimal places
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.angle_decimals = decimals;
        self.magnitude_decimals = decimals;
        self
    }

    /// Checks that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.angle_decimals > MAX_DECIMALS || self.magnitude_decimals > MAX_DECIMALS {
            return Err(PhysvekError::Config(format!(
                "decimal places must be at most {}",
                MAX_DECIMALS
            )));
        }
        if !(self.scientific_lower >= 0.0 && self.scientific_lower < self.scientific_upper) {
            return Err(PhysvekError::Config(format!(
                "scientific_lower ({}) must be non-negative and below scientific_upper ({})",
                self.scientific_lower, self.scientific_upper
            )));
        }
        Ok(())
    }

    /// Renders an angle, rounded, never in scientific notation
    pub fn format_angle(&self, angle_degrees: f64) -> String {
        format_plain(round_to(angle_degrees, self.angle_decimals))
    }

    /// Renders a magnitude, switching to scientific notation outside the
    /// configured thresholds
    pub fn format_magnitude(&self, magnitude: f64) -> String {
        if self.is_scientific(magnitude) {
            format_scientific(magnitude, self.scientific_decimals)
        } else {
            format_plain(round_to(magnitude, self.magnitude_decimals))
        }
    }

    /// True when `magnitude` would be rendered in scientific notation
    pub fn is_scientific(&self, magnitude: f64) -> bool {
        let size = magnitude.abs();
        size.is_finite()
            && (size >= self.scientific_upper || (size != 0.0 && size < self.scientific_lower))
    }

    /// Renders both parts of a resultant
    pub fn format(&self, resultant: &Resultant) -> FormattedResultant {
        FormattedResultant {
            angle: self.format_angle(resultant.angle_degrees),
            magnitude: self.format_magnitude(resultant.magnitude),
        }
    }
}

/// A resultant rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResultant {
    pub angle: String,
    pub magnitude: String,
}

impl fmt::Display for FormattedResultant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resultant Vector Magnitude: {} units", self.magnitude)?;
        write!(f, "Resultant Vector Angle: {} degrees", self.angle)
    }
}

/// Rounds to `places` decimal places, halves away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    // Scaling can overflow for huge values that need no rounding anyway
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Shortest decimal text with at least one fractional digit (`17.0`, `56.31`)
pub fn format_plain(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Scientific notation with a signed exponent of at least two digits
/// (`1.50e+09`, `-2.50e-09`)
pub fn format_scientific(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{:.*e}", decimals, value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::CartesianComponents;
    use rstest::rstest;

    #[rstest]
    #[case(56.3099, 2, 56.31)]
    #[case(17.0, 2, 17.0)]
    #[case(1.41421356, 3, 1.414)]
    #[case(-2.345, 1, -2.3)]
    #[case(0.125, 0, 0.0)]
    #[case(2.5, 0, 3.0)]
    fn test_round_to(#[case] value: f64, #[case] places: u32, #[case] expected: f64) {
        assert_eq!(round_to(value, places), expected);
    }

    #[test]
    fn test_round_to_huge_values() {
        assert_eq!(round_to(1e306, 5), 1e306);
    }

    #[rstest]
    #[case(17.0, "17.0")]
    #[case(56.31, "56.31")]
    #[case(-3.0, "-3.0")]
    #[case(0.0, "0.0")]
    #[case(123456.5, "123456.5")]
    fn test_format_plain(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_plain(value), expected);
    }

    #[test]
    fn test_format_plain_non_finite() {
        assert_eq!(format_plain(f64::NAN), "NaN");
        assert_eq!(format_plain(f64::INFINITY), "inf");
        assert_eq!(format_plain(f64::NEG_INFINITY), "-inf");
    }

    #[rstest]
    #[case(1.5e9, "1.50e+09")]
    #[case(3e-10, "3.00e-10")]
    #[case(123456789.0, "1.23e+08")]
    #[case(-2.5e-9, "-2.50e-09")]
    #[case(1e100, "1.00e+100")]
    fn test_format_scientific(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_scientific(value, 2), expected);
    }

    #[test]
    fn test_magnitude_thresholds() {
        let config = FormatConfig::default();
        assert_eq!(config.format_magnitude(99_999_999.0), "99999999.0");
        assert_eq!(config.format_magnitude(1e8), "1.00e+08");
        assert_eq!(config.format_magnitude(5e-9), "5.00e-09");
        assert_eq!(config.format_magnitude(1e-8), "0.0");
        assert_eq!(config.format_magnitude(0.0), "0.0");
        assert_eq!(config.format_magnitude(17.4642), "17.46");
        assert_eq!(config.format_magnitude(f64::INFINITY), "inf");
    }

    #[test]
    fn test_angles_never_scientific() {
        let config = FormatConfig::default();
        assert_eq!(config.format_angle(1e-12), "0.0");
        assert_eq!(config.format_angle(359.996), "360.0");
    }

    #[test]
    fn test_format_resultant() {
        let resultant = Resultant {
            angle_degrees: 66.37062226934319,
            magnitude: 17.46424919657298,
            components: CartesianComponents::new(7.0, 16.0),
        };
        let formatted = FormatConfig::default().with_decimals(3).format(&resultant);
        assert_eq!(formatted.angle, "66.371");
        assert_eq!(formatted.magnitude, "17.464");
        assert_eq!(
            formatted.to_string(),
            "Resultant Vector Magnitude: 17.464 units\nResultant Vector Angle: 66.371 degrees"
        );
    }

    #[test]
    fn test_validate() {
        assert!(FormatConfig::default().validate().is_ok());

        let inverted = FormatConfig {
            scientific_lower: 1e9,
            ..FormatConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(PhysvekError::Config(_))));

        let too_precise = FormatConfig::default().with_decimals(40);
        assert!(too_precise.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FormatConfig = serde_json::from_str(r#"{"angle_decimals": 4}"#).unwrap();
        assert_eq!(config.angle_decimals, 4);
        assert_eq!(config.magnitude_decimals, DEFAULT_DECIMALS);
        assert_eq!(config.scientific_upper, SCIENTIFIC_UPPER);
    }
}
