//! # Cartesian Components Module
//!
//! The x/y form a polar vector takes once decomposed. Components are plain
//! `f64` pairs; summing them is how vectors are added.
//!
//! ```rust
//! use physvek::vectors::cartesian::CartesianComponents;
//!
//! let a = CartesianComponents::new(3.0, 6.0);
//! let b = CartesianComponents::new(4.0, 10.0);
//! let sum = a + b;
//! assert_eq!(sum.magnitude(), 17.0);
//! ```

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Two-dimensional Cartesian components of a vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianComponents {
    /// X-component (toward 0°)
    pub x: f64,
    /// Y-component (toward 90°)
    pub y: f64,
}

impl CartesianComponents {
    /// Creates new components
    pub fn new(x: f64, y: f64) -> Self {
        CartesianComponents { x, y }
    }

    /// Euclidean length, `sqrt(x² + y²)`; never negative
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// True when both components are exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// True when neither component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to a nalgebra vector
    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Creates components from a nalgebra vector
    pub fn from_vector2(v: &Vector2<f64>) -> Self {
        CartesianComponents { x: v.x, y: v.y }
    }
}

impl Add for CartesianComponents {
    type Output = CartesianComponents;

    fn add(self, other: CartesianComponents) -> CartesianComponents {
        CartesianComponents::from_vector2(&(self.to_vector2() + other.to_vector2()))
    }
}

impl Sum for CartesianComponents {
    fn sum<I: Iterator<Item = CartesianComponents>>(iter: I) -> Self {
        iter.fold(CartesianComponents::default(), |acc, c| acc + c)
    }
}

impl From<Vector2<f64>> for CartesianComponents {
    fn from(v: Vector2<f64>) -> Self {
        CartesianComponents::from_vector2(&v)
    }
}

impl From<CartesianComponents> for Vector2<f64> {
    fn from(c: CartesianComponents) -> Self {
        c.to_vector2()
    }
}
