//! Summation of decomposed vectors and recombination into polar form.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::vectors::cartesian::CartesianComponents;
use crate::vectors::polar::{decompose, PolarVector};
use crate::vectors::quadrant::Quadrant;
use crate::{PhysvekError, Result};

/// Index-aligned x and y components of a sequence of vectors
///
/// The i-th x value and the i-th y value belong to the same input vector.
/// Building the list through [`ComponentList::push`] keeps the two sides the
/// same length; [`ComponentList::from_parts`] checks it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentList {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl ComponentList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from separate x and y sequences
    ///
    /// Fails with [`PhysvekError::InvalidInput`] when the lengths differ.
    pub fn from_parts(x_values: Vec<f64>, y_values: Vec<f64>) -> Result<Self> {
        if x_values.len() != y_values.len() {
            return Err(PhysvekError::InvalidInput {
                x_len: x_values.len(),
                y_len: y_values.len(),
            });
        }
        Ok(ComponentList { x_values, y_values })
    }

    /// Appends the components of one vector
    pub fn push(&mut self, components: CartesianComponents) {
        self.x_values.push(components.x);
        self.y_values.push(components.y);
    }

    /// Decomposes a polar vector and appends its components
    pub fn push_polar(&mut self, vector: PolarVector) {
        self.push(decompose(vector.angle_degrees, vector.magnitude));
    }

    /// X components in entry order
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    /// Y components in entry order
    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// Number of vectors in the list
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// True when no vectors have been added
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Component-wise sum of every vector
    pub fn sum(&self) -> CartesianComponents {
        CartesianComponents::new(self.x_values.iter().sum(), self.y_values.iter().sum())
    }

    /// Recomposes the sum of the list; see [`recompose`]
    pub fn recompose(&self) -> Result<Resultant> {
        resultant_of(self.sum())
    }
}

impl FromIterator<CartesianComponents> for ComponentList {
    fn from_iter<I: IntoIterator<Item = CartesianComponents>>(iter: I) -> Self {
        let mut list = ComponentList::new();
        for components in iter {
            list.push(components);
        }
        list
    }
}

impl FromIterator<PolarVector> for ComponentList {
    fn from_iter<I: IntoIterator<Item = PolarVector>>(iter: I) -> Self {
        iter.into_iter().map(CartesianComponents::from).collect()
    }
}

/// The sum of a set of vectors in polar form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resultant {
    /// Compass angle in degrees, in [0, 360)
    pub angle_degrees: f64,
    /// Length of the sum; never negative
    pub magnitude: f64,
    /// Summed components the polar form was computed from
    pub components: CartesianComponents,
}

impl Resultant {
    /// The resultant as a plain polar vector
    pub fn to_polar(&self) -> PolarVector {
        PolarVector::new(self.angle_degrees, self.magnitude)
    }
}

/// Sums index-aligned component sequences and converts the total back to an
/// angle and magnitude
///
/// Empty sequences sum to the zero vector.
///
/// # Errors
///
/// - [`PhysvekError::InvalidInput`] if the sequences differ in length
/// - [`PhysvekError::DegenerateVector`] if the components sum to zero, leaving
///   the direction undefined
///
/// NaN and infinite inputs are not rejected; they surface in the result.
///
/// # Examples
///
/// ```rust
/// use physvek::vectors::recompose;
///
/// let r = recompose(&[3.0, 4.0], &[6.0, 10.0]).unwrap();
/// assert!((r.magnitude - 17.46).abs() < 0.01);
/// assert!((r.angle_degrees - 66.37).abs() < 0.01);
/// ```
pub fn recompose(x_values: &[f64], y_values: &[f64]) -> Result<Resultant> {
    if x_values.len() != y_values.len() {
        return Err(PhysvekError::InvalidInput {
            x_len: x_values.len(),
            y_len: y_values.len(),
        });
    }
    let sum = CartesianComponents::new(x_values.iter().sum(), y_values.iter().sum());
    resultant_of(sum)
}

/// Converts an already-summed vector to polar form with quadrant correction
fn resultant_of(sum: CartesianComponents) -> Result<Resultant> {
    let magnitude = sum.magnitude();

    let angle_degrees = match Quadrant::of(sum.x, sum.y) {
        Some(quadrant) => {
            debug!(
                "resultant components ({}, {}) lie in {:?}",
                sum.x, sum.y, quadrant
            );
            let angle = quadrant
                .compass_angle(sum.x, sum.y)
                .ok_or(PhysvekError::DegenerateVector)?;
            if !angle.is_finite() {
                warn!(
                    "resultant components ({}, {}) give no finite angle; angle is undefined",
                    sum.x, sum.y
                );
            }
            angle
        }
        None => {
            warn!(
                "resultant components ({}, {}) are not numbers; angle is undefined",
                sum.x, sum.y
            );
            f64::NAN
        }
    };

    Ok(Resultant {
        angle_degrees,
        magnitude,
        components: sum,
    })
}
