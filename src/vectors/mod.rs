//! Vector decomposition and recomposition
//!
//! Vectors arrive as (angle, magnitude) pairs. Each is split into x/y
//! components with [`decompose`]; the collected components are summed and
//! turned back into a single angle and magnitude with [`recompose`].

pub mod cartesian;
pub mod polar;
pub mod quadrant;
pub mod resultant;

pub use cartesian::CartesianComponents;
pub use polar::{decompose, PolarVector};
pub use quadrant::Quadrant;
pub use resultant::{recompose, ComponentList, Resultant};
