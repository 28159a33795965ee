//! Physvek: two-dimensional vector addition
//!
//! This crate adds vectors given as an angle in degrees and a magnitude. Each
//! vector is decomposed into Cartesian components, the components are summed,
//! and the total is recombined into a compass angle (0° along the positive x
//! axis, counter-clockwise, in [0°, 360°)) and a magnitude.
//!
//! ```rust
//! use physvek::vectors::{decompose, recompose};
//!
//! let a = decompose(0.0, 10.0);
//! let b = decompose(90.0, 10.0);
//! let sum = recompose(&[a.x, b.x], &[a.y, b.y]).unwrap();
//! assert!((sum.angle_degrees - 45.0).abs() < 1e-9);
//! ```

use thiserror::Error;

pub mod config;
pub mod constants;
pub mod format;
pub mod kinematics;
pub mod session;
pub mod vectors;

// Re-export commonly used types
pub use config::Config;
pub use format::{FormatConfig, FormattedResultant};
pub use session::{VectorId, VectorSet};
pub use vectors::{decompose, recompose, CartesianComponents, ComponentList, PolarVector, Resultant};

/// Main error type for the physvek library
#[derive(Debug, Error)]
pub enum PhysvekError {
    #[error("Mismatched component lists: {x_len} x values but {y_len} y values")]
    InvalidInput { x_len: usize, y_len: usize },

    #[error("Resultant is the zero vector; its angle is undefined")]
    DegenerateVector,

    #[error("Start and end time are both {time}; elapsed time is zero")]
    ZeroElapsedTime { time: f64 },

    #[error("Enter valid values: {field} {text:?} is not a number")]
    InvalidValue { field: &'static str, text: String },

    #[error("Need at least {required} vector(s), found {found}")]
    NotEnoughVectors { required: usize, found: usize },

    #[error("Vector not found: {0}")]
    VectorNotFound(VectorId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for physvek operations
pub type Result<T> = std::result::Result<T, PhysvekError>;
