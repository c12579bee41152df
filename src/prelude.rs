// src/prelude.rs
//! The “everything” import for SpectralEngine.
//!
//! Brings you the most commonly used types and functions with one glob:
//! ```rust
//! use spectral_engine::prelude::*;
//! ```

// core data types
pub use crate::cmatrix::Mat2c;
pub use crate::matrix::Mat2;
pub use crate::vector::{Rounded, Vec2};

// spectral decomposition and powers
pub use crate::numerical_checks::{compare_matrices, naive_power};
pub use crate::spectral::{Eigen2, SpectralError};

// repeated application and rendering
pub use crate::render::{PlotConfig, QuiverPlot};
pub use crate::trajectory::{basis_trajectory, orbit};
