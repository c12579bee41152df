//! # SpectralEngine Quickstart
//!
//! ```rust
//! use spectral_engine::prelude::*;
//!
//! // A = [[4, 1], [2, 3]] has eigenvalues 5 and 2
//! let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
//! let eig = Eigen2::decompose(&a).unwrap();
//! assert!((eig.values[0].re - 5.0).abs() < 1e-12);
//! assert!((eig.values[1].re - 2.0).abs() < 1e-12);
//!
//! // A⁵ through the diagonalization matches the direct product
//! let spectral = eig.pow(5).unwrap();
//! let direct = a.pow(5).unwrap();
//! assert!(compare_matrices(&spectral, &direct, 1e-6));
//! assert_eq!(direct.m, [2094.0, 1031.0, 2062.0, 1063.0]);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod cmatrix; // complex 2×2 companion type for the spectral route
pub mod matrix;
pub mod numerical_checks;
pub mod prelude;
pub mod render; // quiver plots rasterized into PNG
pub mod spectral;
pub mod trajectory;
pub mod vector;

/// Shared tolerance for degeneracy decisions (repeated eigenvalue, zero
/// determinant), applied relative to `max(1, ‖A‖∞)`.
pub const DEGENERACY_TOL: f64 = 1e-9;

// --- Public API exports ---

// Core types
pub use cmatrix::Mat2c;
pub use matrix::Mat2;
pub use vector::{Rounded, Vec2};

// Spectral decomposition
pub use spectral::{Eigen2, SpectralError};

// Repeated application and rendering
pub use render::{PlotConfig, QuiverPlot, RenderError};
pub use trajectory::{basis_trajectory, orbit};

// Cross-checks
pub use numerical_checks::{compare_matrices, naive_power, power_routes_agree};
