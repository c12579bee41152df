//! Closed-form eigen-decomposition of real 2×2 matrices.
//!
//! The eigenvalues are the roots of the characteristic polynomial
//! `λ² − tr(A)·λ + det(A)`. The discriminant `tr² − 4·det` decides the
//! spectrum: a conjugate pair when negative, a repeated root when zero.
//! A repeated root is only diagonalizable when the matrix is already a
//! scalar multiple of the identity.

use std::error::Error;
use std::fmt;

use num_complex::Complex64;

use crate::cmatrix::Mat2c;
use crate::matrix::Mat2;
use crate::DEGENERACY_TOL;

/// Tolerance for the imaginary residue left after `P · Dᵏ · P⁻¹`,
/// relative to the magnitude of the result.
const RESIDUE_TOL: f64 = 1e-8;

/// Failure modes of the spectral route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpectralError {
    /// Repeated eigenvalue with a one-dimensional eigenspace (e.g. a shear).
    NotDiagonalizable,
    /// Negative power requested of a matrix with a zero eigenvalue.
    Singular,
    /// The recombined power kept an imaginary part beyond rounding noise.
    ResidualImag,
}

impl fmt::Display for SpectralError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpectralError::NotDiagonalizable => {
                write!(f, "matrix is not diagonalizable (defective eigenspace)")
            }
            SpectralError::Singular => {
                write!(f, "negative power of a singular matrix")
            }
            SpectralError::ResidualImag => {
                write!(f, "spectral power did not collapse to a real matrix")
            }
        }
    }
}

impl Error for SpectralError {}

/// Eigen-decomposition `A = P · D · P⁻¹` of a real 2×2 matrix.
///
/// `values` are ordered descending by real part, ties broken by descending
/// imaginary part; the columns of `P` are the matching unit eigenvectors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Eigen2 {
    /// Eigenvalues, possibly a complex-conjugate pair.
    pub values: [Complex64; 2],
    p: Mat2c,
    p_inv: Mat2c,
}

impl Eigen2 {
    /// Decompose `a` into eigenvalues and eigenvectors.
    pub fn decompose(a: &Mat2) -> Result<Self, SpectralError> {
        let tol = DEGENERACY_TOL * a.abs_max().max(1.0);
        let tr = a.trace();
        let det = a.det();
        let disc = tr * tr - 4.0 * det;

        if disc.abs().sqrt() <= tol {
            // Repeated root λ = tr/2: diagonalizable only for λ·I.
            let off = a.m[1].abs().max(a.m[2].abs());
            if off > tol || (a.m[0] - a.m[3]).abs() > 2.0 * tol {
                return Err(SpectralError::NotDiagonalizable);
            }
            let l = Complex64::new(tr / 2.0, 0.0);
            return Ok(Self {
                values: [l, l],
                p: Mat2c::identity(),
                p_inv: Mat2c::identity(),
            });
        }

        let (l1, l2) = if disc > 0.0 {
            let s = disc.sqrt();
            (
                Complex64::new((tr + s) / 2.0, 0.0),
                Complex64::new((tr - s) / 2.0, 0.0),
            )
        } else {
            let s = (-disc).sqrt();
            (
                Complex64::new(tr / 2.0, s / 2.0),
                Complex64::new(tr / 2.0, -s / 2.0),
            )
        };

        let p = Mat2c::from_cols(eigenvector(a, l1, tol), eigenvector(a, l2, tol));
        // Distinct eigenvalues give independent columns; the guard is for
        // near-degenerate input that slipped past the discriminant test.
        let p_inv = p.inverse().map_err(|_| SpectralError::NotDiagonalizable)?;

        Ok(Self {
            values: [l1, l2],
            p,
            p_inv,
        })
    }

    /// Eigenvector matrix `P` (unit columns).
    #[inline(always)]
    pub fn p(&self) -> Mat2c {
        self.p
    }

    /// Cached `P⁻¹`.
    #[inline(always)]
    pub fn p_inv(&self) -> Mat2c {
        self.p_inv
    }

    /// Diagonal matrix `D` of the eigenvalues.
    #[inline(always)]
    pub fn diagonal(&self) -> Mat2c {
        Mat2c::from_diagonal(self.values[0], self.values[1])
    }

    /// Whether both eigenvalues are real up to rounding.
    pub fn is_real(&self) -> bool {
        self.values
            .iter()
            .all(|l| l.im.abs() <= DEGENERACY_TOL * l.norm().max(1.0))
    }

    /// Recombine `P · D · P⁻¹`; reproduces the input to rounding.
    pub fn reconstruct(&self) -> Mat2c {
        self.p.mat_mul(&self.diagonal()).mat_mul(&self.p_inv)
    }

    /// The spectral power `Aᵏ = P · Dᵏ · P⁻¹`, cast back to the reals.
    ///
    /// Negative `k` raises the inverse eigenvalues and therefore fails on a
    /// zero eigenvalue. The cast checks that the imaginary residue of the
    /// recombination stays at rounding scale.
    pub fn pow(&self, k: i32) -> Result<Mat2, SpectralError> {
        if k < 0 {
            let scale = self.values[0].norm().max(self.values[1].norm());
            if self
                .values
                .iter()
                .any(|l| l.norm() <= DEGENERACY_TOL * scale.max(1.0))
            {
                return Err(SpectralError::Singular);
            }
        }
        let dk = Mat2c::from_diagonal(self.values[0].powi(k), self.values[1].powi(k));
        let m = self.p.mat_mul(&dk).mat_mul(&self.p_inv);
        if m.max_imag() > RESIDUE_TOL * m.abs_max().max(1.0) {
            return Err(SpectralError::ResidualImag);
        }
        Ok(m.re())
    }
}

/// Closed-form eigenvector of `a` for the eigenvalue `lambda`, unit 2-norm.
fn eigenvector(a: &Mat2, lambda: Complex64, tol: f64) -> [Complex64; 2] {
    let b = a.m[1];
    let c = a.m[2];
    let (v0, v1) = if b.abs() > tol {
        // Row 1 of (A - λI) reads (a11 - λ)·x + b·y = 0.
        (Complex64::new(b, 0.0), lambda - a.m[0])
    } else if c.abs() > tol {
        (lambda - a.m[3], Complex64::new(c, 0.0))
    } else {
        // Diagonal input: the axis whose entry matches this eigenvalue.
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        if (lambda - a.m[0]).norm() <= (lambda - a.m[3]).norm() {
            (one, zero)
        } else {
            (zero, one)
        }
    };
    let n = (v0.norm_sqr() + v1.norm_sqr()).sqrt();
    [v0 / n, v1 / n]
}
