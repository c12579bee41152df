//! Complex 2×2 matrices.
//!
//! The spectral route runs over ℂ: whenever `tr² < 4·det` the eigenvalues of
//! a real matrix form a conjugate pair, so `P`, `D`, and every intermediate
//! product of `P · Dᵏ · P⁻¹` are complex even though the final power is real.

use num_complex::Complex64;

use crate::matrix::Mat2;

/// A complex 2×2 matrix, row-major like [`Mat2`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat2c {
    pub m: [Complex64; 4],
}

impl Mat2c {
    /// Build a matrix from its four entries in reading order.
    #[inline(always)]
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { m: [a, b, c, d] }
    }

    /// Build a diagonal matrix.
    #[inline(always)]
    pub fn from_diagonal(d0: Complex64, d1: Complex64) -> Self {
        let zero = Complex64::new(0.0, 0.0);
        Self::new(d0, zero, zero, d1)
    }

    /// Build a matrix from two column vectors.
    #[inline(always)]
    pub fn from_cols(c0: [Complex64; 2], c1: [Complex64; 2]) -> Self {
        Self::new(c0[0], c1[0], c0[1], c1[1])
    }

    /// The identity matrix.
    #[inline(always)]
    pub fn identity() -> Self {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        Self::new(one, zero, zero, one)
    }

    /// Determinant `ad - bc`.
    #[inline(always)]
    pub fn det(&self) -> Complex64 {
        self.m[0] * self.m[3] - self.m[1] * self.m[2]
    }

    /// Matrix product `self * rhs`.
    #[inline(always)]
    pub fn mat_mul(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        Self::new(
            a[0] * b[0] + a[1] * b[2],
            a[0] * b[1] + a[1] * b[3],
            a[2] * b[0] + a[3] * b[2],
            a[2] * b[1] + a[3] * b[3],
        )
    }

    /// Inverse via the adjugate. Fails when the determinant vanishes
    /// relative to the entry magnitude.
    pub fn inverse(&self) -> Result<Self, &'static str> {
        let det = self.det();
        let scale = self.m.iter().fold(0.0_f64, |acc, x| acc.max(x.norm()));
        if det.norm() <= crate::DEGENERACY_TOL * scale.max(1.0) {
            return Err("matrix is singular");
        }
        let inv_det = det.inv();
        Ok(Self::new(
            self.m[3] * inv_det,
            -self.m[1] * inv_det,
            -self.m[2] * inv_det,
            self.m[0] * inv_det,
        ))
    }

    /// Largest absolute imaginary part across the entries. A power of a real
    /// matrix must collapse back to the reals up to rounding; this is the
    /// residue the spectral route checks before casting.
    #[inline(always)]
    pub fn max_imag(&self) -> f64 {
        self.m.iter().fold(0.0_f64, |acc, x| acc.max(x.im.abs()))
    }

    /// Largest absolute entry (complex modulus).
    #[inline(always)]
    pub fn abs_max(&self) -> f64 {
        self.m.iter().fold(0.0_f64, |acc, x| acc.max(x.norm()))
    }

    /// Real part, entrywise.
    #[inline(always)]
    pub fn re(&self) -> Mat2 {
        Mat2::new(self.m[0].re, self.m[1].re, self.m[2].re, self.m[3].re)
    }
}

impl From<Mat2> for Mat2c {
    fn from(r: Mat2) -> Mat2c {
        Mat2c::new(
            Complex64::new(r.m[0], 0.0),
            Complex64::new(r.m[1], 0.0),
            Complex64::new(r.m[2], 0.0),
            Complex64::new(r.m[3], 0.0),
        )
    }
}
