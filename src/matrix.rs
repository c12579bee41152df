//! Real 2×2 matrices, row-major, with integer powers by square-and-multiply.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use wide::f64x4;

use crate::vector::Vec2;

/// A real 2×2 matrix.
///
/// Storage is row-major: `[a, b, c, d]` is the matrix
///
/// ```text
/// | a  b |
/// | c  d |
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Mat2 {
    pub m: [f64; 4],
}

impl Mat2 {
    /// Build a matrix from its four entries in reading order.
    #[inline(always)]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { m: [a, b, c, d] }
    }

    /// Build a matrix from two rows.
    #[inline(always)]
    pub fn from_rows(top: Vec2, bottom: Vec2) -> Self {
        Self::new(top.x, top.y, bottom.x, bottom.y)
    }

    /// Build a diagonal matrix.
    #[inline(always)]
    pub fn from_diagonal(d0: f64, d1: f64) -> Self {
        Self::new(d0, 0.0, 0.0, d1)
    }

    /// The identity matrix.
    #[inline(always)]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// The zero matrix.
    #[inline(always)]
    pub fn zero() -> Self {
        Self { m: [0.0; 4] }
    }

    /// Column `j` (0 or 1) as a vector.
    #[inline(always)]
    pub fn col(&self, j: usize) -> Vec2 {
        Vec2::new(self.m[j], self.m[2 + j])
    }

    /// Determinant `ad - bc`.
    #[inline(always)]
    pub fn det(&self) -> f64 {
        self.m[0] * self.m[3] - self.m[1] * self.m[2]
    }

    /// Trace `a + d`.
    #[inline(always)]
    pub fn trace(&self) -> f64 {
        self.m[0] + self.m[3]
    }

    /// Transpose.
    #[inline(always)]
    pub fn transpose(&self) -> Self {
        Self::new(self.m[0], self.m[2], self.m[1], self.m[3])
    }

    /// Largest absolute entry (infinity-style magnitude of the matrix).
    #[inline(always)]
    pub fn abs_max(&self) -> f64 {
        self.m.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }

    /// Inverse via the adjugate. Fails when the determinant vanishes
    /// relative to the entry magnitude.
    pub fn inverse(&self) -> Result<Self, &'static str> {
        let det = self.det();
        if det.abs() <= crate::DEGENERACY_TOL * self.abs_max().max(1.0) {
            return Err("matrix is singular");
        }
        let inv_det = 1.0 / det;
        Ok(Self::new(
            self.m[3] * inv_det,
            -self.m[1] * inv_det,
            -self.m[2] * inv_det,
            self.m[0] * inv_det,
        ))
    }

    /// Apply the matrix to a vector.
    #[inline(always)]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0] * v.x + self.m[1] * v.y,
            self.m[2] * v.x + self.m[3] * v.y,
        )
    }

    /// SIMD-4× apply using `wide::f64x4`: transform four vectors at once.
    #[inline(always)]
    pub fn apply_simd(&self, vs: [Vec2; 4]) -> [Vec2; 4] {
        let a = f64x4::splat(self.m[0]);
        let b = f64x4::splat(self.m[1]);
        let c = f64x4::splat(self.m[2]);
        let d = f64x4::splat(self.m[3]);

        let vx = f64x4::from([vs[0].x, vs[1].x, vs[2].x, vs[3].x]);
        let vy = f64x4::from([vs[0].y, vs[1].y, vs[2].y, vs[3].y]);

        let rx = a.mul_add(vx, b * vy);
        let ry = c.mul_add(vx, d * vy);

        let xs = rx.to_array();
        let ys = ry.to_array();

        [
            Vec2::new(xs[0], ys[0]),
            Vec2::new(xs[1], ys[1]),
            Vec2::new(xs[2], ys[2]),
            Vec2::new(xs[3], ys[3]),
        ]
    }

    /// Matrix product `self * rhs`.
    #[inline(always)]
    pub fn mat_mul(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        Self::new(
            a[0] * b[0] + a[1] * b[2], // c11
            a[0] * b[1] + a[1] * b[3], // c12
            a[2] * b[0] + a[3] * b[2], // c21
            a[2] * b[1] + a[3] * b[3], // c22
        )
    }

    /// Integer power by square-and-multiply. `pow(0)` is the identity;
    /// negative exponents go through the inverse and fail on singular input.
    pub fn pow(&self, k: i32) -> Result<Self, &'static str> {
        let base = if k < 0 { self.inverse()? } else { *self };
        // i64 so that -(i32::MIN) does not overflow
        let mut e = (k as i64).unsigned_abs();
        let mut acc = Self::identity();
        let mut sq = base;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc.mat_mul(&sq);
            }
            sq = sq.mat_mul(&sq);
            e >>= 1;
        }
        Ok(acc)
    }
}

impl Add for Mat2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            m: (f64x4::from(self.m) + f64x4::from(rhs.m)).to_array(),
        }
    }
}

impl Sub for Mat2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            m: (f64x4::from(self.m) - f64x4::from(rhs.m)).to_array(),
        }
    }
}

impl Mul for Mat2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.mat_mul(&rhs)
    }
}

impl Mul<f64> for Mat2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            m: (f64x4::from(self.m) * f64x4::splat(rhs)).to_array(),
        }
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    #[inline(always)]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(rhs)
    }
}

impl Neg for Mat2 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self {
            m: (-f64x4::from(self.m)).to_array(),
        }
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dec = f.precision().unwrap_or(4);
        writeln!(f, "| {a:.dec$}  {b:.dec$} |", a = self.m[0], b = self.m[1], dec = dec)?;
        write!(f, "| {c:.dec$}  {d:.dec$} |", c = self.m[2], d = self.m[3], dec = dec)
    }
}
