//! Cross-checks between the power routes.
//!
//! Three routes compute `Aᵏ`: plain repeated multiplication (the reference),
//! square-and-multiply ([`Mat2::pow`]), and the diagonalization
//! `P · Dᵏ · P⁻¹` ([`crate::spectral::Eigen2::pow`]). They must agree to
//! floating-point tolerance on every diagonalizable input.

use crate::matrix::Mat2;
use crate::spectral::Eigen2;

const EPSILON: f64 = 1e-6;

/// Reference power: multiply `k` times, no shortcuts.
pub fn naive_power(a: &Mat2, k: u32) -> Mat2 {
    let mut acc = Mat2::identity();
    for _ in 0..k {
        acc = a.mat_mul(&acc);
    }
    acc
}

/// Compare two matrices entrywise within `eps`.
pub fn compare_matrices(x: &Mat2, y: &Mat2, eps: f64) -> bool {
    x.m.iter().zip(y.m.iter()).all(|(a, b)| (a - b).abs() <= eps)
}

/// All three routes produce the same `Aᵏ`.
///
/// The tolerance scales with the magnitude of the result: powers grow like
/// `λ_maxᵏ`, and so does the rounding error of every route.
pub fn power_routes_agree(a: &Mat2, k: u32) -> bool {
    let reference = naive_power(a, k);
    let eps = EPSILON * reference.abs_max().max(1.0);

    let direct = match a.pow(k as i32) {
        Ok(m) => m,
        Err(_) => return false,
    };
    let spectral = match Eigen2::decompose(a).and_then(|e| e.pow(k as i32)) {
        Ok(m) => m,
        Err(_) => return false,
    };

    compare_matrices(&reference, &direct, eps) && compare_matrices(&reference, &spectral, eps)
}
