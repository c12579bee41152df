//! Images of vectors under repeated application of a matrix.

use crate::matrix::Mat2;
use crate::vector::Vec2;

/// Images of the standard basis under `A¹ … Aⁿ`.
///
/// Entry `i` holds `[Aⁱ⁺¹·e1, Aⁱ⁺¹·e2]`, the columns of the accumulated
/// power. The accumulated product equals what
/// [`crate::numerical_checks::naive_power`] produces at each step.
pub fn basis_trajectory(a: &Mat2, steps: u32) -> Vec<[Vec2; 2]> {
    let mut out = Vec::with_capacity(steps as usize);
    let mut power = Mat2::identity();
    for _ in 0..steps {
        power = a.mat_mul(&power);
        out.push([power.apply(Vec2::e1()), power.apply(Vec2::e2())]);
    }
    out
}

/// Orbit of a single start vector: `A·v, A²·v, …, Aⁿ·v`.
pub fn orbit(a: &Mat2, start: Vec2, steps: u32) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(steps as usize);
    let mut v = start;
    for _ in 0..steps {
        v = a.apply(v);
        out.push(v);
    }
    out
}
