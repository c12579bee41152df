// tests/cmatrix_tests.rs

use num_complex::Complex64;
use spectral_engine::cmatrix::Mat2c;
use spectral_engine::matrix::Mat2;

const EPS: f64 = 1e-12;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_close(x: &Mat2c, y: &Mat2c, eps: f64) {
    for (a, b) in x.m.iter().zip(y.m.iter()) {
        assert!((a - b).norm() < eps, "{:?} vs {:?}", x, y);
    }
}

#[test]
fn identity_product() {
    let a = Mat2c::new(c(1.0, 1.0), c(0.0, 2.0), c(3.0, 0.0), c(-1.0, -1.0));
    assert_close(&a.mat_mul(&Mat2c::identity()), &a, EPS);
    assert_close(&Mat2c::identity().mat_mul(&a), &a, EPS);
}

#[test]
fn det_of_diagonal() {
    let d = Mat2c::from_diagonal(c(2.0, 1.0), c(0.0, -3.0));
    // (2+i)(−3i) = 3 − 6i
    assert!((d.det() - c(3.0, -6.0)).norm() < EPS);
}

#[test]
fn inverse_round_trip() {
    let a = Mat2c::new(c(1.0, 1.0), c(0.0, 2.0), c(3.0, 0.0), c(-1.0, -1.0));
    let inv = a.inverse().unwrap();
    assert_close(&a.mat_mul(&inv), &Mat2c::identity(), 1e-12);
}

#[test]
fn singular_inverse_fails() {
    // second row is i times the first
    let a = Mat2c::new(c(1.0, 0.0), c(2.0, 0.0), c(0.0, 1.0), c(0.0, 2.0));
    assert!(a.inverse().is_err());
}

#[test]
fn promotion_and_projection() {
    let r = Mat2::new(4.0, 1.0, 2.0, 3.0);
    let z = Mat2c::from(r);
    assert!(z.max_imag() < EPS);
    assert_eq!(z.re(), r);
}

#[test]
fn from_cols_layout() {
    let z = Mat2c::from_cols([c(1.0, 0.0), c(2.0, 0.0)], [c(3.0, 0.0), c(4.0, 0.0)]);
    // columns land as [[1, 3], [2, 4]]
    assert_eq!(z.re(), Mat2::new(1.0, 3.0, 2.0, 4.0));
}

#[test]
fn max_imag_probe() {
    let z = Mat2c::new(c(1.0, 1e-3), c(0.0, 0.0), c(0.0, -2e-3), c(5.0, 0.0));
    assert!((z.max_imag() - 2e-3).abs() < EPS);
}
