// tests/vector_tests.rs

use spectral_engine::vector::{Rounded, Vec2};

const EPS: f64 = 1e-12;

#[test]
fn test_new_and_fields() {
    let v = Vec2::new(1.0, 2.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
}

#[test]
fn test_basis() {
    assert_eq!(Vec2::e1(), Vec2::new(1.0, 0.0));
    assert_eq!(Vec2::e2(), Vec2::new(0.0, 1.0));
}

#[test]
fn test_dot() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(4.0, -5.0);
    // 1*4 + 2*(-5) = -6
    assert!((a.dot(&b) + 6.0).abs() < EPS);
}

#[test]
fn test_perp() {
    let e1 = Vec2::e1();
    assert_eq!(e1.perp(), Vec2::e2());
    // perp is a quarter turn: applying it twice negates
    let v = Vec2::new(3.0, -2.0);
    assert_eq!(v.perp().perp(), -v);
    // perpendicularity
    assert!((v.dot(&v.perp())).abs() < EPS);
}

#[test]
fn test_norm() {
    let v = Vec2::new(3.0, 4.0);
    assert!((v.norm() - 5.0).abs() < EPS);
}

#[test]
fn test_scale() {
    let v = Vec2::new(1.5, -2.0);
    let w = v.scale(2.0);
    assert!((w.x - 3.0).abs() < EPS);
    assert!((w.y + 4.0).abs() < EPS);
}

#[test]
fn test_ops() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(0.5, -1.0);
    assert_eq!(a + b, Vec2::new(1.5, 1.0));
    assert_eq!(a - b, Vec2::new(0.5, 3.0));
    assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
}

#[test]
fn test_array_conversions() {
    let v = Vec2::from([1.0, 2.0]);
    assert_eq!(v, Vec2::new(1.0, 2.0));
    let arr: [f64; 2] = v.into();
    assert_eq!(arr, [1.0, 2.0]);
}

#[test]
fn test_rounded_display() {
    let v = Vec2::new(1.0 / 3.0, -2.0);
    assert_eq!(format!("{}", Rounded::new(&v, 3)), "(0.333, -2.000)");
}
