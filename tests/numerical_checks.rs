// tests/numerical_checks.rs

use rand::Rng;
use spectral_engine::matrix::Mat2;
use spectral_engine::numerical_checks::{compare_matrices, naive_power, power_routes_agree};
use spectral_engine::spectral::Eigen2;

/// Check one input across all power routes.
fn run_single_power_check(a: &Mat2, k: u32) {
    assert!(
        power_routes_agree(a, k),
        "route mismatch for {:?} at power {}",
        a,
        k
    );
}

/// Deterministic simple test
#[test]
fn test_power_routes_demo_matrix() {
    let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
    for k in 0..=6 {
        run_single_power_check(&a, k);
    }
}

/// Randomized tests
#[test]
fn test_power_routes_randomized() {
    let mut rng = rand::thread_rng();
    let powers = [0, 1, 2, 3, 5, 8];
    for _ in 0..50 {
        let a = Mat2::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        );
        for &k in &powers {
            run_single_power_check(&a, k);
        }
    }
}

/// Edge case tests
#[test]
fn test_power_routes_edge_cases() {
    let edge_cases = vec![
        Mat2::identity(),
        Mat2::zero(),
        Mat2::from_diagonal(2.0, -7.0),
        Mat2::new(0.0, -1.0, 1.0, 0.0),   // rotation, conjugate pair
        Mat2::new(2.0, 1.0, 1.0, 2.0),    // symmetric
        Mat2::new(1.0, 2.0, 2.0, 4.0),    // rank-1
        Mat2::new(1e-6, 0.0, 0.0, 1e6),   // wide dynamic range
    ];
    for a in edge_cases {
        for k in 0..=4 {
            run_single_power_check(&a, k);
        }
    }
}

#[test]
fn naive_power_is_plain_repeated_multiplication() {
    let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
    assert_eq!(naive_power(&a, 0), Mat2::identity());
    assert_eq!(naive_power(&a, 1), a);
    assert_eq!(naive_power(&a, 2), a.mat_mul(&a));
}

#[test]
fn negative_powers_agree_between_routes() {
    let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
    let eig = Eigen2::decompose(&a).unwrap();
    let direct = a.pow(-2).unwrap();
    let spectral = eig.pow(-2).unwrap();
    assert!(compare_matrices(&direct, &spectral, 1e-9));
    // both equal the naive power of the inverse
    let reference = naive_power(&a.inverse().unwrap(), 2);
    assert!(compare_matrices(&direct, &reference, 1e-9));
}

#[test]
fn compare_matrices_tolerance() {
    let a = Mat2::identity();
    let b = Mat2::new(1.0 + 1e-8, 0.0, 0.0, 1.0);
    assert!(compare_matrices(&a, &b, 1e-6));
    assert!(!compare_matrices(&a, &b, 1e-10));
}
