// src/bin/diagonalize.rs
//! Diagonalize the demo matrix A = [[4, 1], [2, 3]] and raise it to the 5th
//! power through P · D⁵ · P⁻¹, cross-checked against the direct product.

use spectral_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
    let power = 5;

    let eig = Eigen2::decompose(&a)?;

    println!("A =\n{}", a);
    println!(
        "\nEigenvalues: {:.4} and {:.4}",
        eig.values[0].re, eig.values[1].re
    );

    let p = eig.p();
    println!("\nEigenvector matrix P (unit columns):");
    println!("| {:.4}  {:.4} |", p.m[0].re, p.m[1].re);
    println!("| {:.4}  {:.4} |", p.m[2].re, p.m[3].re);

    let d = eig.diagonal();
    println!("\nDiagonal matrix D:");
    println!("| {:.4}  {:.4} |", d.m[0].re, d.m[1].re);
    println!("| {:.4}  {:.4} |", d.m[2].re, d.m[3].re);

    let spectral = eig.pow(power)?;
    let direct = a.pow(power)?;

    // the two routes must agree to floating-point tolerance
    assert!(
        compare_matrices(&spectral, &direct, 1e-6 * direct.abs_max()),
        "spectral and direct powers diverged:\n{}\nvs\n{}",
        spectral,
        direct
    );

    println!("\nA^{} via P·D^{}·P⁻¹ =\n{:.4}", power, power, spectral);
    println!("\nA^{} directly =\n{:.4}", power, direct);

    Ok(())
}
