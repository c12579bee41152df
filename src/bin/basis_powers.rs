// src/bin/basis_powers.rs
//! Apply A¹ … A⁵ to the standard basis vectors and render a quiver-style
//! plot of the originals, the eigenvectors, and each power's images.
//!
//! Output: `basis_powers.png` in the working directory. The viewport is the
//! fixed `[-10, 10]²` window; later powers shoot off-canvas and are clipped,
//! which is the point of the picture: growth along the dominant eigenvector.

use spectral_engine::prelude::*;
use spectral_engine::render::{power_color, BASIS_GREY, EIGEN_BLUE};

const STEPS: u32 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
    let origin = Vec2::default();

    let eig = Eigen2::decompose(&a)?;
    let p = eig.p();
    let eigenvectors = [
        Vec2::new(p.m[0].re, p.m[2].re),
        Vec2::new(p.m[1].re, p.m[3].re),
    ];

    let trajectory = basis_trajectory(&a, STEPS);
    for (i, [v1, v2]) in trajectory.iter().enumerate() {
        println!(
            "A^{} * e1 = {}   A^{} * e2 = {}",
            i + 1,
            Rounded::new(v1, 3),
            i + 1,
            Rounded::new(v2, 3)
        );
    }

    let mut plot = QuiverPlot::new(PlotConfig::default())?;
    plot.grid();
    plot.axes();

    // grey: the untransformed basis
    plot.arrow(origin, Vec2::e1(), BASIS_GREY);
    plot.arrow(origin, Vec2::e2(), BASIS_GREY);

    // blue: the eigenvector directions
    for ev in eigenvectors {
        plot.arrow(origin, ev, EIGEN_BLUE);
    }

    // warm ramp: the basis images under successive powers
    for (i, [v1, v2]) in trajectory.iter().enumerate() {
        let color = power_color(i, STEPS as usize);
        plot.arrow(origin, *v1, color);
        plot.arrow(origin, *v2, color);
    }

    plot.save("basis_powers.png")?;
    println!("\nwrote basis_powers.png (grey: basis, blue: eigenvectors, warm ramp: A^1..A^{})", STEPS);

    Ok(())
}
