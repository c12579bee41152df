//! Quiver-style rendering of 2-D vectors, rasterized by hand into an RGBA
//! buffer and encoded as PNG.
//!
//! Arrows are drawn in world coordinates over a fixed viewport (the demo uses
//! `[-10, 10]²`, the window of the original plot), with axes, a dashed grid,
//! and alpha-blended strokes. Series identity is carried by color: grey for
//! the basis, blue for eigenvectors, a warm ramp for successive powers.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Pixel, Rgba, RgbaImage};

use crate::vector::Vec2;

/// Canvas background.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Axis strokes.
pub const AXIS_GREY: Rgba<u8> = Rgba([140, 140, 140, 255]);
/// Dashed grid strokes.
pub const GRID_GREY: Rgba<u8> = Rgba([205, 205, 205, 160]);
/// Standard basis vectors.
pub const BASIS_GREY: Rgba<u8> = Rgba([110, 110, 110, 255]);
/// Eigenvector arrows.
pub const EIGEN_BLUE: Rgba<u8> = Rgba([45, 75, 220, 255]);

/// Color for the `i`-th of `n` power series: a warm ramp, 60% opaque like
/// the translucent overlays of the original plot.
pub fn power_color(i: usize, n: usize) -> Rgba<u8> {
    let t = if n <= 1 { 0.0 } else { i as f64 / (n - 1) as f64 };
    let g = (175.0 - 130.0 * t) as u8;
    Rgba([235, g, 50, 153])
}

#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Image(image::ImageError),
    /// Zero-sized canvas, inverted range, or non-positive grid step.
    Dimension,
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}
impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "i/o error: {}", e),
            RenderError::Image(e) => write!(f, "image error: {}", e),
            RenderError::Dimension => write!(f, "invalid plot dimensions"),
        }
    }
}

impl Error for RenderError {}

/// Viewport and canvas geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// World extent left..right.
    pub x_range: (f64, f64),
    /// World extent bottom..top.
    pub y_range: (f64, f64),
    /// Spacing of the dashed grid, in world units.
    pub grid_step: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            x_range: (-10.0, 10.0),
            y_range: (-10.0, 10.0),
            grid_step: 2.0,
        }
    }
}

/// A quiver plot under construction.
pub struct QuiverPlot {
    config: PlotConfig,
    img: RgbaImage,
}

impl QuiverPlot {
    /// White canvas for the given viewport.
    pub fn new(config: PlotConfig) -> Result<Self, RenderError> {
        if config.width == 0
            || config.height == 0
            || config.x_range.0 >= config.x_range.1
            || config.y_range.0 >= config.y_range.1
            || config.grid_step <= 0.0
        {
            return Err(RenderError::Dimension);
        }
        let img = RgbaImage::from_pixel(config.width, config.height, BACKGROUND);
        Ok(Self { config, img })
    }

    /// World → pixel, y flipped so that world-up is screen-up.
    fn to_pixel(&self, v: Vec2) -> (f64, f64) {
        let (x0, x1) = self.config.x_range;
        let (y0, y1) = self.config.y_range;
        let px = (v.x - x0) / (x1 - x0) * (self.config.width - 1) as f64;
        let py = (1.0 - (v.y - y0) / (y1 - y0)) * (self.config.height - 1) as f64;
        (px, py)
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.config.width as i64 || y >= self.config.height as i64 {
            return;
        }
        self.img.get_pixel_mut(x as u32, y as u32).blend(&color);
    }

    /// DDA stroke in pixel space. `dash` is an (on, off) pattern in pixels.
    fn stroke(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba<u8>, dash: Option<(u32, u32)>) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = dx.abs().max(dy.abs()).ceil() as i64;
        if steps == 0 {
            self.blend(from.0.round() as i64, from.1.round() as i64, color);
            return;
        }
        for i in 0..=steps {
            if let Some((on, off)) = dash {
                if (i % (on + off) as i64) >= on as i64 {
                    continue;
                }
            }
            let t = i as f64 / steps as f64;
            let x = (from.0 + dx * t).round() as i64;
            let y = (from.1 + dy * t).round() as i64;
            self.blend(x, y, color);
        }
    }

    /// Stroke between two world points.
    fn line(&mut self, a: Vec2, b: Vec2, color: Rgba<u8>, dash: Option<(u32, u32)>) {
        let pa = self.to_pixel(a);
        let pb = self.to_pixel(b);
        self.stroke(pa, pb, color, dash);
    }

    /// Solid x- and y-axis, where they fall inside the viewport.
    pub fn axes(&mut self) {
        let (x0, x1) = self.config.x_range;
        let (y0, y1) = self.config.y_range;
        if y0 <= 0.0 && 0.0 <= y1 {
            self.line(Vec2::new(x0, 0.0), Vec2::new(x1, 0.0), AXIS_GREY, None);
        }
        if x0 <= 0.0 && 0.0 <= x1 {
            self.line(Vec2::new(0.0, y0), Vec2::new(0.0, y1), AXIS_GREY, None);
        }
    }

    /// Dashed grid at multiples of `grid_step`, skipping the axes.
    pub fn grid(&mut self) {
        let step = self.config.grid_step;
        let (x0, x1) = self.config.x_range;
        let (y0, y1) = self.config.y_range;
        let dash = Some((4, 4));

        let mut k = (x0 / step).ceil() as i64;
        while (k as f64) * step <= x1 {
            if k != 0 {
                let x = k as f64 * step;
                self.line(Vec2::new(x, y0), Vec2::new(x, y1), GRID_GREY, dash);
            }
            k += 1;
        }
        let mut k = (y0 / step).ceil() as i64;
        while (k as f64) * step <= y1 {
            if k != 0 {
                let y = k as f64 * step;
                self.line(Vec2::new(x0, y), Vec2::new(x1, y), GRID_GREY, dash);
            }
            k += 1;
        }
    }

    /// Arrow from `from` to `to` with a filled head.
    pub fn arrow(&mut self, from: Vec2, to: Vec2, color: Rgba<u8>) {
        let f = self.to_pixel(from);
        let t = self.to_pixel(to);
        let dx = t.0 - f.0;
        let dy = t.1 - f.1;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 2.0 {
            self.blend(t.0.round() as i64, t.1.round() as i64, color);
            return;
        }
        let head = (0.25 * len).min(12.0);
        let u = (dx / len, dy / len);
        let base = (t.0 - u.0 * head, t.1 - u.1 * head);
        let n = (-u.1, u.0);
        let half_w = head * 0.45;
        let left = (base.0 + n.0 * half_w, base.1 + n.1 * half_w);
        let right = (base.0 - n.0 * half_w, base.1 - n.1 * half_w);

        // Shaft stops at the head base so translucent strokes blend once.
        self.stroke(f, base, color, None);
        self.fill_triangle(t, left, right, color);
    }

    /// Scanline-free triangle fill: edge-function test over the bounding box,
    /// one blend per covered pixel.
    fn fill_triangle(&mut self, a: (f64, f64), b: (f64, f64), c: (f64, f64), color: Rgba<u8>) {
        let min_x = a.0.min(b.0).min(c.0).floor() as i64;
        let max_x = a.0.max(b.0).max(c.0).ceil() as i64;
        let min_y = a.1.min(b.1).min(c.1).floor() as i64;
        let max_y = a.1.max(b.1).max(c.1).ceil() as i64;

        let edge = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| -> f64 {
            (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
        };
        let area = edge(a, b, c);
        if area.abs() < f64::EPSILON {
            return;
        }
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f64, y as f64);
                let w0 = edge(a, b, p) / area;
                let w1 = edge(b, c, p) / area;
                let w2 = edge(c, a, p) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        let dyn_img = DynamicImage::ImageRgba8(self.img.clone());
        dyn_img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encode and write to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let bytes = self.encode()?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Borrow the pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    /// Consume the plot, yielding the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.img
    }
}
