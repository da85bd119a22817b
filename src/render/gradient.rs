use rayon::prelude::*;

use crate::foundation::core::Point;
use crate::render::color::ColorDef;

/// Number of gradient anchors.
pub const ANCHOR_COUNT: usize = 4;

/// Anchor coordinates span `[-ANCHOR_RANGE, ANCHOR_RANGE]` in normalized device space.
pub const ANCHOR_RANGE: f64 = 1.5;

const TIME_SCALE: f64 = 0.01;
const WEIGHT_EPSILON: f64 = 1e-4;

/// Default anchor colours (`#6C2EA9`, `#1F123C`, `#250844`, `#495C91`).
pub fn default_gradient_colors() -> [ColorDef; ANCHOR_COUNT] {
    [
        ColorDef::rgb8(0x6c, 0x2e, 0xa9),
        ColorDef::rgb8(0x1f, 0x12, 0x3c),
        ColorDef::rgb8(0x25, 0x08, 0x44),
        ColorDef::rgb8(0x49, 0x5c, 0x91),
    ]
}

/// Hashed-sine lattice value in `[-1, 1)`.
fn lattice(ix: f64, iy: f64) -> f64 {
    let n = (ix * 12.9898 + iy * 78.233).sin() * 43758.5453;
    (n - n.floor()) * 2.0 - 1.0
}

/// Continuous 2D value noise in `[-1, 1]`.
///
/// Lattice values come from a hashed sine and are blended with a smoothstep, so the result is
/// continuous in both coordinates and identical for identical inputs.
pub fn value_noise(x: f64, y: f64) -> f64 {
    let (x0, y0) = (x.floor(), y.floor());
    let (fx, fy) = (x - x0, y - y0);
    let sx = fx * fx * (3.0 - 2.0 * fx);
    let sy = fy * fy * (3.0 - 2.0 * fy);

    let top = lerp(lattice(x0, y0), lattice(x0 + 1.0, y0), sx);
    let bottom = lerp(lattice(x0, y0 + 1.0), lattice(x0 + 1.0, y0 + 1.0), sx);
    lerp(top, bottom, sy)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Anchor positions at `time` seconds, y pointing up.
pub fn anchor_points(time: f64) -> [Point; ANCHOR_COUNT] {
    let drift = time * TIME_SCALE;
    std::array::from_fn(|i| {
        let bx = i as f64 * 10.0;
        let by = i as f64 * 15.0;
        Point::new(
            value_noise(bx + drift, by) * ANCHOR_RANGE,
            value_noise(bx + drift + 100.0, by + 100.0) * ANCHOR_RANGE,
        )
    })
}

/// CPU evaluation of the four-point mesh gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientShader {
    colors: [[f64; 3]; ANCHOR_COUNT],
}

impl Default for GradientShader {
    fn default() -> Self {
        Self::new(default_gradient_colors())
    }
}

impl GradientShader {
    /// Shader blending between `colors`; their alpha is ignored.
    pub fn new(colors: [ColorDef; ANCHOR_COUNT]) -> Self {
        Self {
            colors: colors.map(|c| [c.r, c.g, c.b]),
        }
    }

    /// Colour at normalized device coordinate `p` for the given anchors.
    ///
    /// Each anchor contributes with inverse squared distance, so a pixel on an anchor takes that
    /// anchor's colour.
    pub fn color_at(&self, anchors: &[Point; ANCHOR_COUNT], p: Point) -> [f64; 3] {
        let mut acc = [0.0; 3];
        let mut total = 0.0;
        for (anchor, color) in anchors.iter().zip(&self.colors) {
            let w = 1.0 / ((p - *anchor).hypot2() + WEIGHT_EPSILON);
            total += w;
            for (a, c) in acc.iter_mut().zip(color) {
                *a += w * c;
            }
        }
        acc.map(|a| a / total)
    }

    /// Opaque premultiplied RGBA8 pixels for a `width x height` target at `time` seconds.
    ///
    /// Rows are shaded in parallel; every pixel depends only on its coordinates and `time`.
    #[tracing::instrument(skip(self))]
    pub fn shade(&self, width: u32, height: u32, time: f64) -> Vec<u8> {
        let anchors = anchor_points(time);
        let (w, h) = (width as usize, height as usize);
        let mut bytes = vec![0u8; w * h * 4];
        if w == 0 || h == 0 {
            return bytes;
        }

        bytes
            .par_chunks_mut(w * 4)
            .enumerate()
            .for_each(|(y, row)| {
                let ny = 1.0 - (y as f64 + 0.5) / h as f64 * 2.0;
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let nx = (x as f64 + 0.5) / w as f64 * 2.0 - 1.0;
                    let [r, g, b] = self.color_at(&anchors, Point::new(nx, ny));
                    px[0] = channel(r);
                    px[1] = channel(g);
                    px[2] = channel(b);
                    px[3] = 255;
                }
            });
        bytes
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
