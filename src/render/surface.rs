use std::sync::Arc;

use crate::font::HostRun;
use crate::foundation::core::BezPath;
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::render::backend::FrameRGBA;
use crate::render::color::ColorDef;

/// An explicit render target: one `vello_cpu` context sized to the output canvas.
///
/// Every draw call receives its target as a parameter; nothing is swapped in and out of shared
/// state.
pub struct Surface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> KinetypeResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| KinetypeError::render("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| KinetypeError::render("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(KinetypeError::render("surface width/height must be > 0"));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            width: w,
            height: h,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Discard everything drawn so far.
    pub fn clear(&mut self) {
        self.ctx.reset();
    }

    fn begin_op(&mut self) {
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    fn full_rect(&self) -> vello_cpu::kurbo::Rect {
        vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Flood the whole surface with `color`.
    pub fn fill_solid(&mut self, color: ColorDef) {
        self.begin_op();
        self.ctx.set_paint(to_cpu_color(color));
        let rect = self.full_rect();
        self.ctx.fill_rect(&rect);
    }

    /// Cover the whole surface with a premultiplied RGBA8 image of the surface's size.
    pub fn fill_image_premul(&mut self, bytes: &[u8]) -> KinetypeResult<()> {
        let pixmap = pixmap_from_premul_bytes(bytes, self.width, self.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.begin_op();
        self.ctx.set_paint(paint);
        let rect = self.full_rect();
        self.ctx.fill_rect(&rect);
        Ok(())
    }

    /// Fill a path in canvas coordinates.
    pub fn fill_path(&mut self, path: &BezPath, color: ColorDef, opacity: f32) {
        self.begin_op();
        self.ctx.set_paint(to_cpu_color(color));
        self.with_opacity(opacity, |ctx| ctx.fill_path(&bezpath_to_cpu(path)));
    }

    /// Paint a shaped host run with its pen origin on the baseline at `(x, y)`.
    pub fn fill_glyph_run(
        &mut self,
        run: &HostRun,
        x: f64,
        y: f64,
        font_size: f32,
        color: ColorDef,
        opacity: f32,
    ) {
        self.begin_op();
        self.ctx.set_paint(to_cpu_color(color));
        let (ox, oy) = (x as f32, y as f32);
        let glyphs: Vec<vello_cpu::Glyph> = run
            .glyphs
            .iter()
            .map(|g| vello_cpu::Glyph {
                id: g.id,
                x: ox + g.x,
                y: oy + g.y,
            })
            .collect();
        self.with_opacity(opacity, |ctx| {
            ctx.glyph_run(&run.font)
                .font_size(font_size)
                .fill_glyphs(glyphs.into_iter());
        });
    }

    fn with_opacity(&mut self, opacity: f32, draw: impl FnOnce(&mut vello_cpu::RenderContext)) {
        let layered = opacity < 1.0;
        if layered {
            self.ctx.push_opacity_layer(opacity.max(0.0));
        }
        draw(&mut self.ctx);
        if layered {
            self.ctx.pop_layer();
        }
    }

    /// Rasterize everything drawn so far into a frame.
    pub fn snapshot(&mut self) -> FrameRGBA {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

fn to_cpu_color(c: ColorDef) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(bytes: &[u8], w: u16, h: u16) -> KinetypeResult<vello_cpu::Pixmap> {
    if bytes.len() != usize::from(w) * usize::from(h) * 4 {
        return Err(KinetypeError::render("pixmap byte len mismatch"));
    }
    let pixels: Vec<vello_cpu::peniko::color::PremulRgba8> = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
