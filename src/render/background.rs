use crate::foundation::error::KinetypeResult;
use crate::render::color::ColorDef;
use crate::render::gradient::GradientShader;
use crate::render::surface::Surface;

/// What goes under the text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    /// Flat colour.
    Solid(ColorDef),
    /// Time-driven mesh gradient.
    Gradient(GradientShader),
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid(ColorDef::rgb8(0, 0, 0))
    }
}

impl Background {
    /// Whether the background changes with time.
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }
}

/// Paint `background` over the whole surface for `time` seconds.
///
/// Must run before any text is painted.
pub fn paint_background(
    surface: &mut Surface,
    background: &Background,
    time: f64,
) -> KinetypeResult<()> {
    match background {
        Background::Solid(color) => {
            surface.fill_solid(*color);
            Ok(())
        }
        Background::Gradient(shader) => {
            let pixels = shader.shade(surface.width(), surface.height(), time);
            surface.fill_image_premul(&pixels)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
