use std::sync::Arc;

use crate::font::{FontMetrics, FontSlot};
use crate::foundation::core::Canvas;
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::layout::{LayoutParams, Placement, compute_text_layout};
use crate::render::background::{Background, paint_background};
use crate::render::backend::FrameRGBA;
use crate::render::color::ColorDef;
use crate::render::surface::Surface;
use crate::render::text::paint_placements;
use crate::scene::Scene;
use crate::text::input::TextInput;

/// Everything needed to draw a frame for a given animation time.
///
/// Live preview, PNG, SVG and video export all go through the same composer so a frame at time
/// `t` is identical wherever it is produced. Each call takes one snapshot of the current font;
/// a font swap shows up on the next call.
#[derive(Clone, Debug)]
pub struct FrameComposer {
    input: TextInput,
    params: LayoutParams,
    speed: f64,
    fill: ColorDef,
    placeholder: ColorDef,
    background: Background,
    font: Arc<FontSlot>,
    canvas: Canvas,
}

impl FrameComposer {
    /// Composer with white text, grey placeholder and a black background.
    ///
    /// The layout canvas must be a whole number of pixels so layout and surface agree.
    pub fn new(input: TextInput, params: LayoutParams, font: Arc<FontSlot>) -> KinetypeResult<Self> {
        params.validate()?;
        let canvas = Canvas::new(
            pixel_side("canvas_width", params.canvas_width)?,
            pixel_side("canvas_height", params.canvas_height)?,
        )?;
        Ok(Self {
            input,
            params: params.sanitized(),
            speed: 1.0,
            fill: ColorDef::rgb8(0xff, 0xff, 0xff),
            placeholder: ColorDef::rgb8(0xc0, 0xc0, 0xc0),
            background: Background::default(),
            font,
            canvas,
        })
    }

    /// Composer for a validated scene.
    pub fn from_scene(scene: &Scene, font: Arc<FontSlot>) -> KinetypeResult<Self> {
        scene.validate()?;
        Ok(Self::new(scene.text_input(), scene.layout_params(), font)?
            .with_speed(scene.speed())
            .with_colors(scene.fill(), scene.placeholder())
            .with_background(scene.background()))
    }

    /// Phase advance per second.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Text and placeholder colours.
    pub fn with_colors(mut self, fill: ColorDef, placeholder: ColorDef) -> Self {
        self.fill = fill;
        self.placeholder = placeholder;
        self
    }

    /// Background under the text.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Same composer retargeted to `canvas`.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self.params.canvas_width = f64::from(canvas.width);
        self.params.canvas_height = f64::from(canvas.height);
        self
    }

    /// Replace the text; blank input becomes the placeholder.
    pub fn set_text(&mut self, raw: &str) {
        self.input = TextInput::from_raw(raw);
    }

    /// Current text.
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Layout parameters at phase 0.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Colour of real text.
    pub fn fill(&self) -> ColorDef {
        self.fill
    }

    /// Background under the text.
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// The shared font slot.
    pub fn font(&self) -> &Arc<FontSlot> {
        &self.font
    }

    /// Layout phase for animation time `time`.
    pub fn phase_at(&self, time: f64) -> f64 {
        time * self.speed
    }

    /// Placements at `phase` measured with `metrics`.
    pub fn placements(&self, phase: f64, metrics: &dyn FontMetrics) -> Vec<Placement> {
        compute_text_layout(
            &self.input.text,
            self.input.has_content,
            &self.params.with_phase(phase),
            metrics,
        )
    }

    /// Draw the frame at animation time `time` seconds.
    #[tracing::instrument(skip(self), fields(w = self.canvas.width, h = self.canvas.height))]
    pub fn render_at(&self, time: f64) -> KinetypeResult<FrameRGBA> {
        self.render(time, self.phase_at(time))
    }

    /// Draw a single frame at an explicit layout phase, with the background at time 0.
    pub fn render_phase(&self, phase: f64) -> KinetypeResult<FrameRGBA> {
        self.render(0.0, phase)
    }

    fn render(&self, time: f64, phase: f64) -> KinetypeResult<FrameRGBA> {
        let metrics = self.font.current();
        let mut surface = Surface::new(self.canvas.width, self.canvas.height)?;
        paint_background(&mut surface, &self.background, time)?;
        let placements = self.placements(phase, metrics.as_ref());
        let report = paint_placements(
            &mut surface,
            &placements,
            metrics.as_ref(),
            self.fill,
            self.placeholder,
        );
        tracing::trace!(
            chars = placements.len(),
            outlined = report.outlined,
            host_text = report.host_text,
            "frame painted"
        );
        Ok(surface.snapshot())
    }
}

fn pixel_side(name: &str, v: f64) -> KinetypeResult<u32> {
    if v.fract() != 0.0 || v > f64::from(u32::MAX) {
        return Err(KinetypeError::validation(format!(
            "layout {name} must be a whole number of pixels, got {v}"
        )));
    }
    Ok(v as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/session/composer.rs"]
mod tests;
