use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::export::video::VideoSettings;
use crate::foundation::core::Canvas;
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::layout::LayoutParams;
use crate::render::background::Background;
use crate::render::color::ColorDef;
use crate::render::gradient::GradientShader;
use crate::scene::model::{BackgroundDef, SceneDef};
use crate::text::input::TextInput;

/// A parsed scene file.
///
/// Every field is optional in JSON; missing values take their defaults. Relative font paths are
/// resolved against the directory of the scene file.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    def: SceneDef,
    base_dir: Option<PathBuf>,
}

impl Scene {
    /// Default scene showing `text`.
    pub fn with_default_settings(text: impl Into<String>) -> Self {
        Self::default().with_text(text)
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> KinetypeResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| KinetypeError::validation(format!("parse scene JSON: {e}")))?;
        Ok(Self {
            def,
            base_dir: None,
        })
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> KinetypeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KinetypeError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        let mut scene = Self::from_reader(BufReader::new(f))?;
        scene.base_dir = path.parent().map(Path::to_path_buf);
        Ok(scene)
    }

    /// Check sizes and numeric fields.
    pub fn validate(&self) -> KinetypeResult<()> {
        Canvas::new(self.def.canvas.width, self.def.canvas.height)?;
        self.layout_params().validate()?;
        if !self.def.layout.speed.is_finite() {
            return Err(KinetypeError::validation("layout speed must be finite"));
        }
        if !self.def.playback.target_fps.is_finite() {
            return Err(KinetypeError::validation("playback target_fps must be finite"));
        }
        self.video_settings()?;
        Ok(())
    }

    /// Replace the scene text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.def.text = text.into();
        self
    }

    /// Replace the font path. Relative paths are resolved against the current directory.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.def.font = Some(if path.is_relative() {
            std::env::current_dir()
                .map(|cwd| cwd.join(&path))
                .unwrap_or(path)
        } else {
            path
        });
        self
    }

    /// Raw scene text.
    pub fn text(&self) -> &str {
        &self.def.text
    }

    /// Text after placeholder substitution.
    pub fn text_input(&self) -> TextInput {
        TextInput::from_raw(&self.def.text)
    }

    /// Resolved font path, if the scene names one.
    pub fn font_path(&self) -> Option<PathBuf> {
        let font = self.def.font.as_ref()?;
        Some(match &self.base_dir {
            Some(dir) if font.is_relative() => dir.join(font),
            _ => font.clone(),
        })
    }

    /// Live preview canvas.
    pub fn canvas(&self) -> Canvas {
        self.def.canvas
    }

    /// Layout parameters for the scene canvas at phase 0, margins and line height clamped.
    pub fn layout_params(&self) -> LayoutParams {
        let l = &self.def.layout;
        LayoutParams {
            margin: l.margin,
            vertical_margin: l.vertical_margin,
            amplitude: l.amplitude,
            phase: 0.0,
            additional_phase: l.additional_phase,
            row_offset: l.row_offset,
            oscillation_factor: l.oscillation_factor,
            line_height: l.line_height,
            alignment: l.alignment,
            canvas_width: f64::from(self.def.canvas.width),
            canvas_height: f64::from(self.def.canvas.height),
        }
        .sanitized()
    }

    /// Phase advance per second of animation time.
    pub fn speed(&self) -> f64 {
        self.def.layout.speed
    }

    /// Colour of real text.
    pub fn fill(&self) -> ColorDef {
        self.def.colors.fill
    }

    /// Colour of placeholder text before the placeholder opacity is applied.
    pub fn placeholder(&self) -> ColorDef {
        self.def.colors.placeholder
    }

    /// Background painted under the text.
    pub fn background(&self) -> Background {
        match self.def.background {
            BackgroundDef::Solid => Background::Solid(self.def.colors.background),
            BackgroundDef::Gradient { colors } => Background::Gradient(GradientShader::new(colors)),
        }
    }

    /// Requested live frame rate before clamping.
    pub fn target_fps(&self) -> f64 {
        self.def.playback.target_fps
    }

    /// Video export frame rate and duration.
    pub fn video_settings(&self) -> KinetypeResult<VideoSettings> {
        VideoSettings::new(self.def.export.fps, self.def.export.duration_secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
