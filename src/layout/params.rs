use crate::foundation::error::{KinetypeError, KinetypeResult};

/// Horizontal placement algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Cumulative placement from the left margin with a whip-like displacement toward row ends.
    Left,
    /// Edge-locked full justification with a centre-weighted sine displacement.
    #[default]
    Justified,
}

/// Immutable parameter snapshot for one layout call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutParams {
    /// Horizontal margin in pixels.
    pub margin: f64,
    /// Distance from the top edge to the first row's ascent line, in pixels.
    pub vertical_margin: f64,
    /// Wave displacement magnitude.
    pub amplitude: f64,
    /// Time-derived phase in radians.
    pub phase: f64,
    /// User-controlled phase offset in radians.
    pub additional_phase: f64,
    /// Phase increment per row in radians.
    pub row_offset: f64,
    /// Per-character growth of the left-mode displacement multiplier.
    pub oscillation_factor: f64,
    /// Row pitch as a multiple of the previous row's font size.
    pub line_height: f64,
    /// Horizontal placement algorithm.
    pub alignment: Alignment,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl LayoutParams {
    /// Default oscillation factor.
    pub const DEFAULT_OSCILLATION_FACTOR: f64 = 1.4;
    /// Default line-height multiplier.
    pub const DEFAULT_LINE_HEIGHT: f64 = 1.25;
    /// Smallest accepted line-height multiplier.
    pub const MIN_LINE_HEIGHT: f64 = 0.5;
    /// Smallest row pitch in pixels.
    pub const MIN_ROW_PITCH: f64 = 10.0;

    /// Default parameters for a canvas of `width x height` pixels.
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Same parameters with a different phase.
    pub fn with_phase(self, phase: f64) -> Self {
        Self { phase, ..self }
    }

    /// Clamp margins to `>= 0` and the line height to `>= MIN_LINE_HEIGHT`.
    pub fn sanitized(self) -> Self {
        Self {
            margin: self.margin.max(0.0),
            vertical_margin: self.vertical_margin.max(0.0),
            line_height: self.line_height.max(Self::MIN_LINE_HEIGHT),
            ..self
        }
    }

    /// Reject non-finite values and non-positive canvas sizes.
    pub fn validate(&self) -> KinetypeResult<()> {
        let fields = [
            ("margin", self.margin),
            ("vertical_margin", self.vertical_margin),
            ("amplitude", self.amplitude),
            ("phase", self.phase),
            ("additional_phase", self.additional_phase),
            ("row_offset", self.row_offset),
            ("oscillation_factor", self.oscillation_factor),
            ("line_height", self.line_height),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(KinetypeError::validation(format!(
                    "layout {name} must be finite"
                )));
            }
        }
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(KinetypeError::validation(
                "layout canvas width/height must be > 0",
            ));
        }
        Ok(())
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            margin: 120.0,
            vertical_margin: 120.0,
            amplitude: 80.0,
            phase: 0.0,
            additional_phase: 0.0,
            row_offset: 0.5,
            oscillation_factor: Self::DEFAULT_OSCILLATION_FACTOR,
            line_height: Self::DEFAULT_LINE_HEIGHT,
            alignment: Alignment::Justified,
            canvas_width: 1920.0,
            canvas_height: 1080.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/params.rs"]
mod tests;
