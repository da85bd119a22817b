use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::layout::{Alignment, LayoutParams};
use crate::render::color::ColorDef;
use crate::render::gradient::{ANCHOR_COUNT, default_gradient_colors};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SceneDef {
    #[serde(default)]
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) font: Option<PathBuf>,
    #[serde(default)]
    pub(crate) canvas: Canvas,
    #[serde(default)]
    pub(crate) layout: LayoutDef,
    #[serde(default)]
    pub(crate) colors: ColorsDef,
    #[serde(default)]
    pub(crate) background: BackgroundDef,
    #[serde(default)]
    pub(crate) playback: PlaybackDef,
    #[serde(default)]
    pub(crate) export: ExportDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LayoutDef {
    pub(crate) margin: f64,
    pub(crate) vertical_margin: f64,
    pub(crate) amplitude: f64,
    pub(crate) additional_phase: f64,
    pub(crate) row_offset: f64,
    pub(crate) oscillation_factor: f64,
    pub(crate) line_height: f64,
    pub(crate) alignment: Alignment,
    pub(crate) speed: f64,
}

impl Default for LayoutDef {
    fn default() -> Self {
        let p = LayoutParams::default();
        Self {
            margin: p.margin,
            vertical_margin: p.vertical_margin,
            amplitude: p.amplitude,
            additional_phase: p.additional_phase,
            row_offset: p.row_offset,
            oscillation_factor: p.oscillation_factor,
            line_height: p.line_height,
            alignment: p.alignment,
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ColorsDef {
    pub(crate) background: ColorDef,
    pub(crate) fill: ColorDef,
    pub(crate) placeholder: ColorDef,
}

impl Default for ColorsDef {
    fn default() -> Self {
        Self {
            background: ColorDef::rgb8(0, 0, 0),
            fill: ColorDef::rgb8(0xff, 0xff, 0xff),
            placeholder: ColorDef::rgb8(0xc0, 0xc0, 0xc0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub(crate) enum BackgroundDef {
    #[default]
    Solid,
    Gradient {
        #[serde(default = "default_gradient_colors")]
        colors: [ColorDef; ANCHOR_COUNT],
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PlaybackDef {
    pub(crate) target_fps: f64,
}

impl Default for PlaybackDef {
    fn default() -> Self {
        Self { target_fps: 30.0 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ExportDef {
    pub(crate) fps: u32,
    pub(crate) duration_secs: f64,
}

impl Default for ExportDef {
    fn default() -> Self {
        Self {
            fps: 60,
            duration_secs: 15.0,
        }
    }
}
