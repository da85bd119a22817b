#![allow(dead_code)]

use std::sync::Arc;

use kinetype::{BezPath, FontMetrics, FontSlot, FrameComposer, LayoutParams, TextInput};

/// Outline font whose glyphs are filled rectangles; independent of installed fonts.
#[derive(Debug, Default)]
pub struct BlockFont;

impl BlockFont {
    pub fn ratio(ch: char) -> f64 {
        match ch {
            'W' | 'M' => 0.9,
            'I' => 0.3,
            ' ' => 0.25,
            _ => 0.6,
        }
    }
}

impl FontMetrics for BlockFont {
    fn font_id(&self) -> u64 {
        0xB10C
    }

    fn name(&self) -> &str {
        "block"
    }

    fn has_custom_font(&self) -> bool {
        true
    }

    fn advance_width(&self, ch: char, font_size: f64) -> f64 {
        Self::ratio(ch) * font_size
    }

    fn ascent(&self, font_size: f64) -> f64 {
        font_size * 0.8
    }

    fn descent(&self, font_size: f64) -> f64 {
        font_size * 0.2
    }

    fn outline(&self, ch: char, x: f64, y: f64, font_size: f64) -> Option<BezPath> {
        let mut p = BezPath::new();
        if ch == ' ' {
            return Some(p);
        }
        let w = Self::ratio(ch) * font_size * 0.85;
        p.move_to((x, y));
        p.line_to((x + w, y));
        p.quad_to((x + w, y - font_size * 0.4), (x + w, y - font_size * 0.7));
        p.line_to((x, y - font_size * 0.7));
        p.close_path();
        Some(p)
    }
}

pub fn block_slot() -> Arc<FontSlot> {
    Arc::new(FontSlot::new(Arc::new(BlockFont)))
}

pub fn composer(text: &str, params: LayoutParams) -> FrameComposer {
    FrameComposer::new(TextInput::from_raw(text), params, block_slot()).unwrap()
}

pub fn out_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
