//! Synthetic outline font for tests: every glyph is a filled rectangle.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::font::FontMetrics;
use crate::foundation::core::BezPath;

/// Rectangle glyphs with per-character advances (`W`/`M` wide, `I` narrow, space medium).
#[derive(Debug, Default)]
pub(crate) struct BoxFont {
    pub(crate) advance_calls: AtomicUsize,
}

impl BoxFont {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn advance_ratio(ch: char) -> f64 {
        match ch {
            'W' | 'M' => 0.9,
            'I' | 'i' => 0.3,
            ' ' => 0.25,
            _ => 0.6,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.advance_calls.load(Ordering::Relaxed)
    }
}

impl FontMetrics for BoxFont {
    fn font_id(&self) -> u64 {
        0xB0C5
    }

    fn name(&self) -> &str {
        "box"
    }

    fn has_custom_font(&self) -> bool {
        true
    }

    fn advance_width(&self, ch: char, font_size: f64) -> f64 {
        self.advance_calls.fetch_add(1, Ordering::Relaxed);
        Self::advance_ratio(ch) * font_size
    }

    fn ascent(&self, font_size: f64) -> f64 {
        font_size * 0.75
    }

    fn descent(&self, font_size: f64) -> f64 {
        font_size * 0.25
    }

    fn outline(&self, ch: char, x: f64, y: f64, font_size: f64) -> Option<BezPath> {
        let mut p = BezPath::new();
        if ch == ' ' {
            return Some(p);
        }
        let w = Self::advance_ratio(ch) * font_size * 0.8;
        let h = font_size * 0.7;
        p.move_to((x, y));
        p.line_to((x + w, y));
        p.line_to((x + w, y - h));
        p.line_to((x, y - h));
        p.close_path();
        Some(p)
    }
}
