use std::path::Path;
use std::sync::Arc;

use crate::font::FontMetrics;
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::foundation::math::Fnv1a64;

/// File extensions accepted by [`OutlineFont::from_path`].
pub const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

const FALLBACK_UNITS_PER_EM: f64 = 1000.0;

/// A user-loaded TrueType/OpenType font backed by `ttf-parser`.
///
/// The face is parsed once to validate it and read vertical metrics; glyph queries re-borrow the
/// shared bytes so the type stays `Send + Sync` without self-references.
#[derive(Clone, Debug)]
pub struct OutlineFont {
    data: Arc<Vec<u8>>,
    index: u32,
    id: u64,
    name: String,
    units_per_em: f64,
    ascender: f64,
    descender: f64,
}

impl OutlineFont {
    /// Parse font bytes (face index 0).
    pub fn from_bytes(bytes: Vec<u8>) -> KinetypeResult<Self> {
        Self::from_bytes_with_index(bytes, 0)
    }

    /// Parse face `index` of a font file or collection.
    pub fn from_bytes_with_index(bytes: Vec<u8>, index: u32) -> KinetypeResult<Self> {
        let face = ttf_parser::Face::parse(&bytes, index)
            .map_err(|e| KinetypeError::font(format!("parse font face {index}: {e}")))?;

        let units_per_em = match face.units_per_em() {
            0 => FALLBACK_UNITS_PER_EM,
            u => f64::from(u),
        };
        let ascender = match face.ascender() {
            0 => 0.8 * units_per_em,
            a => f64::from(a),
        };
        let descender = match face.descender() {
            0 => 0.2 * units_per_em,
            d => f64::from(d).abs(),
        };
        let name = face_name(&face).unwrap_or_else(|| "custom font".to_owned());

        let mut h = Fnv1a64::new_default();
        h.write_bytes(&bytes);
        h.write_u64(u64::from(index));
        let id = h.finish();

        Ok(Self {
            data: Arc::new(bytes),
            index,
            id,
            name,
            units_per_em,
            ascender,
            descender,
        })
    }

    /// Read and parse a font file from disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> KinetypeResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !FONT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(KinetypeError::font(format!(
                "unsupported font file '{}' (expected one of: {})",
                path.display(),
                FONT_EXTENSIONS.join(", ")
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| KinetypeError::font(format!("read font '{}': {e}", path.display())))?;
        let font = Self::from_bytes(bytes)?;
        tracing::debug!(name = %font.name, units_per_em = font.units_per_em, "loaded font");
        Ok(font)
    }

    /// Font design units per em.
    pub fn units_per_em(&self) -> f64 {
        self.units_per_em
    }

    /// Raw font bytes and face index.
    pub fn face_data(&self) -> (&[u8], u32) {
        (&self.data, self.index)
    }

    fn with_face<R>(&self, f: impl FnOnce(&ttf_parser::Face<'_>) -> R) -> Option<R> {
        ttf_parser::Face::parse(&self.data, self.index)
            .ok()
            .map(|face| f(&face))
    }
}

impl FontMetrics for OutlineFont {
    fn font_id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_custom_font(&self) -> bool {
        true
    }

    fn advance_width(&self, ch: char, font_size: f64) -> f64 {
        let units = self
            .with_face(|face| {
                let gid = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
                face.glyph_hor_advance(gid).unwrap_or(0)
            })
            .unwrap_or(0);
        f64::from(units) * font_size / self.units_per_em
    }

    fn ascent(&self, font_size: f64) -> f64 {
        self.ascender * font_size / self.units_per_em
    }

    fn descent(&self, font_size: f64) -> f64 {
        self.descender * font_size / self.units_per_em
    }

    fn outline(&self, ch: char, x: f64, y: f64, font_size: f64) -> Option<BezPath> {
        let mut sink = PathSink {
            path: BezPath::new(),
            origin: Point::new(x, y),
            scale: font_size / self.units_per_em,
        };
        // Glyphs without contours (spaces) yield an empty path rather than a fallback.
        self.with_face(|face| {
            let gid = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
            face.outline_glyph(gid, &mut sink);
        })?;
        Some(sink.path)
    }
}

fn face_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    let names = face.names();
    [
        ttf_parser::name_id::FULL_NAME,
        ttf_parser::name_id::FAMILY,
    ]
    .into_iter()
    .find_map(|id| {
        names
            .into_iter()
            .filter(|n| n.name_id == id && n.is_unicode())
            .find_map(|n| n.to_string())
    })
}

/// Maps font units (y up) to canvas pixels (y down) around a baseline origin.
struct PathSink {
    path: BezPath,
    origin: Point,
    scale: f64,
}

impl PathSink {
    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.origin.x + f64::from(x) * self.scale,
            self.origin.y - f64::from(y) * self.scale,
        )
    }
}

impl ttf_parser::OutlineBuilder for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p1 = self.map(x1, y1);
        let p = self.map(x, y);
        self.path.quad_to(p1, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p1 = self.map(x1, y1);
        let p2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.path.curve_to(p1, p2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/outline.rs"]
mod tests;
