use std::borrow::Cow;
use std::sync::Mutex;

use crate::font::{FontMetrics, HostGlyph, HostRun};
use crate::foundation::core::BezPath;
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::foundation::math::Fnv1a64;

const ASCENT_RATIO: f64 = 0.8;
const DESCENT_RATIO: f64 = 0.2;
const MEASURE_SIZE: f32 = 100.0;

/// Parley shaping contexts bound to one registered family.
struct HostTextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family: String,
}

#[derive(Debug, Default)]
struct ShapedLine {
    glyphs: Vec<HostGlyph>,
    advance: f32,
    ascent: f32,
    descent: f32,
}

impl HostTextEngine {
    fn new(font_bytes: Vec<u8>) -> KinetypeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| KinetypeError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| KinetypeError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    fn shape(&mut self, text: &str, size_px: f32) -> ShapedLine {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut out = ShapedLine::default();
        for line in layout.lines() {
            let metrics = line.metrics();
            out.ascent = out.ascent.max(metrics.ascent);
            out.descent = out.descent.max(metrics.descent);
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                for g in run.glyphs() {
                    out.glyphs.push(HostGlyph {
                        id: g.id,
                        x: g.x,
                        y: g.y - metrics.baseline,
                    });
                    out.advance += g.advance;
                }
            }
        }
        out
    }
}

/// The system sans-serif face measured and painted through the host text stack.
///
/// Used whenever no custom font is loaded. It exposes no vector outlines; characters are painted
/// as shaped glyph runs instead.
pub struct SystemFont {
    id: u64,
    name: String,
    font: vello_cpu::peniko::FontData,
    engine: Mutex<HostTextEngine>,
    ascent_ratio: f64,
    descent_ratio: f64,
}

impl std::fmt::Debug for SystemFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFont")
            .field("name", &self.name)
            .field("ascent_ratio", &self.ascent_ratio)
            .field("descent_ratio", &self.descent_ratio)
            .finish_non_exhaustive()
    }
}

impl SystemFont {
    /// Find the default sans-serif face among the installed system fonts.
    #[tracing::instrument]
    pub fn discover() -> KinetypeResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        let query = usvg::fontdb::Query {
            families: &[usvg::fontdb::Family::SansSerif],
            ..usvg::fontdb::Query::default()
        };
        let id = db
            .query(&query)
            .ok_or_else(|| KinetypeError::font("no system sans-serif font found"))?;
        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| KinetypeError::font("system font face data unavailable"))?;
        Self::from_face(bytes, index)
    }

    /// Build a host-text provider from raw face bytes.
    pub fn from_face(bytes: Vec<u8>, index: u32) -> KinetypeResult<Self> {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(b"system:");
        h.write_bytes(&bytes);
        h.write_u64(u64::from(index));

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes.clone()),
            index,
        );
        let mut engine = HostTextEngine::new(bytes)?;

        let sample = engine.shape("Mg", MEASURE_SIZE);
        let ratio = |measured: f32, fallback: f64| {
            if measured.is_finite() && measured > 0.0 {
                f64::from(measured) / f64::from(MEASURE_SIZE)
            } else {
                fallback
            }
        };
        let ascent_ratio = ratio(sample.ascent, ASCENT_RATIO);
        let descent_ratio = ratio(sample.descent, DESCENT_RATIO);
        let name = engine.family.clone();
        tracing::debug!(%name, ascent_ratio, descent_ratio, "system font ready");

        Ok(Self {
            id: h.finish(),
            name,
            font,
            engine: Mutex::new(engine),
            ascent_ratio,
            descent_ratio,
        })
    }

    fn shape_char(&self, ch: char, font_size: f64) -> Option<ShapedLine> {
        let mut buf = [0u8; 4];
        let text = ch.encode_utf8(&mut buf);
        let mut engine = self.engine.lock().ok()?;
        Some(engine.shape(text, font_size as f32))
    }
}

impl FontMetrics for SystemFont {
    fn font_id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_custom_font(&self) -> bool {
        false
    }

    fn advance_width(&self, ch: char, font_size: f64) -> f64 {
        self.shape_char(ch, font_size)
            .map(|s| f64::from(s.advance))
            .unwrap_or(font_size * ApproximateMetrics::ADVANCE_RATIO)
    }

    fn ascent(&self, font_size: f64) -> f64 {
        font_size * self.ascent_ratio
    }

    fn descent(&self, font_size: f64) -> f64 {
        font_size * self.descent_ratio
    }

    fn outline(&self, _ch: char, _x: f64, _y: f64, _font_size: f64) -> Option<BezPath> {
        None
    }

    fn host_run(&self, ch: char, font_size: f64) -> Option<HostRun> {
        let shaped = self.shape_char(ch, font_size)?;
        Some(HostRun {
            font: self.font.clone(),
            glyphs: shaped.glyphs,
        })
    }
}

/// Last-resort metrics when neither a custom nor a system font is available.
///
/// Nothing is painted with these metrics; they only keep layout well-defined.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateMetrics;

impl ApproximateMetrics {
    /// Advance width as a fraction of the font size.
    pub const ADVANCE_RATIO: f64 = 0.6;
}

impl FontMetrics for ApproximateMetrics {
    fn font_id(&self) -> u64 {
        0
    }

    fn name(&self) -> &str {
        "approximate"
    }

    fn has_custom_font(&self) -> bool {
        false
    }

    fn advance_width(&self, _ch: char, font_size: f64) -> f64 {
        font_size * Self::ADVANCE_RATIO
    }

    fn ascent(&self, font_size: f64) -> f64 {
        font_size * ASCENT_RATIO
    }

    fn descent(&self, font_size: f64) -> f64 {
        font_size * DESCENT_RATIO
    }

    fn outline(&self, _ch: char, _x: f64, _y: f64, _font_size: f64) -> Option<BezPath> {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/system.rs"]
mod tests;
