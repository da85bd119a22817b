use crate::font::FontMetrics;
use crate::layout::Placement;
use crate::render::color::ColorDef;
use crate::render::surface::Surface;

/// Opacity applied to placeholder text.
pub const PLACEHOLDER_OPACITY: f32 = 0.4;

/// How each placement of one [`paint_placements`] call was drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintReport {
    /// Filled from a vector outline.
    pub outlined: usize,
    /// Painted through the host text primitive.
    pub host_text: usize,
    /// Neither path was available.
    pub skipped: usize,
}

/// Paint every placement onto `surface`.
///
/// Real content is filled with `fill`; placeholder content with `placeholder` at
/// [`PLACEHOLDER_OPACITY`]. The glyph outline is used when the provider has one, otherwise the
/// host text run, both anchored at the placement's `(x, y)` baseline origin.
pub fn paint_placements(
    surface: &mut Surface,
    placements: &[Placement],
    metrics: &dyn FontMetrics,
    fill: ColorDef,
    placeholder: ColorDef,
) -> PaintReport {
    let mut report = PaintReport::default();
    for p in placements {
        let (color, opacity) = if p.has_content {
            (fill, 1.0)
        } else {
            (placeholder, PLACEHOLDER_OPACITY)
        };

        if let Some(path) = metrics.outline(p.character, p.x, p.y, p.font_size) {
            if !path.elements().is_empty() {
                surface.fill_path(&path, color, opacity);
            }
            report.outlined += 1;
        } else if let Some(run) = metrics.host_run(p.character, p.font_size) {
            surface.fill_glyph_run(&run, p.x, p.y, p.font_size as f32, color, opacity);
            report.host_text += 1;
        } else {
            report.skipped += 1;
        }
    }

    if report.skipped > 0 {
        tracing::warn!(
            skipped = report.skipped,
            font = metrics.name(),
            "no outline or host glyphs for some characters"
        );
    }
    report
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
