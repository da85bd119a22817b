use std::fmt::Write as _;
use std::path::Path;

use base64::Engine as _;
use kurbo::PathEl;

use crate::export::png::encode_png;
use crate::export::{ensure_exportable, write_atomically};
use crate::foundation::core::{BezPath, Canvas};
use crate::foundation::error::{KinetypeError, KinetypeResult};
use crate::render::background::Background;
use crate::render::backend::FrameRGBA;
use crate::render::color::ColorDef;
use crate::session::FrameComposer;

/// Build the SVG document for animation time `time`.
///
/// The background comes first: a `<rect>` for flat colours, an embedded PNG snapshot for the
/// gradient. Each character follows as one absolute-coordinate `<path>`. Requires a font with
/// outlines.
#[tracing::instrument(skip(composer))]
pub fn render_svg(composer: &FrameComposer, time: f64) -> KinetypeResult<String> {
    ensure_exportable(composer.input())?;
    let metrics = composer.font().current();
    if !metrics.has_custom_font() {
        return Err(KinetypeError::validation(
            "SVG export needs a loaded font with glyph outlines",
        ));
    }

    let composer = composer.clone().with_canvas(Canvas::EXPORT);
    let Canvas { width, height } = composer.canvas();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    svg.push('\n');

    match composer.background() {
        Background::Solid(color) => {
            let _ = writeln!(
                svg,
                r#"<rect x="0" y="0" width="{width}" height="{height}"{}/>"#,
                fill_attrs(*color)
            );
        }
        Background::Gradient(shader) => {
            let frame = FrameRGBA {
                width,
                height,
                data: shader.shade(width, height, time),
            };
            let png = encode_png(&frame)?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(png);
            let _ = writeln!(
                svg,
                r#"<image x="0" y="0" width="{width}" height="{height}" preserveAspectRatio="xMidYMid slice" xlink:href="data:image/png;base64,{encoded}"/>"#
            );
        }
    }

    let placements = composer.placements(composer.phase_at(time), metrics.as_ref());
    let fill = composer.fill();
    let mut paths = 0usize;
    for p in &placements {
        let Some(path) = metrics.outline(p.character, p.x, p.y, p.font_size) else {
            continue;
        };
        if path.elements().is_empty() {
            continue;
        }
        let _ = writeln!(svg, r#"<path d="{}"{}/>"#, path_data(&path), fill_attrs(fill));
        paths += 1;
    }
    svg.push_str("</svg>\n");

    tracing::debug!(chars = placements.len(), paths, "svg built");
    Ok(svg)
}

/// Render the SVG for `time` and write it to `out`.
#[tracing::instrument(skip(composer), fields(out = %out.display()))]
pub fn export_svg(composer: &FrameComposer, time: f64, out: &Path) -> KinetypeResult<()> {
    let svg = render_svg(composer, time)?;
    write_atomically(out, svg.as_bytes())
}

fn fill_attrs(color: ColorDef) -> String {
    let mut s = format!(r#" fill="{}""#, color.to_hex_rgb());
    if color.a < 1.0 {
        let _ = write!(s, r#" fill-opacity="{}""#, num(color.a.clamp(0.0, 1.0)));
    }
    s
}

/// Absolute SVG path data (`M`, `L`, `Q`, `C`, `Z`).
pub(crate) fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match *el {
            PathEl::MoveTo(p) => write!(d, "M{} {}", num(p.x), num(p.y)),
            PathEl::LineTo(p) => write!(d, "L{} {}", num(p.x), num(p.y)),
            PathEl::QuadTo(a, b) => {
                write!(d, "Q{} {} {} {}", num(a.x), num(a.y), num(b.x), num(b.y))
            }
            PathEl::CurveTo(a, b, c) => write!(
                d,
                "C{} {} {} {} {} {}",
                num(a.x),
                num(a.y),
                num(b.x),
                num(b.y),
                num(c.x),
                num(c.y)
            ),
            PathEl::ClosePath => write!(d, "Z"),
        };
    }
    d
}

/// Coordinates rounded to 1/1000 px with trailing zeros dropped.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_owned(),
        s => s.to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
