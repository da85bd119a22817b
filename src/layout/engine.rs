use crate::font::FontMetrics;
use crate::foundation::math::map_range;
use crate::layout::params::{Alignment, LayoutParams};
use crate::text::segment::{ROW_WRAP_CHARS, Row, segment};

/// Longest row length that still shrinks the font; longer rows keep the smallest size.
pub const MAX_SCALED_ROW_CHARS: usize = 60;

const MIN_DIVISOR: f64 = 15.0;
const MAX_DIVISOR: f64 = 40.0;
const LEFT_DISPLACEMENT_SCALE: f64 = 0.1;

/// One character's resolved position for a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Upper-cased character to paint.
    pub character: char,
    /// Pen x of the glyph origin, displacement included.
    pub x: f64,
    /// Baseline y.
    pub y: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// `false` for placeholder text.
    pub has_content: bool,
    /// Wave displacement already folded into `x`.
    pub offset: f64,
    /// Index of the row this character belongs to.
    pub row: usize,
}

/// Font size for a row of `row_len` characters on a canvas `canvas_height` pixels tall.
///
/// Rows up to 20 characters use `height / 15`; longer rows map `[20, 60]` onto a divisor in
/// `[15, 40]`. Rows beyond 60 characters keep the divisor at 40.
pub fn font_size_for_row(row_len: usize, canvas_height: f64) -> f64 {
    if row_len <= ROW_WRAP_CHARS {
        return canvas_height / MIN_DIVISOR;
    }
    let len = row_len.min(MAX_SCALED_ROW_CHARS) as f64;
    let divisor = map_range(
        len,
        ROW_WRAP_CHARS as f64,
        MAX_SCALED_ROW_CHARS as f64,
        MIN_DIVISOR,
        MAX_DIVISOR,
    );
    canvas_height / divisor
}

/// Justified-mode taper: 0 at both row ends, 1 at the centre. A one-character row gets 1.
pub fn center_intensity(index: usize, row_len: usize) -> f64 {
    if row_len <= 1 {
        return 1.0;
    }
    1.0 - map_range(index as f64, 0.0, (row_len - 1) as f64, 1.0, -1.0).abs()
}

/// Segment `text` and lay it out.
pub fn compute_text_layout(
    text: &str,
    has_content: bool,
    params: &LayoutParams,
    metrics: &dyn FontMetrics,
) -> Vec<Placement> {
    compute_layout(&segment(text), params, has_content, metrics)
}

/// Lay out pre-segmented rows.
///
/// Pure in `(rows, params, has_content)` for a given metrics provider.
pub fn compute_layout(
    rows: &[Row],
    params: &LayoutParams,
    has_content: bool,
    metrics: &dyn FontMetrics,
) -> Vec<Placement> {
    let mut out = Vec::with_capacity(rows.iter().map(Row::char_len).sum());
    let mut baseline = 0.0;
    let mut prev_pitch = 0.0;

    for (row_index, row) in rows.iter().enumerate() {
        let chars: Vec<char> = row.chars().map(display_char).collect();
        let font_size = font_size_for_row(chars.len(), params.canvas_height);

        if row_index == 0 {
            baseline = params.vertical_margin + metrics.ascent(font_size);
        } else {
            baseline += prev_pitch;
        }

        let line = RowLine {
            chars: &chars,
            row_index,
            font_size,
            baseline,
            has_content,
        };
        match params.alignment {
            Alignment::Left => place_left(&line, params, metrics, &mut out),
            Alignment::Justified => place_justified(&line, params, metrics, &mut out),
        }

        prev_pitch = (font_size * params.line_height).max(LayoutParams::MIN_ROW_PITCH);
    }

    out
}

struct RowLine<'a> {
    chars: &'a [char],
    row_index: usize,
    font_size: f64,
    baseline: f64,
    has_content: bool,
}

impl RowLine<'_> {
    fn row_angle(&self, params: &LayoutParams) -> f64 {
        params.phase + params.additional_phase + (self.row_index + 1) as f64 * params.row_offset
    }

    fn placement(&self, character: char, x: f64, offset: f64) -> Placement {
        Placement {
            character,
            x,
            y: self.baseline,
            font_size: self.font_size,
            has_content: self.has_content,
            offset,
            row: self.row_index,
        }
    }
}

fn place_left(
    line: &RowLine<'_>,
    params: &LayoutParams,
    metrics: &dyn FontMetrics,
    out: &mut Vec<Placement>,
) {
    let len = line.chars.len() as f64;
    let wave = (line.row_angle(params).sin() * 0.5 + 0.5) * params.amplitude * LEFT_DISPLACEMENT_SCALE;
    let mut x = params.margin;
    let mut oscillation = 1.0;

    for (i, &ch) in line.chars.iter().enumerate() {
        let offset = if i == 0 {
            0.0
        } else {
            wave * oscillation * (i as f64 / len)
        };
        out.push(line.placement(ch, x + offset, offset));

        x += metrics.advance_width(ch, line.font_size);
        oscillation *= params.oscillation_factor;
    }
}

fn place_justified(
    line: &RowLine<'_>,
    params: &LayoutParams,
    metrics: &dyn FontMetrics,
    out: &mut Vec<Placement>,
) {
    let n = line.chars.len();
    if n == 0 {
        return;
    }
    let widths: Vec<f64> = line
        .chars
        .iter()
        .map(|&ch| metrics.advance_width(ch, line.font_size))
        .collect();
    let ink: f64 = widths.iter().sum();
    let usable = params.canvas_width - 2.0 * params.margin;
    let gap = (usable - ink).max(0.0) / n.saturating_sub(1).max(1) as f64;

    let step = std::f64::consts::PI / n as f64;
    let row_angle = line.row_angle(params);
    let mut x = params.margin;

    for (i, (&ch, &w)) in line.chars.iter().zip(&widths).enumerate() {
        let edge = i == 0 || i == n - 1;
        let offset = if edge {
            0.0
        } else {
            (step * i as f64 + row_angle).sin() * params.amplitude * center_intensity(i, n)
        };
        out.push(line.placement(ch, x + offset, offset));

        x += w;
        if i + 1 < n {
            x += gap;
        }
    }
}

/// Upper-case mapping used for both measurement and painting.
///
/// Characters whose upper-case form expands to several scalars are kept unchanged so a row's
/// length never changes under case mapping.
fn display_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
