use super::*;
use crate::font::box_font::BoxFont;

fn params(alignment: Alignment) -> LayoutParams {
    LayoutParams {
        alignment,
        amplitude: 120.0,
        phase: 0.7,
        additional_phase: 0.3,
        row_offset: 0.25,
        ..LayoutParams::for_canvas(1920.0, 1080.0)
    }
}

#[test]
fn font_size_boundaries() {
    let h = 1080.0;
    assert_eq!(font_size_for_row(1, h), h / 15.0);
    assert_eq!(font_size_for_row(20, h), h / 15.0);
    assert!((font_size_for_row(21, h) - h / 15.625).abs() < 1e-9);
    assert!((font_size_for_row(60, h) - h / 40.0).abs() < 1e-9);
    assert_eq!(font_size_for_row(80, h), font_size_for_row(60, h));
    assert_eq!(font_size_for_row(500, h), font_size_for_row(60, h));
    assert!(font_size_for_row(40, h) < font_size_for_row(21, h));
}

#[test]
fn center_intensity_tapers_to_edges() {
    assert_eq!(center_intensity(0, 1), 1.0);
    assert_eq!(center_intensity(0, 5), 0.0);
    assert_eq!(center_intensity(4, 5), 0.0);
    assert_eq!(center_intensity(2, 5), 1.0);
    assert!((center_intensity(1, 5) - 0.5).abs() < 1e-12);
}

#[test]
fn layout_is_deterministic() {
    let font = BoxFont::new();
    for alignment in [Alignment::Left, Alignment::Justified] {
        let p = params(alignment);
        let a = compute_text_layout("Kinetic type\nin motion", true, &p, &font);
        let b = compute_text_layout("Kinetic type\nin motion", true, &p, &font);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.character, y.character);
            assert_eq!(x.x.to_bits(), y.x.to_bits());
            assert_eq!(x.y.to_bits(), y.y.to_bits());
            assert_eq!(x.font_size.to_bits(), y.font_size.to_bits());
        }
    }
}

#[test]
fn empty_text_has_no_placements() {
    let font = BoxFont::new();
    assert!(compute_text_layout("", true, &params(Alignment::Left), &font).is_empty());
    assert!(compute_layout(&[], &params(Alignment::Justified), true, &font).is_empty());
}

#[test]
fn characters_are_upper_cased() {
    let font = BoxFont::new();
    let out = compute_text_layout("abc ß", true, &params(Alignment::Left), &font);
    let chars: String = out.iter().map(|p| p.character).collect();
    // 'ß' upper-cases to two characters and is kept as-is.
    assert_eq!(chars, "ABC ß");
}

#[test]
fn has_content_flag_propagates() {
    let font = BoxFont::new();
    let out = compute_text_layout("Start typing your title", false, &params(Alignment::Left), &font);
    assert!(!out.is_empty());
    assert!(out.iter().all(|p| !p.has_content));
}

#[test]
fn first_baseline_is_margin_plus_ascent_and_rows_stack() {
    let font = BoxFont::new();
    let p = params(Alignment::Left);
    let out = compute_text_layout("one\ntwo\nthree", true, &p, &font);
    let size = 1080.0 / 15.0;
    let first = out.iter().find(|c| c.row == 0).unwrap();
    assert!((first.y - (p.vertical_margin + size * 0.75)).abs() < 1e-9);

    let second = out.iter().find(|c| c.row == 1).unwrap();
    let third = out.iter().find(|c| c.row == 2).unwrap();
    assert!((second.y - first.y - size * 1.25).abs() < 1e-9);
    assert!((third.y - second.y - size * 1.25).abs() < 1e-9);
}

#[test]
fn row_pitch_never_drops_below_ten_pixels() {
    let font = BoxFont::new();
    let p = LayoutParams {
        canvas_height: 30.0,
        line_height: 0.5,
        ..params(Alignment::Left)
    };
    let out = compute_text_layout("a\nb", true, &p, &font);
    assert_eq!(out.len(), 2);
    assert!((out[1].y - out[0].y - 10.0).abs() < 1e-9);
}

#[test]
fn pitch_uses_previous_row_font_size() {
    let font = BoxFont::new();
    let p = params(Alignment::Justified);
    let long = "abcdefghijklmnopqrstuvwxyzabcd"; // 30 chars, alone on its row
    let out = compute_text_layout(&format!("{long}\nhi"), true, &p, &font);
    let small = font_size_for_row(30, 1080.0);
    let r0 = out.iter().find(|c| c.row == 0).unwrap();
    let r1 = out.iter().find(|c| c.row == 1).unwrap();
    assert!((r0.font_size - small).abs() < 1e-9);
    assert!((r1.y - r0.y - small * 1.25).abs() < 1e-9);
}

#[test]
fn left_mode_pins_first_character_and_grows_geometrically() {
    let font = BoxFont::new();
    let p = params(Alignment::Left);
    let out = compute_text_layout("HELLO", true, &p, &font);
    assert_eq!(out[0].x, p.margin);
    assert_eq!(out[0].offset, 0.0);

    let n = out.len() as f64;
    let wave = ((p.phase + p.additional_phase + p.row_offset).sin() * 0.5 + 0.5) * p.amplitude * 0.1;
    for (i, c) in out.iter().enumerate().skip(1) {
        let multiplier = c.offset / (wave * i as f64 / n);
        assert!((multiplier - 1.4f64.powi(i as i32)).abs() < 1e-9, "i={i}");
    }
}

#[test]
fn left_mode_advances_by_measured_width_only() {
    let font = BoxFont::new();
    let p = params(Alignment::Left);
    let out = compute_text_layout("WIM", true, &p, &font);
    let size = out[0].font_size;
    let pen: Vec<f64> = out.iter().map(|c| c.x - c.offset).collect();
    assert_eq!(pen[0], p.margin);
    assert!((pen[1] - (p.margin + 0.9 * size)).abs() < 1e-9);
    assert!((pen[2] - (p.margin + 1.2 * size)).abs() < 1e-9);
}

#[test]
fn left_mode_with_zero_amplitude_is_static() {
    let font = BoxFont::new();
    let p = LayoutParams {
        amplitude: 0.0,
        ..params(Alignment::Left)
    };
    let a = compute_text_layout("STATIC", true, &p.with_phase(0.0), &font);
    let b = compute_text_layout("STATIC", true, &p.with_phase(2.0), &font);
    assert_eq!(a, b);
    assert!(a.iter().all(|c| c.offset == 0.0));
}

#[test]
fn justified_edges_are_locked_for_any_phase() {
    let font = BoxFont::new();
    for k in 0..32 {
        let p = LayoutParams {
            amplitude: 50.0 + k as f64 * 37.0,
            ..params(Alignment::Justified).with_phase(k as f64 * 0.37)
        };
        let out = compute_text_layout("edge lock\nab\nwave row text", true, &p, &font);
        for row in 0..3 {
            let cs: Vec<_> = out.iter().filter(|c| c.row == row).collect();
            assert_eq!(cs.first().unwrap().offset, 0.0);
            assert_eq!(cs.last().unwrap().offset, 0.0);
        }
    }
}

#[test]
fn justified_last_character_lands_on_right_margin() {
    let font = BoxFont::new();
    let p = params(Alignment::Justified);
    let out = compute_text_layout("JUSTIFY", true, &p, &font);
    let first = out.first().unwrap();
    let last = out.last().unwrap();
    assert!((first.x - p.margin).abs() < 1e-9);
    let last_w = BoxFont::advance_ratio('Y') * last.font_size;
    let expected = p.margin + (p.canvas_width - 2.0 * p.margin) - last_w;
    assert!((last.x - expected).abs() < 1e-6);
}

#[test]
fn justified_overflow_gets_no_gap() {
    let font = BoxFont::new();
    let p = LayoutParams {
        margin: 950.0,
        amplitude: 0.0,
        ..params(Alignment::Justified)
    };
    let out = compute_text_layout("AB", true, &p, &font);
    let w = BoxFont::advance_ratio('A') * out[0].font_size;
    assert!((out[1].x - (out[0].x + w)).abs() < 1e-9);
}

#[test]
fn justified_interior_offset_follows_tapered_sine() {
    let font = BoxFont::new();
    let p = params(Alignment::Justified);
    let out = compute_text_layout("ABCDE", true, &p, &font);
    let angle = std::f64::consts::PI / 5.0 * 2.0 + p.phase + p.additional_phase + p.row_offset;
    let expected = angle.sin() * p.amplitude * 1.0;
    assert!((out[2].offset - expected).abs() < 1e-9);
}

#[test]
fn single_character_row_is_finite() {
    let font = BoxFont::new();
    for alignment in [Alignment::Left, Alignment::Justified] {
        let p = params(alignment);
        let out = compute_text_layout("x", true, &p, &font);
        assert_eq!(out.len(), 1);
        assert!(out[0].x.is_finite());
        assert!(out[0].y.is_finite());
        assert_eq!(out[0].x, p.margin);
    }
}

#[test]
fn zero_margin_spans_the_full_width() {
    let font = BoxFont::new();
    let p = LayoutParams {
        margin: 0.0,
        amplitude: 0.0,
        ..params(Alignment::Justified)
    };
    let out = compute_text_layout("AA", true, &p, &font);
    let w = BoxFont::advance_ratio('A') * out[0].font_size;
    assert_eq!(out[0].x, 0.0);
    assert!((out[1].x - (1920.0 - w)).abs() < 1e-9);
}
