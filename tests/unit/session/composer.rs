use super::*;
use crate::font::box_font::BoxFont;
use crate::render::gradient::GradientShader;

fn composer(text: &str) -> FrameComposer {
    let slot = Arc::new(FontSlot::new(Arc::new(BoxFont::new())));
    FrameComposer::new(
        TextInput::from_raw(text),
        LayoutParams::for_canvas(320.0, 180.0),
        slot,
    )
    .unwrap()
}

#[test]
fn same_time_renders_identical_pixels() {
    let c = composer("wave me");
    let a = c.render_at(1.25).unwrap();
    let b = c.render_at(1.25).unwrap();
    assert_eq!(a, b);
    assert_eq!((a.width, a.height), (320, 180));
}

#[test]
fn time_moves_the_text() {
    let c = composer("hello wavy world");
    assert_ne!(c.render_at(0.0).unwrap(), c.render_at(0.7).unwrap());
}

#[test]
fn speed_scales_the_phase() {
    let c = composer("abc").with_speed(2.0);
    assert_eq!(c.phase_at(1.5), 3.0);
    let solid = c.clone();
    assert_eq!(solid.render_at(1.5).unwrap(), solid.render_phase(3.0).unwrap());
}

#[test]
fn render_phase_freezes_the_background() {
    let c = composer("abc").with_background(Background::Gradient(GradientShader::default()));
    assert_eq!(
        c.render_phase(2.0).unwrap(),
        c.render_phase(2.0).unwrap()
    );
    let at_zero = c.clone().with_speed(0.0);
    assert_eq!(at_zero.render_at(0.0).unwrap(), c.render_phase(0.0).unwrap());
}

#[test]
fn with_canvas_retargets_layout() {
    let c = composer("abc").with_canvas(Canvas::EXPORT);
    assert_eq!(c.params().canvas_width, 1920.0);
    let metrics = c.font().current();
    let p = c.placements(0.0, metrics.as_ref());
    assert_eq!(p[0].font_size, 1080.0 / 15.0);
}

#[test]
fn placeholder_text_is_marked() {
    let mut c = composer("   ");
    assert!(!c.input().has_content);
    let metrics = c.font().current();
    assert!(c.placements(0.0, metrics.as_ref()).iter().all(|p| !p.has_content));
    c.set_text("real");
    assert!(c.input().has_content);
}

#[test]
fn invalid_params_are_rejected() {
    let slot = Arc::new(FontSlot::new(Arc::new(BoxFont::new())));
    let err = FrameComposer::new(
        TextInput::from_raw("x"),
        LayoutParams::for_canvas(0.0, 10.0),
        slot,
    )
    .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn fractional_canvas_is_rejected() {
    let slot = Arc::new(FontSlot::new(Arc::new(BoxFont::new())));
    let err = FrameComposer::new(
        TextInput::from_raw("x"),
        LayoutParams::for_canvas(320.5, 180.0),
        slot.clone(),
    )
    .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("canvas_width"), "{err}");

    let c = FrameComposer::new(
        TextInput::from_raw("x"),
        LayoutParams::for_canvas(320.0, 180.0),
        slot,
    )
    .unwrap();
    assert_eq!(f64::from(c.canvas().width), c.params().canvas_width);
    assert_eq!(f64::from(c.canvas().height), c.params().canvas_height);
}

#[test]
fn font_swap_takes_effect_on_the_next_frame() {
    let c = composer("MMM");
    let before = c.render_at(0.0).unwrap();
    c.font().replace(Arc::new(crate::font::ApproximateMetrics));
    let after = c.render_at(0.0).unwrap();
    assert_ne!(before, after);
}
