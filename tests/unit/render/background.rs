use super::*;
use crate::render::gradient::ANCHOR_COUNT;

#[test]
fn solid_background_is_flat() {
    let mut s = Surface::new(6, 3).unwrap();
    paint_background(&mut s, &Background::Solid(ColorDef::rgb8(1, 2, 3)), 99.0).unwrap();
    let f = s.snapshot();
    assert!(f.data.chunks_exact(4).all(|px| px == [1, 2, 3, 255]));
}

#[test]
fn gradient_background_tracks_the_shader() {
    let shader = GradientShader::default();
    let mut s = Surface::new(16, 9).unwrap();
    paint_background(&mut s, &Background::Gradient(shader), 2.0).unwrap();
    let f = s.snapshot();
    let expected = shader.shade(16, 9, 2.0);
    for (got, want) in f.data.chunks_exact(4).zip(expected.chunks_exact(4)) {
        assert_eq!(got[3], 255);
        for c in 0..3 {
            assert!(got[c].abs_diff(want[c]) <= 2, "{got:?} vs {want:?}");
        }
    }
}

#[test]
fn uniform_gradient_matches_solid() {
    let c = ColorDef::rgb8(90, 60, 30);
    let mut a = Surface::new(8, 8).unwrap();
    let mut b = Surface::new(8, 8).unwrap();
    paint_background(&mut a, &Background::Solid(c), 0.0).unwrap();
    paint_background(
        &mut b,
        &Background::Gradient(GradientShader::new([c; ANCHOR_COUNT])),
        0.0,
    )
    .unwrap();
    let (fa, fb) = (a.snapshot(), b.snapshot());
    for (pa, pb) in fa.data.chunks_exact(4).zip(fb.data.chunks_exact(4)) {
        for c in 0..4 {
            assert!(pa[c].abs_diff(pb[c]) <= 2);
        }
    }
    assert!(!Background::Solid(c).is_animated());
    assert!(Background::Gradient(GradientShader::default()).is_animated());
}
