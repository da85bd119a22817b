use super::*;

#[test]
fn noise_is_bounded_and_repeatable() {
    for i in 0..200 {
        let x = i as f64 * 0.173 - 7.0;
        let y = i as f64 * 0.311 + 3.0;
        let v = value_noise(x, y);
        assert!((-1.0..=1.0).contains(&v));
        assert_eq!(v.to_bits(), value_noise(x, y).to_bits());
    }
}

#[test]
fn noise_is_continuous() {
    let mut prev = value_noise(0.0, 15.0);
    for i in 1..=10_000 {
        let v = value_noise(i as f64 * 1e-3, 15.0);
        assert!((v - prev).abs() < 0.01, "jump at step {i}");
        prev = v;
    }
}

#[test]
fn anchors_stay_in_range_and_drift_slowly() {
    for t in [0.0, 1.0, 15.0, 600.0] {
        for p in anchor_points(t) {
            assert!(p.x.abs() <= ANCHOR_RANGE && p.y.abs() <= ANCHOR_RANGE);
        }
    }
    let a = anchor_points(10.0);
    let b = anchor_points(10.0 + 1.0 / 60.0);
    for (p, q) in a.iter().zip(&b) {
        assert!((*p - *q).hypot() < 0.01);
    }
    assert_eq!(anchor_points(3.25), anchor_points(3.25));
}

#[test]
fn pixel_on_an_anchor_takes_its_colour() {
    let shader = GradientShader::new([
        ColorDef::rgb8(255, 0, 0),
        ColorDef::rgb8(0, 255, 0),
        ColorDef::rgb8(0, 0, 255),
        ColorDef::rgb8(255, 255, 255),
    ]);
    let anchors = [
        Point::new(-0.5, 0.5),
        Point::new(0.5, 0.5),
        Point::new(-0.5, -0.5),
        Point::new(0.5, -0.5),
    ];
    let c = shader.color_at(&anchors, Point::new(0.5, 0.5));
    assert!(c[1] > 0.99 && c[0] < 0.01 && c[2] < 0.01);

    // The centre is equidistant: plain average.
    let c = shader.color_at(&anchors, Point::new(0.0, 0.0));
    for (got, want) in c.iter().zip([0.5, 0.5, 0.5]) {
        assert!((got - want).abs() < 1e-9);
    }
}

#[test]
fn shade_is_opaque_and_deterministic() {
    let shader = GradientShader::default();
    let a = shader.shade(48, 27, 4.5);
    let b = shader.shade(48, 27, 4.5);
    assert_eq!(a.len(), 48 * 27 * 4);
    assert_eq!(a, b);
    assert!(a.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn uniform_colours_shade_uniformly() {
    let c = ColorDef::rgb8(12, 34, 56);
    let shader = GradientShader::new([c; ANCHOR_COUNT]);
    let px = shader.shade(5, 5, 0.0);
    assert!(px.chunks_exact(4).all(|p| p == [12, 34, 56, 255]));
}
