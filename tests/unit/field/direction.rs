use super::*;

#[test]
fn three_four_normalizes_exactly() {
    let d = Direction::new(Vec2::new(3.0, 4.0)).unwrap();
    assert_eq!(d.as_vec2(), Vec2::new(0.6, 0.8));
}

#[test]
fn output_is_unit_length_for_any_magnitude() {
    for v in [
        Vec2::new(1.0, 1.0),
        Vec2::new(-1e-9, 3e-9),
        Vec2::new(1e12, -7.0),
        Vec2::new(0.0, -1.0),
    ] {
        let d = Direction::new(v).unwrap().as_vec2();
        assert!((d.hypot() - 1.0).abs() < 1e-12, "{v:?} -> {d:?}");
    }
}

#[test]
fn perpendicular_rotates_clockwise_in_screen_space() {
    let d = Direction::new(Vec2::new(0.0, -1.0)).unwrap();
    let p = d.perpendicular();
    assert_eq!(p.x, -1.0);
    assert_eq!(p.y, 0.0);
    assert_eq!(d.as_vec2().dot(p), 0.0);
}

#[test]
fn degenerate_vectors_are_config_errors() {
    for v in [
        Vec2::ZERO,
        Vec2::new(f64::NAN, 1.0),
        Vec2::new(f64::INFINITY, 0.0),
    ] {
        let err = Direction::new(v).unwrap_err();
        assert!(matches!(err, LinefieldError::Config(_)), "{v:?}");
    }
}
