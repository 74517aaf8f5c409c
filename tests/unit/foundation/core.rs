use super::*;

#[test]
fn default_scale_is_ten() {
    assert_eq!(ResolutionScale::DEFAULT.factor(), 10.0);
    assert_eq!(ResolutionScale::default(), ResolutionScale::DEFAULT);
    assert_eq!(ResolutionScale::DEFAULT.apply(0.05), 0.5);
}

#[test]
fn scale_rejects_degenerate_factors() {
    assert!(ResolutionScale::new(0.0).is_err());
    assert!(ResolutionScale::new(-2.0).is_err());
    assert!(ResolutionScale::new(f64::NAN).is_err());
    assert!(ResolutionScale::new(f64::INFINITY).is_err());
    assert!(ResolutionScale::new(2.5).is_ok());
}

#[test]
fn surface_scaling_rounds_to_nearest() {
    let s = ResolutionScale::DEFAULT
        .surface(Surface::new(128, 96))
        .unwrap();
    assert_eq!(s, Surface::new(1280, 960));

    let s = ResolutionScale::new(1.5)
        .unwrap()
        .surface(Surface::new(3, 1))
        .unwrap();
    assert_eq!(s, Surface::new(5, 2));
}

#[test]
fn surface_scaling_overflow_is_config_error() {
    let err = ResolutionScale::DEFAULT
        .surface(Surface::new(u32::MAX, 1))
        .unwrap_err();
    assert!(matches!(err, LinefieldError::Config(_)));
}

#[test]
fn bottom_center_is_half_width_full_height() {
    assert_eq!(
        Surface::new(640, 480).bottom_center(),
        Point::new(320.0, 480.0)
    );
}
